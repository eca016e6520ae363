use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::consts::{CATHODE_COUNT, MAX_ATTEMPTS, PULSE_WIDTH, SETTLING_TIME};
use crate::dekatron_error::DekatronError;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Glow-transfer driver for a single OG-4 dekatron.
///
/// Owns both guide outputs, the K0 sense input and the delay used to pace the guide
/// pulses. Only cathode 0 is observable, so every positioning operation starts by
/// counting forward until K0 asserts.
pub struct Dekatron<OP1: OutputPin, OP2: OutputPin, IP: InputPin, D: DelayNs> {
    guide1: OP1,
    guide2: OP2,
    zero_sense: IP,
    delay: D,
}

impl<OP1, OP2, IP, D> Dekatron<OP1, OP2, IP, D>
where
    OP1: OutputPin,
    OP2: OutputPin,
    IP: InputPin,
    D: DelayNs,
{
    pub fn new(guide1: OP1, guide2: OP2, zero_sense: IP, delay: D) -> Result<Self, DekatronError> {
        let mut dekatron = Dekatron { guide1, guide2, zero_sense, delay };
        dekatron.idle()?;
        Ok(dekatron)
    }

    pub fn release(self) -> (OP1, OP2, IP, D) {
        (self.guide1, self.guide2, self.zero_sense, self.delay)
    }

    /// Moves the glow one cathode in `direction`.
    ///
    /// The glow follows the guide raised first and leaves via the guide lowered last, so
    /// reversing only swaps the roles of G1 and G2. A transfer that does not take is not
    /// visible here; it shows up later as [`DekatronError::HomingTimeout`].
    pub fn count(&mut self, direction: Direction) -> Result<(), DekatronError> {
        let result = match direction {
            Direction::Forward => pulse(&mut self.guide1, &mut self.guide2, &mut self.delay),
            Direction::Reverse => pulse(&mut self.guide2, &mut self.guide1, &mut self.delay),
        };
        if result.is_err() {
            // Leave the guides idle even when one of them refused a write.
            let _ = self.idle();
        }
        result
    }

    pub fn step(&mut self) -> Result<(), DekatronError> {
        self.count(Direction::Forward)
    }

    /// Counts forward until the glow lands on cathode 0.
    pub fn reset(&mut self) -> Result<(), DekatronError> {
        let steps = self.seek_zero()? + 1;
        debug!("dekatron: homed after {} steps", steps);
        Ok(())
    }

    /// Homes the tube, then counts forward `value` times.
    ///
    /// `value` is expected in `0..CATHODE_COUNT`; larger values wrap around the ring.
    pub fn set(&mut self, value: u8) -> Result<(), DekatronError> {
        self.reset()?;
        for _ in 0..value {
            self.step()?;
        }
        debug!("dekatron: set to {}", value);
        Ok(())
    }

    /// Returns the position at entry and leaves the glow on cathode 0.
    pub fn destructive_read(&mut self) -> Result<u8, DekatronError> {
        let attempt = self.seek_zero()?;
        // Zero was sensed on the (attempt + 1)-th count, so the glow started that many
        // cathodes short of a full revolution.
        let cathodes = i64::from(CATHODE_COUNT);
        let value = (cathodes - i64::from(attempt) - 1).rem_euclid(cathodes) as u8;
        debug!("dekatron: read {} after {} steps", value, attempt + 1);
        Ok(value)
    }

    /// Reads the position and writes it back, so the tube ends where it started.
    pub fn read(&mut self) -> Result<u8, DekatronError> {
        let value = self.destructive_read()?;
        self.set(value)?;
        Ok(value)
    }

    /// Counts forward until K0 asserts and returns the zero-based attempt that saw it.
    fn seek_zero(&mut self) -> Result<u32, DekatronError> {
        for attempt in 0..MAX_ATTEMPTS {
            self.step()?;
            if self.zero_sensed()? {
                return Ok(attempt);
            }
        }
        error!("dekatron: K0 did not assert within {} steps", MAX_ATTEMPTS);
        Err(DekatronError::HomingTimeout)
    }

    fn zero_sensed(&mut self) -> Result<bool, DekatronError> {
        self.delay.delay_us(SETTLING_TIME.to_micros());
        self.zero_sense.is_high().map_err(|_| DekatronError::GpioPinError)
    }

    fn idle(&mut self) -> Result<(), DekatronError> {
        let g1 = self.guide1.set_low().map_err(|_| DekatronError::GpioPinError);
        let g2 = self.guide2.set_low().map_err(|_| DekatronError::GpioPinError);
        g1.and(g2)
    }
}

/// One four-phase guide sequence: raise lead, raise trail, drop lead, drop trail.
fn pulse<L, T, D>(lead: &mut L, trail: &mut T, delay: &mut D) -> Result<(), DekatronError>
where
    L: OutputPin,
    T: OutputPin,
    D: DelayNs,
{
    let width = PULSE_WIDTH.to_micros();

    lead.set_high().map_err(|_| DekatronError::GpioPinError)?;
    delay.delay_us(width);
    trail.set_high().map_err(|_| DekatronError::GpioPinError)?;
    delay.delay_us(width);
    lead.set_low().map_err(|_| DekatronError::GpioPinError)?;
    delay.delay_us(width);
    trail.set_low().map_err(|_| DekatronError::GpioPinError)?;
    delay.delay_us(width);
    Ok(())
}
