use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::consts::{CATHODE_COUNT, PULSE_RATE, SPINNER_PRESET, STARTUP_DWELL};
use crate::dekatron_error::DekatronError;
use crate::driver::Dekatron;
use crate::status_led::StatusLed;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StartupReport {
    pub homed: bool,
    pub preset: bool,
    /// Value recovered by the read-back after the preset. No LED shows it.
    pub read_back: Result<u8, DekatronError>,
}

/// Power-on sequence and the endless 0..9 demo sweep.
///
/// Every sweep position is reached with a full [`Dekatron::set`], so the tube is homed
/// again before each digit and a missed transfer never outlives one position.
pub struct Spinner<OP1, OP2, IP, D, L1, L2, L3, SD>
where
    OP1: OutputPin,
    OP2: OutputPin,
    IP: InputPin,
    D: DelayNs,
    L1: OutputPin,
    L2: OutputPin,
    L3: OutputPin,
    SD: DelayNs,
{
    dekatron: Dekatron<OP1, OP2, IP, D>,
    pulse_led: StatusLed<L1>,
    homing_error_led: StatusLed<L2>,
    set_error_led: StatusLed<L3>,
    delay: SD,
}

impl<OP1, OP2, IP, D, L1, L2, L3, SD> Spinner<OP1, OP2, IP, D, L1, L2, L3, SD>
where
    OP1: OutputPin,
    OP2: OutputPin,
    IP: InputPin,
    D: DelayNs,
    L1: OutputPin,
    L2: OutputPin,
    L3: OutputPin,
    SD: DelayNs,
{
    pub fn new(
        dekatron: Dekatron<OP1, OP2, IP, D>,
        pulse_led: StatusLed<L1>,
        homing_error_led: StatusLed<L2>,
        set_error_led: StatusLed<L3>,
        delay: SD,
    ) -> Self {
        Spinner { dekatron, pulse_led, homing_error_led, set_error_led, delay }
    }

    /// Homes the tube, presets it, then reads it back once.
    ///
    /// The error LEDs latch the outcome of the homing and of the preset. An LED that
    /// cannot be driven is logged and the tube sequence carries on.
    pub fn startup(&mut self) -> StartupReport {
        let homed = self.dekatron.reset();
        if let Err(e) = self.homing_error_led.set(homed.is_err()) {
            warn!("spinner: homing error led: {}", e);
        }

        let preset = self.dekatron.set(SPINNER_PRESET);
        if let Err(e) = self.set_error_led.set(preset.is_err()) {
            warn!("spinner: set error led: {}", e);
        }

        self.delay.delay_ms(STARTUP_DWELL.to_millis());

        let read_back = self.dekatron.read();
        match read_back {
            Ok(value) => info!("spinner: read back {}", value),
            Err(e) => warn!("spinner: read back failed: {}", e),
        }

        let report = StartupReport { homed: homed.is_ok(), preset: preset.is_ok(), read_back };
        info!("spinner: startup done {}", report);
        report
    }

    /// One pass over every cathode. Positioning failures are skipped, the next `set`
    /// homes from scratch anyway. So is a pulse LED that cannot be driven.
    pub fn sweep(&mut self) {
        if let Err(e) = self.pulse_led.toggle() {
            warn!("spinner: pulse led: {}", e);
        }

        for value in 0..CATHODE_COUNT {
            if let Err(e) = self.dekatron.set(value) {
                warn!("spinner: set({}) failed: {}", value, e);
            }
            self.delay.delay_ms(PULSE_RATE.to_millis());
        }
    }

    pub fn run(mut self) -> ! {
        self.startup();
        loop {
            self.sweep();
        }
    }
}
