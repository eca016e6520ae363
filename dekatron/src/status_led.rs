use embedded_hal::digital::OutputPin;

use crate::dekatron_error::DekatronError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum LedState {
    On,
    Off,
}

/// Indicator LED on a plain GPIO, remembering its logical state so it can toggle.
pub struct StatusLed<P: OutputPin> {
    pin: P,
    active_low: bool,
    state: LedState,
}

impl<P: OutputPin> StatusLed<P> {
    /// Wraps `pin` and drives it off.
    pub fn new(pin: P, active_low: bool) -> Result<Self, DekatronError> {
        let mut led = Self { pin, active_low, state: LedState::Off };
        led.flush()?;
        Ok(led)
    }

    pub fn ledon(&mut self) -> Result<(), DekatronError> {
        self.state = LedState::On;
        self.flush()
    }

    pub fn ledoff(&mut self) -> Result<(), DekatronError> {
        self.state = LedState::Off;
        self.flush()
    }

    pub fn set(&mut self, on: bool) -> Result<(), DekatronError> {
        if on {
            self.ledon()
        } else {
            self.ledoff()
        }
    }

    pub fn toggle(&mut self) -> Result<(), DekatronError> {
        self.state = match self.state {
            LedState::Off => LedState::On,
            LedState::On => LedState::Off,
        };
        self.flush()
    }

    pub fn is_on(&self) -> bool {
        self.state == LedState::On
    }

    fn flush(&mut self) -> Result<(), DekatronError> {
        let high = (self.state == LedState::On) ^ self.active_low;
        if high {
            self.pin.set_high().map_err(|_| DekatronError::GpioPinError)
        } else {
            self.pin.set_low().map_err(|_| DekatronError::GpioPinError)
        }
    }
}
