use fugit::{MicrosDurationU32, MillisDurationU32};

/// Spacing between consecutive guide edges of one count.
pub const PULSE_WIDTH: MicrosDurationU32 = MicrosDurationU32::from_ticks(250);
/// Time the glow needs on its new cathode before K0 is valid.
pub const SETTLING_TIME: MicrosDurationU32 = MicrosDurationU32::from_ticks(250);

pub const MAX_ATTEMPTS: u32 = 100;
pub const CATHODE_COUNT: u8 = 10;

/// Dwell between positions of the demo sweep.
pub const PULSE_RATE: MillisDurationU32 = MillisDurationU32::from_ticks(50);
pub const STARTUP_DWELL: MillisDurationU32 = MillisDurationU32::from_ticks(500);
/// Value written once at power-on, before the first read-back.
pub const SPINNER_PRESET: u8 = 9;
