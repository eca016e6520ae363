#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DekatronError {
    GpioPinError,

    // K0 never asserted within MAX_ATTEMPTS forward counts
    HomingTimeout,
}
