#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// The address is not one the sensor can be strapped to.
    UnsupportedAddress(u16),
    /// The underlying bus exchange failed.
    Bus(E),
    /// A capacitance read came back above the 12-bit ADC range.
    BadSample(u16),
}

impl<E: std::fmt::Debug> std::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnsupportedAddress(address) => {
                write!(f, "soil: given address not supported by device: {address:#x}")
            }
            Error::Bus(error) => write!(f, "soil: bus transaction failed: {error:?}"),
            Error::BadSample(value) => write!(f, "soil: bad sample: {value}"),
        }
    }
}

impl<E: std::fmt::Debug> std::error::Error for Error<E> {}
