//! Driver for the capacitive soil moisture sensor with seesaw firmware.
//!
//! The sensor sits on I2C at one of four addresses and reports a raw
//! capacitance count and its die temperature. Reads are done as two separate
//! bus transactions with a settling pause between them.
//!
//! ```no_run
//! # fn demo<I2C: embedded_hal::i2c::I2c>(i2c: I2C, delay: impl embedded_hal::delay::DelayNs)
//! # -> Result<(), stemma_soil::Error<I2C::Error>> {
//! use stemma_soil::{Opts, Soil};
//!
//! let mut soil = Soil::open(i2c, delay, &Opts::default())?;
//! let values = soil.sense()?;
//! println!("{} {}", values.capacitance, values.temperature);
//! soil.halt()?;
//! # Ok(())
//! # }
//! ```

pub mod cmd;
mod eh_i2c;
mod error;
pub mod register;
mod soil;
mod temperature;
mod transact;

pub use eh_i2c::I2cDevice;
pub use error::Error;
pub use soil::{
    Opts, SensorValues, Soil, DEFAULT_ADDRESS, GUARD_TIME, SETTLE_TIME, SUPPORTED_ADDRESSES,
};
pub use temperature::Temperature;
pub use transact::Transact;
