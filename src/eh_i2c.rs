use embedded_hal::i2c::{I2c, SevenBitAddress};
use log::debug;

use crate::Transact;

/// An embedded-hal I2C bus bound to a single target address.
#[derive(Debug)]
pub struct I2cDevice<I2C> {
    bus: I2C,
    address: SevenBitAddress,
}

impl<I2C: I2c> I2cDevice<I2C> {
    pub fn new(bus: I2C, address: SevenBitAddress) -> Self {
        Self { bus, address }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I2C {
        self.bus
    }
}

impl<I2C: I2c> Transact for I2cDevice<I2C> {
    type Error = I2C::Error;

    fn transact(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), Self::Error> {
        debug!(
            "I2C {:#04x} w:{} r:{}",
            self.address,
            write.len(),
            read.len()
        );

        match (write.is_empty(), read.is_empty()) {
            // Nothing to do, don't put an empty frame on the bus.
            (true, true) => Ok(()),
            (false, true) => self.bus.write(self.address, write),
            (true, false) => self.bus.read(self.address, read),
            (false, false) => self.bus.write_read(self.address, write, read),
        }
    }
}
