use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, warn};

use crate::register::{self, Register};
use crate::{Error, I2cDevice, Temperature, Transact};

/// Addresses the sensor can be strapped to with its AD0/AD1 pads.
pub const SUPPORTED_ADDRESSES: [u16; 4] = [0x36, 0x37, 0x38, 0x39];

pub const DEFAULT_ADDRESS: u16 = 0x36;

/// Time the sensor needs between a register select and the following read.
pub const SETTLE_TIME: Duration = Duration::from_millis(5);

/// Time to leave the bus idle after a read.
pub const GUARD_TIME: Duration = Duration::from_millis(1);

/// Largest value the 12-bit touch ADC can produce.
const MAX_CAPACITANCE: u16 = 4095;

/// Degrees Celsius per count of the temperature register.
const TEMPERATURE_SCALE: f64 = 0.00001525878;

/// Top two bits of the temperature register are status flags.
const TEMPERATURE_MSB_MASK: u8 = 0x3F;

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct Opts {
    #[builder(default = DEFAULT_ADDRESS)]
    address: u16,
    #[builder(default = SETTLE_TIME)]
    settle: Duration,
    #[builder(default = GUARD_TIME)]
    guard: Duration,
}

impl Opts {
    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn settle(&self) -> Duration {
        self.settle
    }

    pub fn guard(&self) -> Duration {
        self.guard
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// One capacitance and one temperature reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorValues {
    pub capacitance: u16,
    pub temperature: Temperature,
}

/// Capacitive soil moisture sensor.
#[derive(Debug)]
pub struct Soil<T, D> {
    conn: T,
    delay: D,
    opts: Opts,
}

impl<I2C: I2c, D: DelayNs> Soil<I2cDevice<I2C>, D> {
    /// Bind the sensor at `opts.address` on an I2C bus.
    ///
    /// Nothing is sent to the device until the first sense call.
    pub fn open(bus: I2C, delay: D, opts: &Opts) -> Result<Self, Error<I2C::Error>> {
        let address = match u8::try_from(opts.address) {
            Ok(address) if SUPPORTED_ADDRESSES.contains(&opts.address) => address,
            _ => return Err(Error::UnsupportedAddress(opts.address)),
        };
        Self::with_transport(I2cDevice::new(bus, address), delay, opts)
    }
}

impl<T: Transact, D: DelayNs> Soil<T, D> {
    /// Bind the sensor to an endpoint that is already addressed.
    pub fn with_transport(conn: T, delay: D, opts: &Opts) -> Result<Self, Error<T::Error>> {
        if !SUPPORTED_ADDRESSES.contains(&opts.address) {
            return Err(Error::UnsupportedAddress(opts.address));
        }
        Ok(Self {
            conn,
            delay,
            opts: opts.clone(),
        })
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Read capacitance, then temperature.
    ///
    /// Stops at the first failure; the temperature is not read if the
    /// capacitance read fails.
    pub fn sense(&mut self) -> Result<SensorValues, Error<T::Error>> {
        let capacitance = self.sense_capacitance()?;
        let temperature = self.sense_temperature()?;
        Ok(SensorValues {
            capacitance,
            temperature,
        })
    }

    /// Raw moisture count from touch channel 0, in `0..=4095`.
    pub fn sense_capacitance(&mut self) -> Result<u16, Error<T::Error>> {
        let buf: [u8; 2] = self.read_register(register::TOUCH_CHANNEL)?;
        let capacitance = u16::from_be_bytes(buf);
        if capacitance > MAX_CAPACITANCE {
            warn!("Bad capacitance sample {capacitance} ({buf:02x?})");
            return Err(Error::BadSample(capacitance));
        }
        debug!("Capacitance {capacitance}");
        Ok(capacitance)
    }

    pub fn sense_temperature(&mut self) -> Result<Temperature, Error<T::Error>> {
        let mut buf: [u8; 4] = self.read_register(register::TEMPERATURE)?;
        buf[0] &= TEMPERATURE_MSB_MASK;
        let raw = u32::from_be_bytes(buf);
        let temperature = Temperature::from_celsius(f64::from(raw) * TEMPERATURE_SCALE);
        debug!("Temperature raw {raw:#010x} -> {temperature}");
        Ok(temperature)
    }

    /// Release anything held by the sensor. Currently there is nothing to do.
    pub fn halt(&mut self) -> Result<(), Error<T::Error>> {
        Ok(())
    }

    /// Give back the endpoint and delay.
    pub fn release(self) -> (T, D) {
        (self.conn, self.delay)
    }

    fn read_register<const N: usize>(
        &mut self,
        register: Register,
    ) -> Result<[u8; N], Error<T::Error>> {
        debug_assert_eq!(N, register.len);

        // The select and the read must be separate transactions with a pause
        // in between, a combined write-read returns stale data.
        self.conn
            .transact(&register.command(), &mut [])
            .map_err(Error::Bus)?;
        self.delay.delay_us(micros(self.opts.settle));

        let mut buf = [0u8; N];
        self.conn.transact(&[], &mut buf).map_err(Error::Bus)?;
        self.delay.delay_us(micros(self.opts.guard));

        Ok(buf)
    }
}

fn micros(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}
