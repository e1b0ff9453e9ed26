//! Seesaw register commands used by the soil sensor.

/// A seesaw register: a module page (`base`) and a sub-register (`function`),
/// plus how many bytes the register returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    pub base: u8,
    pub function: u8,
    pub len: usize,
}

impl Register {
    const fn new(base: u8, function: u8, len: usize) -> Self {
        Self {
            base,
            function,
            len,
        }
    }

    /// The select command written before reading the register.
    pub const fn command(&self) -> [u8; 2] {
        [self.base, self.function]
    }
}

const TOUCH_BASE: u8 = 0x0F;
const TOUCH_CHANNEL_OFFSET: u8 = 0x10;
const STATUS_BASE: u8 = 0x00;
const STATUS_TEMP: u8 = 0x04;

/// Capacitive touch channel 0, a big-endian 16-bit count.
pub const TOUCH_CHANNEL: Register = Register::new(TOUCH_BASE, TOUCH_CHANNEL_OFFSET, 2);

/// Die temperature, a big-endian 32-bit fixed-point value.
pub const TEMPERATURE: Register = Register::new(STATUS_BASE, STATUS_TEMP, 4);
