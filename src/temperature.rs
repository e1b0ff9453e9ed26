use std::fmt;

const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// A temperature, stored in degrees Celsius.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    pub const fn from_celsius(celsius: f64) -> Self {
        Self(celsius)
    }

    pub fn celsius(&self) -> f64 {
        self.0
    }

    pub fn kelvin(&self) -> f64 {
        self.0 + ZERO_CELSIUS_IN_KELVIN
    }

    pub fn fahrenheit(&self) -> f64 {
        self.0 * 9.0 / 5.0 + 32.0
    }
}

/// Prints degrees Celsius to two decimal places unless a precision is given.
impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*}°C", precision, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let t = Temperature::from_celsius(22.499_986);
        assert_eq!(t.to_string(), "22.50°C");
        assert_eq!(format!("{t:.1}"), "22.5°C");
        assert_eq!(Temperature::from_celsius(-3.0).to_string(), "-3.00°C");
    }

    #[test]
    fn conversions() {
        assert_eq!(Temperature::from_celsius(0.0).kelvin(), 273.15);
        assert_eq!(Temperature::from_celsius(100.0).fahrenheit(), 212.0);
        assert_eq!(Temperature::from_celsius(-40.0).fahrenheit(), -40.0);
    }
}
