//! Command line surface for the `stemma-soil` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::info;

use crate::{Opts, Soil};

#[derive(Debug, Parser)]
#[command(name = "stemma-soil", version, about = "Capacitive soil moisture sensor tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Take one capacitance and one temperature reading.
    Read(ReadCommand),
}

#[derive(Debug, Args)]
pub struct ReadCommand {
    /// Device address (0x36-0x39), 0 selects the default.
    #[arg(short, long, default_value = "0", value_parser = parse_address)]
    pub address: u16,

    /// I2C bus device.
    #[arg(short, long, default_value = "/dev/i2c-1")]
    pub bus: PathBuf,
}

fn parse_address(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address {s:?}: {e}"))
}

impl ReadCommand {
    /// Sensor options for the requested address.
    pub fn opts(&self) -> anyhow::Result<Opts> {
        match self.address {
            0 => Ok(Opts::default()),
            address @ 0x36..=0x39 => Ok(Opts::builder().address(address).build()),
            address => bail!("given address not supported by device: {address:#x}"),
        }
    }

    /// Open the bus, take a reading and print it to `out`.
    pub fn run<I2C, D, W>(
        &self,
        open_bus: impl FnOnce(&Path) -> anyhow::Result<I2C>,
        delay: D,
        out: &mut W,
    ) -> anyhow::Result<()>
    where
        I2C: I2c,
        I2C::Error: Send + Sync + 'static,
        D: DelayNs,
        W: Write,
    {
        let opts = self.opts()?;
        let bus = open_bus(&self.bus)?;
        info!(
            "Reading sensor at {:#x} on {}",
            opts.address(),
            self.bus.display()
        );

        let mut soil = Soil::open(bus, delay, &opts)?;
        let values = soil.sense();
        soil.halt()?;
        let values = values?;

        writeln!(out, "Capacitance: {}", values.capacitance)?;
        writeln!(out, "Temperature: {}", values.temperature)?;
        Ok(())
    }
}
