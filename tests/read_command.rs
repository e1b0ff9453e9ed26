use std::path::Path;

use clap::Parser;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use stemma_soil::cmd::{Cli, Command, ReadCommand};

fn read_command(args: &[&str]) -> ReadCommand {
    let cli = Cli::try_parse_from(["stemma-soil", "read"].iter().chain(args)).unwrap();
    let Command::Read(read) = cli.command;
    read
}

fn sensor_at(address: u8) -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write(address, vec![0x0F, 0x10]),
        I2cTransaction::read(address, vec![0x01, 0xF4]),
        I2cTransaction::write(address, vec![0x00, 0x04]),
        I2cTransaction::read(address, vec![0xC0, 0x16, 0x80, 0x00]),
    ]
}

#[test]
fn prints_two_lines() {
    let mut bus = I2cMock::new(&sensor_at(0x36));
    let mut out = Vec::new();

    let endpoint = &mut bus;
    read_command(&[])
        .run(
            move |path| {
                assert_eq!(path, Path::new("/dev/i2c-1"));
                Ok(endpoint)
            },
            NoopDelay::new(),
            &mut out,
        )
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Capacitance: 500\nTemperature: 22.50°C\n"
    );
    bus.done();
}

#[test]
fn address_override_and_bus_path() {
    let mut bus = I2cMock::new(&sensor_at(0x39));
    let mut out = Vec::new();

    let endpoint = &mut bus;
    read_command(&["--address", "0x39", "--bus", "/dev/i2c-7"])
        .run(
            move |path| {
                assert_eq!(path, Path::new("/dev/i2c-7"));
                Ok(endpoint)
            },
            NoopDelay::new(),
            &mut out,
        )
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Capacitance: 500\nTemperature: 22.50°C\n"
    );
    bus.done();
}

#[test]
fn unsupported_address_never_opens_the_bus() {
    let mut out = Vec::new();

    let err = read_command(&["--address", "0x3a"])
        .run(
            |_| -> anyhow::Result<I2cMock> { panic!("bus opened") },
            NoopDelay::new(),
            &mut out,
        )
        .unwrap_err();

    assert_eq!(err.to_string(), "given address not supported by device: 0x3a");
    assert!(out.is_empty());
}

#[test]
fn bus_open_failure_is_fatal() {
    let mut out = Vec::new();

    let err = read_command(&[])
        .run(
            |_| -> anyhow::Result<I2cMock> { anyhow::bail!("no such device") },
            NoopDelay::new(),
            &mut out,
        )
        .unwrap_err();

    assert_eq!(err.to_string(), "no such device");
    assert!(out.is_empty());
}

#[test]
fn bad_sample_prints_nothing() {
    let expectations = [
        I2cTransaction::write(0x36, vec![0x0F, 0x10]),
        I2cTransaction::read(0x36, vec![0x10, 0x00]),
    ];
    let mut bus = I2cMock::new(&expectations);
    let mut out = Vec::new();

    let endpoint = &mut bus;
    let err = read_command(&[])
        .run(move |_| Ok(endpoint), NoopDelay::new(), &mut out)
        .unwrap_err();

    assert_eq!(err.to_string(), "soil: bad sample: 4096");
    assert!(out.is_empty());
    bus.done();
}

#[test]
fn bus_failure_prints_nothing() {
    let expectations = [
        I2cTransaction::write(0x36, vec![0x0F, 0x10]),
        I2cTransaction::read(0x36, vec![0x01, 0xF4]),
        I2cTransaction::write(0x36, vec![0x00, 0x04]).with_error(ErrorKind::Other),
    ];
    let mut bus = I2cMock::new(&expectations);
    let mut out = Vec::new();

    let endpoint = &mut bus;
    let err = read_command(&[])
        .run(move |_| Ok(endpoint), NoopDelay::new(), &mut out)
        .unwrap_err();

    assert!(err.to_string().starts_with("soil: bus transaction failed"));
    assert!(out.is_empty());
    bus.done();
}
