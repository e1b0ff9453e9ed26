use anyhow::Context;
use clap::Parser;
use linux_embedded_hal::{Delay, I2cdev};

use stemma_soil::cmd::{Cli, Command};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Read(read) => {
            let mut stdout = std::io::stdout().lock();
            read.run(
                |path| {
                    I2cdev::new(path)
                        .with_context(|| format!("opening I2C bus {}", path.display()))
                },
                Delay,
                &mut stdout,
            )
        }
    }
}
