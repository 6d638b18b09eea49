//! Reads the Proximity click board once.
//!
//! Identifies the VCNL4000, dumps its registers, then triggers an ambient
//! light conversion followed by a proximity conversion.

use anyhow::Context;
use linux_embedded_hal::{Delay, I2cdev};
use vcnl4000_click_rs::linux::{i2c_bus_path, Stdout};
use vcnl4000_click_rs::{Config, Vcnl4000, DEFAULT_I2C_BUS};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = i2c_bus_path(DEFAULT_I2C_BUS);
    let i2c = I2cdev::new(&path).with_context(|| format!("failed to open {}", path))?;
    let mut sensor = Vcnl4000::new(i2c, Config::default());

    sensor.run_diagnostics(&mut Delay, &mut Stdout)?;
    Ok(())
}
