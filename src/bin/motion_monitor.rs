//! Reports motion seen by the MOTION click board.
//!
//! Runs until killed.

use anyhow::Context;
use vcnl4000_click_rs::linux::SysfsEdgeInput;
use vcnl4000_click_rs::{MotionConfig, MotionMonitor, DEFAULT_MOTION_GPIO};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input = SysfsEdgeInput::request(DEFAULT_MOTION_GPIO, |step| println!("{}", step))
        .with_context(|| format!("failed to set up GPIO {}", DEFAULT_MOTION_GPIO))?;

    println!("Waiting for interrupt");
    let mut monitor = MotionMonitor::new(input, MotionConfig::default());
    let never = monitor.run(|_| println!("Motion detected!"))?;
    match never {}
}
