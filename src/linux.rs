//! Linux userspace adapters.
//!
//! The sensor side needs nothing beyond `linux_embedded_hal::I2cdev`, which
//! already implements `embedded_hal::i2c::I2c`. The motion side uses the
//! sysfs GPIO interface for edge-triggered waits.

use std::fmt;
use std::io::Write;

use log::debug;
use sysfs_gpio::{Direction, Edge, Pin, PinPoller};

use crate::motion::{EdgeInput, EdgeWait};

/// Path of the character device for I2C bus `bus`.
pub fn i2c_bus_path(bus: u8) -> String {
    format!("/dev/i2c-{}", bus)
}

/// `fmt::Write` sink that forwards reports to standard output as they are
/// produced.
pub struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut out = std::io::stdout().lock();
        out.write_all(s.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|_| fmt::Error)
    }
}

// poll(2) timeout for `timeout_ms`. Negative blocks indefinitely, so large
// values saturate instead of wrapping.
fn poll_timeout(timeout_ms: Option<u32>) -> isize {
    match timeout_ms {
        Some(ms) => isize::try_from(ms).unwrap_or(isize::MAX),
        None => -1,
    }
}

/// A sysfs GPIO line configured as a rising-edge interrupt input.
///
/// The line is requested in shared mode: an already exported line is reused,
/// and the line is left exported when this value is dropped.
pub struct SysfsEdgeInput {
    pin: Pin,
    poller: PinPoller,
}

impl SysfsEdgeInput {
    /// Exports `line` and configures it as a rising-edge input.
    ///
    /// `progress` is called with a short description before each setup step.
    pub fn request(line: u64, mut progress: impl FnMut(&str)) -> Result<Self, sysfs_gpio::Error> {
        let pin = Pin::new(line);

        progress("Requesting GPIO");
        pin.export()?;

        progress("Setting direction");
        pin.set_direction(Direction::In)?;

        progress("Setting edge");
        pin.set_edge(Edge::RisingEdge)?;

        let poller = pin.get_poller()?;
        debug!("GPIO {} ready for rising-edge waits", line);
        Ok(Self { pin, poller })
    }

    /// Linux GPIO number of the line.
    pub fn line(&self) -> u64 {
        self.pin.get_pin_num()
    }
}

impl EdgeInput for SysfsEdgeInput {
    type Error = sysfs_gpio::Error;

    fn wait_for_edge(&mut self, timeout_ms: Option<u32>) -> Result<EdgeWait, Self::Error> {
        match self.poller.poll(poll_timeout(timeout_ms))? {
            Some(value) => {
                debug!("GPIO {} edge, value {}", self.line(), value);
                Ok(EdgeWait::Triggered)
            }
            None => Ok(EdgeWait::TimedOut),
        }
    }
}
