use crate::{DEFAULT_ADDRESS, DEFAULT_POLL_INTERVAL_US, DEFAULT_REARM_TIMEOUT_MS};

/// Configuration settings for the VCNL4000 sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// The 7-bit I2C address of the device.
    pub address: u8,
    /// Sleep between two ready-bit polls, in microseconds.
    pub poll_interval_us: u32,
    /// Upper bound on ready-bit polls per conversion. `None` polls until the
    /// bit is set, however long that takes.
    pub max_polls: Option<u32>,
}

impl Config {
    /// Creates a new `Config` instance.
    ///
    /// # Arguments
    ///
    /// * `address` - The I2C address of the sensor.
    /// * `poll_interval_us` - The ready-bit poll interval in microseconds.
    ///
    /// # Returns
    ///
    /// A new unbounded `Config` instance.
    pub fn new(address: u8, poll_interval_us: u32) -> Config {
        Config {
            address,
            poll_interval_us,
            max_polls: None,
        }
    }

    /// Sets the I2C address for the configuration.
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Sets the ready-bit poll interval.
    pub fn poll_interval_us(mut self, poll_interval_us: u32) -> Self {
        self.poll_interval_us = poll_interval_us;
        self
    }

    /// Caps the number of ready-bit polls per conversion.
    ///
    /// Once the cap is hit the measurement fails with
    /// [`Error::ConversionTimeout`](crate::Error::ConversionTimeout) instead of
    /// polling forever.
    pub fn max_polls(mut self, max_polls: Option<u32>) -> Self {
        self.max_polls = max_polls;
        self
    }
}

/// Provides default configuration values for the VCNL4000 sensor.
impl Default for Config {
    /// Returns the default configuration.
    ///
    /// The default configuration uses address `0x13`, a 20 µs poll interval
    /// and no poll cap.
    fn default() -> Config {
        Config::new(DEFAULT_ADDRESS, DEFAULT_POLL_INTERVAL_US)
    }
}

/// What the motion monitor does when an interrupt wait fails outright
/// (as opposed to timing out).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum WaitErrorPolicy {
    /// Log the failure and treat it like a timeout.
    Rearm,
    /// Return the failure to the caller.
    Abort,
}

/// Configuration settings for the motion monitor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MotionConfig {
    /// Timeout of each re-arm wait, in milliseconds.
    pub rearm_timeout_ms: u32,
    /// Handling of failed interrupt waits.
    pub on_wait_error: WaitErrorPolicy,
}

impl MotionConfig {
    /// Sets the re-arm wait timeout.
    pub fn rearm_timeout_ms(mut self, rearm_timeout_ms: u32) -> Self {
        self.rearm_timeout_ms = rearm_timeout_ms;
        self
    }

    /// Sets the handling of failed interrupt waits.
    pub fn on_wait_error(mut self, policy: WaitErrorPolicy) -> Self {
        self.on_wait_error = policy;
        self
    }
}

impl Default for MotionConfig {
    /// Returns a 1000 ms re-arm timeout with wait errors treated as timeouts.
    fn default() -> MotionConfig {
        MotionConfig {
            rearm_timeout_ms: DEFAULT_REARM_TIMEOUT_MS,
            on_wait_error: WaitErrorPolicy::Rearm,
        }
    }
}
