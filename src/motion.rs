//! Motion detection on an edge-triggered interrupt line.
//!
//! The MOTION click drives its output high when the PIR sensor sees movement.
//! [`MotionMonitor`] blocks on the rising edge, reports it, then keeps
//! re-arming with a bounded wait until the line triggers again, after which
//! it goes back to waiting indefinitely.

use core::convert::Infallible;
use core::fmt::Debug;

use log::{debug, warn};

use crate::{Error, MotionConfig, WaitErrorPolicy};

/// Outcome of a successful interrupt wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeWait {
    /// The configured edge occurred.
    Triggered,
    /// The timeout elapsed first.
    TimedOut,
}

/// An input line configured for edge-triggered interrupts.
///
/// Implementations own the line for their whole lifetime; direction and edge
/// are configured when the line is acquired.
pub trait EdgeInput {
    /// Error type for interrupt waits
    type Error: Debug;

    /// Blocks until the configured edge occurs.
    ///
    /// # Arguments
    /// * `timeout_ms` - Upper bound of the wait, `None` to wait indefinitely
    fn wait_for_edge(&mut self, timeout_ms: Option<u32>) -> Result<EdgeWait, Self::Error>;
}

/// Reports motion seen on an [`EdgeInput`].
pub struct MotionMonitor<P> {
    input: P,
    config: MotionConfig,
    detections: u64,
}

impl<P> MotionMonitor<P>
where
    P: EdgeInput,
{
    pub fn new(input: P, config: MotionConfig) -> Self {
        Self {
            input,
            config,
            detections: 0,
        }
    }

    /// Returns the underlying input, consuming the monitor.
    pub fn release(self) -> P {
        self.input
    }

    /// Number of detections reported so far.
    pub fn detections(&self) -> u64 {
        self.detections
    }

    /// Runs one detection cycle.
    ///
    /// Waits indefinitely for an edge, calls `report` with the running
    /// detection count, then re-arms. Returns once the re-arm loop has seen
    /// the line trigger again.
    pub fn next_detection(&mut self, report: &mut impl FnMut(u64)) -> Result<(), Error<P::Error>> {
        self.wait_for_motion()?;
        self.detections += 1;
        report(self.detections);
        let waits = self.rearm()?;
        debug!("Re-armed after {} bounded waits", waits);
        Ok(())
    }

    /// Loops over [`next_detection`](Self::next_detection) forever.
    ///
    /// Only returns when a wait fails under [`WaitErrorPolicy::Abort`].
    pub fn run(&mut self, mut report: impl FnMut(u64)) -> Result<Infallible, Error<P::Error>> {
        loop {
            self.next_detection(&mut report)?;
        }
    }

    /// Blocks until the line triggers.
    ///
    /// Under [`WaitErrorPolicy::Rearm`] a failed wait counts as a trigger, so
    /// a broken line still goes through the report and the bounded re-arm
    /// waits instead of retrying the indefinite wait back to back.
    pub fn wait_for_motion(&mut self) -> Result<(), Error<P::Error>> {
        loop {
            match self.input.wait_for_edge(None) {
                Ok(EdgeWait::Triggered) => return Ok(()),
                Ok(EdgeWait::TimedOut) => debug!("Indefinite wait returned without an edge"),
                Err(e) => return self.wait_failed(e),
            }
        }
    }

    /// Repeats bounded waits until one of them sees the edge.
    ///
    /// Returns the number of waits performed.
    pub fn rearm(&mut self) -> Result<u32, Error<P::Error>> {
        let timeout = Some(self.config.rearm_timeout_ms);
        let mut waits: u32 = 0;
        loop {
            waits = waits.saturating_add(1);
            match self.input.wait_for_edge(timeout) {
                Ok(EdgeWait::Triggered) => return Ok(waits),
                Ok(EdgeWait::TimedOut) => {}
                Err(e) => self.wait_failed(e)?,
            }
        }
    }

    fn wait_failed(&self, e: P::Error) -> Result<(), Error<P::Error>> {
        match self.config.on_wait_error {
            WaitErrorPolicy::Rearm => {
                warn!("Interrupt wait failed, ignoring: {:?}", e);
                Ok(())
            }
            WaitErrorPolicy::Abort => {
                log::error!("Interrupt wait failed: {:?}", e);
                Err(Error::Transport(e))
            }
        }
    }
}
