use core::fmt;

use crate::Channel;

/// Errors returned by the sensor driver and the motion monitor.
///
/// `E` is the error type of the underlying bus or GPIO collaborator.
#[derive(Debug)]
pub enum Error<E> {
    /// A bus or GPIO transaction failed.
    Transport(E),
    /// The ready bit stayed clear for the configured number of polls.
    ConversionTimeout { channel: Channel, polls: u32 },
    /// A setting was outside the range accepted by the device.
    InvalidArg,
    /// The report sink rejected a write.
    Output,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport error: {:?}", e),
            Error::ConversionTimeout { channel, polls } => write!(
                f,
                "{:?} conversion not ready after {} polls",
                channel, polls
            ),
            Error::InvalidArg => f.write_str("invalid argument"),
            Error::Output => f.write_str("failed to write report"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
