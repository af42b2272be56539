// src/error.rs
use thiserror::Error;

/// Errors raised by the byte-order operations.
///
/// Every variant is a caller contract violation; there are no recoverable
/// runtime failures anywhere in this crate. A call that returns an error
/// has not written to any output buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwabError {
    #[error("unsupported element width: {0} bytes (expected 2, 4, or 8)")]
    UnsupportedWidth(usize),

    #[error("buffer too small: need {needed} bytes, have {len}")]
    BufferTooSmall { needed: usize, len: usize },

    #[error("destination too small: need {needed} bytes, have {len}")]
    DestinationTooSmall { needed: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SwabError>;
