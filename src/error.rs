//! Error types for frame header decoding

use thiserror::Error;

/// Errors surfaced by the frame decoder
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The bytes do not form a valid MPEG audio frame header.
    #[error("invalid header: {0}")]
    InvalidHeader(#[from] HeaderError),
}

/// Why a header was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    #[error("need {needed} bytes, have {available}")]
    TooShort { needed: usize, available: usize },

    #[error("sync word not found")]
    NoSync,

    #[error("reserved MPEG version")]
    ReservedVersion,

    #[error("reserved layer")]
    ReservedLayer,

    /// Free-format streams carry an out-of-band bitrate and are not supported.
    #[error("free bitrate is not supported")]
    FreeBitrate,

    #[error("reserved bitrate index")]
    ReservedBitrate,

    #[error("reserved sample rate index")]
    ReservedSampleRate,

    #[error("reserved emphasis")]
    ReservedEmphasis,
}

pub type Result<T> = std::result::Result<T, Error>;

