// src/lib.rs
pub mod inspector {
    pub use crate::core::inspect;
    pub use crate::types::Options;

    /// Entry-point: inspect the file named in `opts` and print a JSON report
    pub fn run(opts: Options) -> anyhow::Result<()> {
        crate::core::run(opts)
    }
}

pub mod codec;
pub mod constants;
pub mod error;
pub mod es;
pub mod parsers;
pub mod processor;
pub mod report;
pub mod stats;
pub mod types;
mod core;

pub use error::{Error, HeaderError, Result};
pub use parsers::{ChannelMode, Emphasis, FrameHeader, Layer, Version};
