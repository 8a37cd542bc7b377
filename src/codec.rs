//! Codec descriptors carried by fragmented-MP4 tracks

use serde::Serialize;

use crate::parsers::FrameHeader;

mod sealed {
    pub trait Sealed {}
}

/// Codec of a track. Implemented only by the descriptors in this module.
pub trait Codec: sealed::Sealed {
    fn is_video(&self) -> bool;
}

/// Already decoded MPEG-4 Audio configuration (AudioSpecificConfig)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mpeg4AudioConfig {
    pub object_type: u8,
    pub sample_rate: u32,
    pub channel_count: u8,
}

/// MPEG-4 Audio codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecMpeg4Audio {
    pub config: Mpeg4AudioConfig,
}

impl From<Mpeg4AudioConfig> for CodecMpeg4Audio {
    fn from(config: Mpeg4AudioConfig) -> Self {
        Self { config }
    }
}

impl sealed::Sealed for CodecMpeg4Audio {}

impl Codec for CodecMpeg4Audio {
    fn is_video(&self) -> bool {
        false
    }
}

/// MPEG-1/2 Audio codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecMpeg1Audio {
    pub sample_rate: u32,
    pub channel_count: u8,
}

impl From<&FrameHeader> for CodecMpeg1Audio {
    fn from(h: &FrameHeader) -> Self {
        Self {
            sample_rate: h.sample_rate(),
            channel_count: h.channel_count(),
        }
    }
}

impl sealed::Sealed for CodecMpeg1Audio {}

impl Codec for CodecMpeg1Audio {
    fn is_video(&self) -> bool {
        false
    }
}
