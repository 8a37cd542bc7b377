use std::path::PathBuf;

use serde::Serialize;

use crate::parsers::{ChannelMode, FrameHeader, Layer, Version};

/// Audio codec information taken from a frame header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioInfo {
    pub codec: String,
    pub version: Version,
    pub sample_rate: u32,
    pub channels: u8,
    pub channel_mode: ChannelMode,
}

impl From<&FrameHeader> for AudioInfo {
    fn from(h: &FrameHeader) -> Self {
        let codec = match h.layer() {
            Layer::I => "MP1",
            Layer::II => "MP2",
            Layer::III => "MP3",
        };
        AudioInfo {
            codec: codec.to_string(),
            version: h.version(),
            sample_rate: h.sample_rate(),
            channels: h.channel_count(),
            channel_mode: h.channel_mode(),
        }
    }
}

/// One frame as listed in the report
#[derive(Debug, Clone, Serialize)]
pub struct FrameInfo {
    pub offset: usize,
    pub length: usize,
    pub bitrate_kbps: u32,
    pub samples: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crc_ok: Option<bool>,
}

/// Complete inspection report for one elementary stream
#[derive(Debug, Clone, Serialize)]
pub struct InspectorReport {
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioInfo>,
    pub frames: u64,
    pub samples: u64,
    pub duration_secs: f64,
    pub average_bitrate_kbps: f64,
    pub variable_bitrate: bool,
    pub audio_bytes: u64,
    pub skipped_bytes: u64,
    pub resyncs: u64,
    pub truncated_tail_bytes: usize,
    pub crc_errors: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frame_list: Vec<FrameInfo>,
}

/// Configuration options for the inspector
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub input: PathBuf,
    /// Include one entry per frame in the report
    pub list_frames: bool,
    /// Check CRC-16 on protected frames
    pub verify_crc: bool,
}
