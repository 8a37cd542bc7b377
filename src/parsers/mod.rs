//! Parsers for MPEG audio elementary streams
//!
//! The frame header decoder is the core; the utilities locate sync words and
//! skip the ID3 tags that commonly wrap `.mp3` files.

mod frame_header;
mod utils;

pub use frame_header::{ChannelMode, Emphasis, FrameHeader, Layer, Version};
pub use utils::{find_sync, id3v2_tag_size, is_id3v1, is_sync};

use crate::types::AudioInfo;

/// Parse the first valid MPEG audio header found in `data`
pub fn parse_audio_codec(data: &[u8]) -> Option<AudioInfo> {
    let mut pos = 0;
    while let Some(i) = find_sync(data, pos) {
        if let Ok(header) = FrameHeader::decode(&data[i..]) {
            return Some(AudioInfo::from(&header));
        }
        pos = i + 1;
    }
    None
}
