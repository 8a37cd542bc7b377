//! Common scanning utilities

use crate::constants::{
    ID3V1_MAGIC, ID3V2_FOOTER_FLAG, ID3V2_HEADER_SIZE, ID3V2_MAGIC, SYNC_MASK, SYNC_WORD,
};

/// True when the two bytes start with the 11-bit frame sync
pub fn is_sync(b0: u8, b1: u8) -> bool {
    u16::from_be_bytes([b0, b1]) & SYNC_MASK == SYNC_WORD
}

/// Offset of the first sync candidate at or after `from`
pub fn find_sync(data: &[u8], from: usize) -> Option<usize> {
    let tail = data.get(from..)?;
    tail.windows(2)
        .position(|w| is_sync(w[0], w[1]))
        .map(|pos| from + pos)
}

/// Total size of an ID3v2 tag at the start of `data`, if any
pub fn id3v2_tag_size(data: &[u8]) -> Option<usize> {
    let hdr = data.get(..ID3V2_HEADER_SIZE)?;
    if &hdr[..3] != ID3V2_MAGIC {
        return None;
    }
    // syncsafe integer: 7 bits per byte
    let size = hdr[6..10]
        .iter()
        .fold(0usize, |acc, b| (acc << 7) | (b & 0x7F) as usize);
    let footer = if hdr[5] & ID3V2_FOOTER_FLAG != 0 {
        ID3V2_HEADER_SIZE
    } else {
        0
    };
    Some(ID3V2_HEADER_SIZE + size + footer)
}

/// True when `data` starts with an ID3v1 trailer
pub fn is_id3v1(data: &[u8]) -> bool {
    data.starts_with(ID3V1_MAGIC)
}
