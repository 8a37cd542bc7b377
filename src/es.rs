//! Frame-by-frame walk over an MPEG audio elementary stream

use tracing::{debug, trace};

use crate::constants::ID3V1_SIZE;
use crate::parsers::{FrameHeader, find_sync, id3v2_tag_size, is_id3v1};

/// One complete frame inside the walked buffer
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Byte offset of the header in the buffer
    pub offset: usize,
    pub header: FrameHeader,
    /// Whole frame, header included
    pub data: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Frame bytes after the header and CRC word
    pub fn payload(&self) -> &'a [u8] {
        self.data.get(self.header.header_length()..).unwrap_or_default()
    }
}

/// Iterates the frames of a buffer using only each header's frame length.
///
/// Bytes that do not decode are skipped up to the next sync candidate; after
/// a loss of sync a candidate must be followed by another header (or the end
/// of the buffer) before it is accepted. The walk ends at the first frame
/// reached by frame length that does not fit in the buffer, or at an ID3v1
/// trailer.
pub struct FrameReader<'a> {
    data: &'a [u8],
    pos: usize,
    lost_sync: bool,
    /// Current position was reached by a previous frame's length
    followed: bool,
    skipped: usize,
    resyncs: usize,
    truncated: usize,
    done: bool,
}

impl<'a> FrameReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let pos = match id3v2_tag_size(data) {
            Some(size) => {
                debug!(size, "skipping ID3v2 tag");
                size.min(data.len())
            }
            None => 0,
        };
        Self {
            data,
            pos,
            lost_sync: false,
            followed: false,
            skipped: 0,
            resyncs: 0,
            truncated: 0,
            done: false,
        }
    }

    /// Offset of the next header to decode
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes discarded while searching for a sync word
    pub fn skipped_bytes(&self) -> usize {
        self.skipped
    }

    /// Number of times sync was lost
    pub fn resyncs(&self) -> usize {
        self.resyncs
    }

    /// Bytes of a final frame that did not fit in the buffer
    pub fn truncated_tail(&self) -> usize {
        self.truncated
    }

    fn resync(&mut self) {
        self.followed = false;
        if !self.lost_sync {
            self.lost_sync = true;
            self.resyncs += 1;
            debug!(offset = self.pos, "lost sync");
        }
        match find_sync(self.data, self.pos + 1) {
            Some(next) => {
                self.skipped += next - self.pos;
                trace!(from = self.pos, to = next, "resync candidate");
                self.pos = next;
            }
            None => {
                self.skipped += self.data.len() - self.pos;
                self.pos = self.data.len();
                self.done = true;
            }
        }
    }
}

/// A candidate found by scanning is trusted only if its frame fits and is
/// followed by another header, an ID3v1 trailer or the end of the buffer.
fn confirms_frame(rest: &[u8], len: usize) -> bool {
    match rest.get(len..) {
        Some([]) => true,
        Some(next) => {
            FrameHeader::decode(next).is_ok() || (next.len() == ID3V1_SIZE && is_id3v1(next))
        }
        None => false,
    }
}

impl<'a> Iterator for FrameReader<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Frame<'a>> {
        let data = self.data;
        while !self.done {
            let rest = &data[self.pos..];
            if rest.is_empty() || (rest.len() == ID3V1_SIZE && is_id3v1(rest)) {
                self.done = true;
                break;
            }

            let header = match FrameHeader::decode(rest) {
                Ok(h) => h,
                Err(err) => {
                    trace!(offset = self.pos, %err, "no frame header");
                    self.resync();
                    continue;
                }
            };

            let len = header.frame_length();
            if self.lost_sync && !confirms_frame(rest, len) {
                trace!(offset = self.pos, len, "unconfirmed sync candidate");
                self.resync();
                continue;
            }
            if len > rest.len() {
                if !self.followed {
                    trace!(offset = self.pos, len, "sync candidate overruns buffer");
                    self.resync();
                    continue;
                }
                debug!(offset = self.pos, needed = len, available = rest.len(), "truncated frame");
                self.truncated = rest.len();
                self.done = true;
                break;
            }

            self.lost_sync = false;
            self.followed = true;
            let frame = Frame {
                offset: self.pos,
                header,
                data: &rest[..len],
            };
            self.pos += len;
            return Some(frame);
        }
        None
    }
}
