//! Main frame processing logic

use tracing::{debug, warn};

use crate::es::FrameReader;
use crate::stats::StreamStats;
use crate::types::Options;

pub struct FrameProcessor {
    pub stats: StreamStats,
    verify_crc: bool,
    list_frames: bool,
}

impl FrameProcessor {
    pub fn new(opts: &Options) -> Self {
        Self {
            stats: StreamStats::new(),
            verify_crc: opts.verify_crc,
            list_frames: opts.list_frames,
        }
    }

    /// Walk every frame of `data` and fold it into the statistics
    pub fn process(&mut self, data: &[u8]) {
        let mut reader = FrameReader::new(data);
        for frame in reader.by_ref() {
            let crc_ok = if self.verify_crc {
                frame.header.verify_crc(frame.data)
            } else {
                None
            };
            if crc_ok == Some(false) {
                warn!(offset = frame.offset, "CRC mismatch");
            }
            self.stats.add_frame(&frame, crc_ok, self.list_frames);
        }

        self.stats.skipped_bytes += reader.skipped_bytes() as u64;
        self.stats.resyncs += reader.resyncs() as u64;
        self.stats.truncated_tail_bytes = reader.truncated_tail();
        debug!(
            frames = self.stats.frames,
            skipped = reader.skipped_bytes(),
            resyncs = reader.resyncs(),
            "buffer processed"
        );
    }
}
