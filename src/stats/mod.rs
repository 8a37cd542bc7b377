//! Statistics accumulated while walking an elementary stream

use std::collections::BTreeMap;

use crate::es::Frame;
use crate::types::{AudioInfo, FrameInfo};

/// Running totals for one stream
#[derive(Debug, Default)]
pub struct StreamStats {
    pub frames: u64,
    pub samples: u64,
    pub audio_bytes: u64,
    /// Playback time in seconds, summed per frame so sample-rate changes are honoured
    pub duration_secs: f64,
    /// Codec parameters of the first frame
    pub audio: Option<AudioInfo>,
    /// bitrate (bit/s) -> frame count
    pub bitrates: BTreeMap<u32, u64>,
    pub crc_errors: u64,
    pub skipped_bytes: u64,
    pub resyncs: u64,
    pub truncated_tail_bytes: usize,
    pub frame_list: Vec<FrameInfo>,
}

impl StreamStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one frame; `crc_ok` is the CRC outcome when it was checked
    pub fn add_frame(&mut self, frame: &Frame<'_>, crc_ok: Option<bool>, keep: bool) {
        let h = &frame.header;
        if self.audio.is_none() {
            self.audio = Some(AudioInfo::from(h));
        }
        self.frames += 1;
        self.samples += h.sample_count() as u64;
        self.audio_bytes += frame.data.len() as u64;
        self.duration_secs += h.sample_count() as f64 / h.sample_rate() as f64;
        *self.bitrates.entry(h.bitrate()).or_insert(0) += 1;
        if crc_ok == Some(false) {
            self.crc_errors += 1;
        }
        if keep {
            self.frame_list.push(FrameInfo {
                offset: frame.offset,
                length: frame.data.len(),
                bitrate_kbps: h.bitrate() / 1000,
                samples: h.sample_count(),
                crc_ok,
            });
        }
    }

    /// Average bitrate in kbit/s over the audio frames
    pub fn average_bitrate_kbps(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        (self.audio_bytes as f64 * 8.0 / 1000.0) / self.duration_secs
    }

    /// More than one bitrate seen
    pub fn is_variable_bitrate(&self) -> bool {
        self.bitrates.len() > 1
    }
}
