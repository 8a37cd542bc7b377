#![no_main]

//! Fuzz target for MPEG audio frame header decoding and frame walking.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mpeg_audio_inspector::FrameHeader;
use mpeg_audio_inspector::es::FrameReader;

#[derive(Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    mode: Mode,
}

#[derive(Arbitrary, Debug)]
enum Mode {
    /// Decode a single header
    Header,
    /// Walk the buffer frame by frame
    Walk,
}

fuzz_target!(|input: Input| {
    match input.mode {
        Mode::Header => {
            if let Ok(header) = FrameHeader::decode(&input.data) {
                let _ = header.frame_length();
                let _ = header.sample_count();
                let _ = header.duration();
                let _ = header.verify_crc(&input.data);
            }
        }
        Mode::Walk => {
            let mut reader = FrameReader::new(&input.data);
            for frame in reader.by_ref().take(10_000) {
                assert!(frame.offset + frame.data.len() <= input.data.len());
                let _ = frame.payload();
            }
            let _ = reader.skipped_bytes();
        }
    }
});
