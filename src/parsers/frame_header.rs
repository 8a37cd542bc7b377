//! MPEG-1/2/2.5 Audio frame header (Layers I, II, III)
//!
//! A header is 32 bits, MSB first:
//!
//! ```text
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//! A sync (11)      B version        C layer        D protection_absent
//! E bitrate index  F sample rate    G padding      H private
//! I channel mode   J mode extension K copyright    L original   M emphasis
//! ```

use std::time::Duration;

use bitstream_io::{BigEndian, BitRead, BitReader};
use crc::{CRC_16_CMS, Crc};
use serde::Serialize;

use super::utils::is_sync;
use crate::constants::*;
use crate::error::{HeaderError, Result};

/// CRC-16 with polynomial 0x8005 and all-ones seed, no reflection
const CRC_MPA: Crc<u16> = Crc::<u16>::new(&CRC_16_CMS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Version {
    #[serde(rename = "MPEG-1")]
    Mpeg1,
    #[serde(rename = "MPEG-2")]
    Mpeg2,
    #[serde(rename = "MPEG-2.5")]
    Mpeg25,
}

impl Version {
    fn from_bits(bits: u8) -> std::result::Result<Self, HeaderError> {
        match bits {
            0b11 => Ok(Version::Mpeg1),
            0b10 => Ok(Version::Mpeg2),
            0b00 => Ok(Version::Mpeg25),
            _ => Err(HeaderError::ReservedVersion),
        }
    }

    /// Right shift applied to the MPEG-1 sample rate table
    fn sample_rate_shift(self) -> u32 {
        match self {
            Version::Mpeg1 => 0,
            Version::Mpeg2 => 1,
            Version::Mpeg25 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Layer {
    I,
    II,
    III,
}

impl Layer {
    fn from_bits(bits: u8) -> std::result::Result<Self, HeaderError> {
        match bits {
            0b11 => Ok(Layer::I),
            0b10 => Ok(Layer::II),
            0b01 => Ok(Layer::III),
            _ => Err(HeaderError::ReservedLayer),
        }
    }

    /// Layer as the integer 1, 2 or 3
    pub fn number(self) -> u8 {
        match self {
            Layer::I => 1,
            Layer::II => 2,
            Layer::III => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

impl ChannelMode {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b00 => ChannelMode::Stereo,
            0b01 => ChannelMode::JointStereo,
            0b10 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    None,
    /// 50/15 microseconds
    Ms50_15,
    /// CCITT J.17
    CcittJ17,
}

impl Emphasis {
    fn from_bits(bits: u8) -> std::result::Result<Self, HeaderError> {
        match bits {
            0b00 => Ok(Emphasis::None),
            0b01 => Ok(Emphasis::Ms50_15),
            0b11 => Ok(Emphasis::CcittJ17),
            _ => Err(HeaderError::ReservedEmphasis),
        }
    }
}

/// Decoded frame header.
///
/// Fields are read through accessors; the only constructor is
/// [`FrameHeader::decode`], so every value holds a valid table combination
/// and the geometry methods never divide by zero.
///
/// ```compile_fail
/// use mpeg_audio_inspector::FrameHeader;
///
/// let mut h = FrameHeader::decode(&[0xFF, 0xFB, 0x90, 0x00]).unwrap();
/// h.sample_rate = 0;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameHeader {
    version: Version,
    layer: Layer,
    bitrate: u32,
    sample_rate: u32,
    channel_mode: ChannelMode,
    padding: bool,
    protected: bool,
    mode_extension: u8,
    copyright: bool,
    original: bool,
    emphasis: Emphasis,
}

/// Raw bit fields, before any table lookup
struct RawFields {
    version: u8,
    layer: u8,
    protection_absent: bool,
    bitrate_index: u8,
    sample_rate_index: u8,
    padding: bool,
    channel_mode: u8,
    mode_extension: u8,
    copyright: bool,
    original: bool,
    emphasis: u8,
}

fn read_fields(header: &[u8]) -> std::io::Result<RawFields> {
    let mut br = BitReader::endian(header, BigEndian);
    br.skip(11)?; // sync
    let version = br.read::<2, u8>()?;
    let layer = br.read::<2, u8>()?;
    let protection_absent = br.read_bit()?;
    let bitrate_index = br.read::<4, u8>()?;
    let sample_rate_index = br.read::<2, u8>()?;
    let padding = br.read_bit()?;
    br.skip(1)?; // private
    let channel_mode = br.read::<2, u8>()?;
    let mode_extension = br.read::<2, u8>()?;
    let copyright = br.read_bit()?;
    let original = br.read_bit()?;
    let emphasis = br.read::<2, u8>()?;

    Ok(RawFields {
        version,
        layer,
        protection_absent,
        bitrate_index,
        sample_rate_index,
        padding,
        channel_mode,
        mode_extension,
        copyright,
        original,
        emphasis,
    })
}

fn bitrate_table(version: Version, layer: Layer) -> &'static [u32; 16] {
    match (version, layer) {
        (Version::Mpeg1, Layer::I) => &BITRATES_V1_L1,
        (Version::Mpeg1, Layer::II) => &BITRATES_V1_L2,
        (Version::Mpeg1, Layer::III) => &BITRATES_V1_L3,
        (_, Layer::I) => &BITRATES_V2_L1,
        (_, _) => &BITRATES_V2_L23,
    }
}

impl FrameHeader {
    /// Decodes the header at the start of `data`. Only the first four bytes
    /// are read; anything after them is left to the caller.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let header = data.get(..HEADER_SIZE).ok_or(HeaderError::TooShort {
            needed: HEADER_SIZE,
            available: data.len(),
        })?;
        if !is_sync(header[0], header[1]) {
            return Err(HeaderError::NoSync.into());
        }

        let raw = read_fields(header).map_err(|_| HeaderError::TooShort {
            needed: HEADER_SIZE,
            available: header.len(),
        })?;

        let version = Version::from_bits(raw.version)?;
        let layer = Layer::from_bits(raw.layer)?;

        match raw.bitrate_index {
            FREE_BITRATE_INDEX => return Err(HeaderError::FreeBitrate.into()),
            RESERVED_BITRATE_INDEX => return Err(HeaderError::ReservedBitrate.into()),
            _ => {}
        }
        let bitrate = bitrate_table(version, layer)[raw.bitrate_index as usize] * 1000;

        if raw.sample_rate_index == RESERVED_SAMPLE_RATE_INDEX {
            return Err(HeaderError::ReservedSampleRate.into());
        }
        let sample_rate =
            SAMPLE_RATES_V1[raw.sample_rate_index as usize] >> version.sample_rate_shift();

        Ok(FrameHeader {
            version,
            layer,
            bitrate,
            sample_rate,
            channel_mode: ChannelMode::from_bits(raw.channel_mode),
            padding: raw.padding,
            protected: !raw.protection_absent,
            mode_extension: raw.mode_extension,
            copyright: raw.copyright,
            original: raw.original,
            emphasis: Emphasis::from_bits(raw.emphasis)?,
        })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Bits per second
    pub fn bitrate(&self) -> u32 {
        self.bitrate
    }

    /// Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_mode(&self) -> ChannelMode {
        self.channel_mode
    }

    pub fn padding(&self) -> bool {
        self.padding
    }

    /// A 16-bit CRC follows the header
    pub fn protected(&self) -> bool {
        self.protected
    }

    /// Joint stereo coding bits; meaningful only in joint stereo mode
    pub fn mode_extension(&self) -> u8 {
        self.mode_extension
    }

    pub fn copyright(&self) -> bool {
        self.copyright
    }

    pub fn original(&self) -> bool {
        self.original
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    /// Total frame size in bytes, header included.
    pub fn frame_length(&self) -> usize {
        let padding = self.padding as u32;
        let len = match self.layer {
            Layer::I => {
                (COEFF_LAYER1 * self.bitrate / self.sample_rate + padding) * SLOT_SIZE_LAYER1
            }
            Layer::II => COEFF_LAYER23 * self.bitrate / self.sample_rate + padding,
            Layer::III => {
                let coeff = match self.version {
                    Version::Mpeg1 => COEFF_LAYER23,
                    Version::Mpeg2 | Version::Mpeg25 => COEFF_LAYER3_V2,
                };
                coeff * self.bitrate / self.sample_rate + padding
            }
        };
        len as usize
    }

    /// PCM samples per channel carried by the frame.
    pub fn sample_count(&self) -> u32 {
        match (self.layer, self.version) {
            (Layer::I, _) => SAMPLES_LAYER1,
            (Layer::II, _) => SAMPLES_LAYER2,
            (Layer::III, Version::Mpeg1) => SAMPLES_LAYER3_V1,
            (Layer::III, _) => SAMPLES_LAYER3_V2,
        }
    }

    /// Header plus CRC word when present
    pub fn header_length(&self) -> usize {
        if self.protected {
            HEADER_SIZE + CRC_SIZE
        } else {
            HEADER_SIZE
        }
    }

    pub fn channel_count(&self) -> u8 {
        match self.channel_mode {
            ChannelMode::Mono => 1,
            _ => 2,
        }
    }

    /// Playback time of one frame
    pub fn duration(&self) -> Duration {
        Duration::from_nanos(self.sample_count() as u64 * 1_000_000_000 / self.sample_rate as u64)
    }

    /// Number of bytes after the CRC word covered by the checksum, when the
    /// region has a fixed size for this layer.
    fn crc_region_len(&self) -> Option<usize> {
        let mono = self.channel_mode == ChannelMode::Mono;
        match self.layer {
            Layer::I => {
                let subband_channels = match self.channel_mode {
                    ChannelMode::Mono => LAYER1_SUBBANDS,
                    ChannelMode::Stereo | ChannelMode::DualChannel => 2 * LAYER1_SUBBANDS,
                    ChannelMode::JointStereo => {
                        let bound = 4 * (self.mode_extension as usize + 1);
                        2 * bound + (LAYER1_SUBBANDS - bound)
                    }
                };
                Some(subband_channels * LAYER1_ALLOC_BITS / 8)
            }
            // Layer II allocation width depends on the sub-band table in use
            Layer::II => None,
            Layer::III => Some(match (self.version, mono) {
                (Version::Mpeg1, true) => SIDE_INFO_V1_MONO,
                (Version::Mpeg1, false) => SIDE_INFO_V1_STEREO,
                (_, true) => SIDE_INFO_V2_MONO,
                (_, false) => SIDE_INFO_V2_STEREO,
            }),
        }
    }

    /// Checks the frame CRC. `frame` starts at the header.
    ///
    /// Returns `None` when the frame is unprotected, the layer's protected
    /// region cannot be sized (Layer II) or `frame` is too short to hold it.
    pub fn verify_crc(&self, frame: &[u8]) -> Option<bool> {
        if !self.protected {
            return None;
        }
        let region = self.crc_region_len()?;
        let start = HEADER_SIZE + CRC_SIZE;
        let covered = frame.get(start..start + region)?;
        let stored = frame.get(HEADER_SIZE..start)?;
        let stored = u16::from_be_bytes([stored[0], stored[1]]);

        let mut digest = CRC_MPA.digest();
        digest.update(frame.get(2..HEADER_SIZE)?);
        digest.update(covered);
        Some(digest.finalize() == stored)
    }
}
