//! Constants and lookup tables for MPEG-1/2/2.5 Audio frame headers
//! (ISO/IEC 11172-3 and 13818-3)

/// Fixed size of a frame header
pub const HEADER_SIZE: usize = 4;
/// Size of the optional CRC word following the header
pub const CRC_SIZE: usize = 2;

/// 11-bit sync word, as it appears in the first two header bytes
pub const SYNC_WORD: u16 = 0xFFE0;
pub const SYNC_MASK: u16 = 0xFFE0;

/// Bitrate index 0 means "free format"
pub const FREE_BITRATE_INDEX: u8 = 0x00;
pub const RESERVED_BITRATE_INDEX: u8 = 0x0F;
pub const RESERVED_SAMPLE_RATE_INDEX: u8 = 0x03;

/// Bitrates in kbit/s, indexed by bitrate_index. Entries 0 (free) and 15
/// (reserved) are never looked up.
pub const BITRATES_V1_L1: [u32; 16] = [
    0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0,
];
pub const BITRATES_V1_L2: [u32; 16] = [
    0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0,
];
pub const BITRATES_V1_L3: [u32; 16] = [
    0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
];
/// MPEG-2 and MPEG-2.5 share their tables
pub const BITRATES_V2_L1: [u32; 16] = [
    0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0,
];
pub const BITRATES_V2_L23: [u32; 16] = [
    0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
];

/// MPEG-1 sample rates; MPEG-2 halves and MPEG-2.5 quarters them
pub const SAMPLE_RATES_V1: [u32; 3] = [44100, 48000, 32000];

/// Samples per frame
pub const SAMPLES_LAYER1: u32 = 384;
pub const SAMPLES_LAYER2: u32 = 1152;
pub const SAMPLES_LAYER3_V1: u32 = 1152;
pub const SAMPLES_LAYER3_V2: u32 = 576;

/// Frame length coefficients (slot counts per bitrate/sample_rate unit)
pub const COEFF_LAYER1: u32 = 12;
pub const SLOT_SIZE_LAYER1: u32 = 4;
pub const COEFF_LAYER23: u32 = 144;
pub const COEFF_LAYER3_V2: u32 = 72;

/// Layer III side information sizes in bytes (CRC-protected region)
pub const SIDE_INFO_V1_MONO: usize = 17;
pub const SIDE_INFO_V1_STEREO: usize = 32;
pub const SIDE_INFO_V2_MONO: usize = 9;
pub const SIDE_INFO_V2_STEREO: usize = 17;

/// Layer I subbands, each carrying a 4-bit allocation per channel
pub const LAYER1_SUBBANDS: usize = 32;
pub const LAYER1_ALLOC_BITS: usize = 4;

/// ID3 tag markers that may wrap an elementary stream
pub const ID3V2_MAGIC: &[u8; 3] = b"ID3";
pub const ID3V2_HEADER_SIZE: usize = 10;
pub const ID3V2_FOOTER_FLAG: u8 = 0x10;
pub const ID3V1_MAGIC: &[u8; 3] = b"TAG";
pub const ID3V1_SIZE: usize = 128;
