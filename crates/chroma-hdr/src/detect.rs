//! HDR standard detection from raw stream bytes.
//!
//! Detection is a pure function of the bytes and a codec hint. Steps, first
//! match wins:
//!
//! 1. ASCII signatures within the first 64 bytes, longest first:
//!    `HDR10`, `HDR+`, `HLG`, `DV`. HEVC and AV1 streams also accept a
//!    Dolby Vision RPU NAL prefix (`7C 01`) at offset 0.
//! 2. Indicator bytes: `[4] == 0x10 && [5] == 0x84` marks PQ (HDR10),
//!    `[6] == 0x18` marks HLG.
//! 3. Otherwise SDR with BT.709 transfer and primaries.
//!
//! Once a standard is found, byte 5 may refine the transfer and byte 6 the
//! primaries when they hold a known code.

use crate::signal::{ColorPrimaries, HdrStandard, TransferCharacteristic};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Bytes searched for signatures.
pub const SIGNATURE_WINDOW: usize = 64;

/// Shortest buffer that can identify a standard.
pub const MIN_DETECT_LEN: usize = 4;

const SIGNATURES: [(&[u8], HdrStandard); 4] = [
    (b"HDR10", HdrStandard::Hdr10),
    (b"HDR+", HdrStandard::Hdr10Plus),
    (b"HLG", HdrStandard::Hlg),
    (b"DV", HdrStandard::DolbyVision),
];

const DV_RPU_PREFIX: [u8; 2] = [0x7C, 0x01];

/// Codec family of the stream, used to enable codec-specific signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CodecHint {
    /// No hint.
    #[default]
    Unknown,
    /// H.264 / AVC.
    H264,
    /// H.265 / HEVC.
    Hevc,
    /// AV1.
    Av1,
    /// VP9.
    Vp9,
}

impl CodecHint {
    /// Guesses the codec from a free-form name, ignoring case.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if name.contains("hevc") || name.contains("265") {
            Self::Hevc
        } else if name.contains("av1") || name.contains("av01") {
            Self::Av1
        } else if name.contains("vp9") {
            Self::Vp9
        } else if name.contains("avc") || name.contains("264") {
            Self::H264
        } else {
            Self::Unknown
        }
    }

    fn carries_dv_rpu(self) -> bool {
        matches!(self, Self::Hevc | Self::Av1)
    }
}

/// What a buffer declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Detected standard.
    pub standard: HdrStandard,
    /// Transfer characteristic.
    pub transfer: TransferCharacteristic,
    /// Color primaries.
    pub primaries: ColorPrimaries,
}

impl Detection {
    /// SDR with BT.709 transfer and primaries.
    pub const SDR: Self = Self {
        standard: HdrStandard::None,
        transfer: TransferCharacteristic::Bt709,
        primaries: ColorPrimaries::Bt709,
    };
}

fn transfer_from_code(code: u8) -> Option<TransferCharacteristic> {
    match code {
        0x01 => Some(TransferCharacteristic::Bt709),
        0x09 => Some(TransferCharacteristic::Bt2020),
        0x10 => Some(TransferCharacteristic::Pq),
        0x13 => Some(TransferCharacteristic::Srgb),
        0x18 => Some(TransferCharacteristic::Hlg),
        _ => None,
    }
}

fn primaries_from_code(code: u8) -> Option<ColorPrimaries> {
    match code {
        0x01 => Some(ColorPrimaries::Bt709),
        0x09 => Some(ColorPrimaries::Bt2020),
        0x0C => Some(ColorPrimaries::DciP3),
        0x06 => Some(ColorPrimaries::Bt601_525),
        0x05 => Some(ColorPrimaries::Bt601_625),
        _ => None,
    }
}

fn find_signature(data: &[u8]) -> Option<HdrStandard> {
    let window = &data[..data.len().min(SIGNATURE_WINDOW)];
    SIGNATURES.iter().find_map(|&(sig, standard)| {
        let pos = window.windows(sig.len()).position(|w| w == sig)?;
        trace!(%standard, offset = pos, "signature hit");
        Some(standard)
    })
}

/// Detects the standard only.
pub fn detect_standard(data: &[u8], hint: CodecHint) -> HdrStandard {
    if data.len() < MIN_DETECT_LEN {
        return HdrStandard::None;
    }
    if let Some(standard) = find_signature(data) {
        return standard;
    }
    if hint.carries_dv_rpu() && data.starts_with(&DV_RPU_PREFIX) {
        trace!(?hint, "dolby vision rpu prefix");
        return HdrStandard::DolbyVision;
    }
    if data.get(4) == Some(&0x10) && data.get(5) == Some(&0x84) {
        return HdrStandard::Hdr10;
    }
    if data.get(6) == Some(&0x18) {
        return HdrStandard::Hlg;
    }
    HdrStandard::None
}

/// Detects standard, transfer and primaries.
///
/// ```rust
/// use chroma_hdr::{detect, CodecHint, HdrStandard, TransferCharacteristic};
///
/// let pq = [0, 0, 0, 0, 0x10, 0x84, 0, 0];
/// let d = detect(&pq, CodecHint::Unknown);
/// assert_eq!(d.standard, HdrStandard::Hdr10);
/// assert_eq!(d.transfer, TransferCharacteristic::Pq);
///
/// assert_eq!(detect(&[0; 8], CodecHint::Unknown).standard, HdrStandard::None);
/// ```
pub fn detect(data: &[u8], hint: CodecHint) -> Detection {
    let standard = detect_standard(data, hint);
    if standard == HdrStandard::None {
        return Detection::SDR;
    }
    let transfer = data
        .get(5)
        .and_then(|&c| transfer_from_code(c))
        .unwrap_or_else(|| standard.canonical_transfer());
    let primaries = data
        .get(6)
        .and_then(|&c| primaries_from_code(c))
        .unwrap_or(ColorPrimaries::Bt2020);
    debug!(%standard, %transfer, %primaries, len = data.len(), "hdr detected");
    Detection {
        standard,
        transfer,
        primaries,
    }
}
