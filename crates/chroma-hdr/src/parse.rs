//! Standard-specific metadata parsing.
//!
//! # Static metadata block
//!
//! HDR10, HDR10+ and Dolby Vision buffers of at least 32 bytes carry a
//! big-endian static block:
//!
//! | Offset | Type | Field |
//! |--------|------|-------|
//! | 16..20 | u32 | max mastering luminance, 0.0001 nits |
//! | 20..24 | u32 | min mastering luminance, 0.0001 nits |
//! | 24..26 | u16 | MaxCLL, nits |
//! | 26..28 | u16 | MaxFALL, nits |
//!
//! HDR10+ dynamic metadata follows the block at offset 32.

use crate::detect::{detect, CodecHint};
use crate::metadata::{HdrMetadata, MasteringDisplay};
use crate::signal::{ColorPrimaries, HdrStandard, TransferCharacteristic};
use chroma_transfer::hlg;
use tracing::debug;

/// Size of the static block, and the minimum for HDR10 and HDR10+.
pub const STATIC_BLOCK_LEN: usize = 32;
/// Minimum Dolby Vision buffer.
pub const DOLBY_VISION_MIN_LEN: usize = 16;
/// Minimum HLG buffer.
pub const HLG_MIN_LEN: usize = 8;
/// Longest Dolby Vision RPU kept.
pub const RPU_MAX_LEN: usize = 64;
/// Shortest buffer [`detect_metadata`] looks at.
pub const DETECT_MIN_LEN: usize = 8;

/// Luminance fields are in units of 0.0001 nits.
const LUMINANCE_SCALE: f32 = 10_000.0;

/// Reference white for HLG, in nits (ITU-R BT.2408).
const HLG_REFERENCE_WHITE: f32 = 203.0;

fn min_len(standard: HdrStandard) -> Option<usize> {
    match standard {
        HdrStandard::Hdr10 | HdrStandard::Hdr10Plus => Some(STATIC_BLOCK_LEN),
        HdrStandard::DolbyVision => Some(DOLBY_VISION_MIN_LEN),
        HdrStandard::Hlg => Some(HLG_MIN_LEN),
        _ => None,
    }
}

fn be_u32(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 4)?;
    Some(u32::from_be_bytes(bytes.try_into().ok()?))
}

fn be_u16(data: &[u8], at: usize) -> Option<u16> {
    let bytes = data.get(at..at + 2)?;
    Some(u16::from_be_bytes(bytes.try_into().ok()?))
}

/// Reads the static block into `md`. No-op for short buffers.
fn read_static_block(data: &[u8], md: &mut HdrMetadata) {
    if data.len() < STATIC_BLOCK_LEN {
        return;
    }
    if let (Some(max), Some(min)) = (be_u32(data, 16), be_u32(data, 20)) {
        md.mastering.max_luminance = max as f32 / LUMINANCE_SCALE;
        md.mastering.min_luminance = min as f32 / LUMINANCE_SCALE;
    }
    if let (Some(cll), Some(fall)) = (be_u16(data, 24), be_u16(data, 26)) {
        md.content_light.max_cll = cll;
        md.content_light.max_fall = fall;
    }
}

fn pq_base(standard: HdrStandard) -> HdrMetadata {
    HdrMetadata {
        standard,
        transfer: TransferCharacteristic::Pq,
        primaries: ColorPrimaries::Bt2020,
        mastering: MasteringDisplay::bt2020(),
        ..HdrMetadata::default()
    }
}

/// Parses a buffer as the given standard.
///
/// Buffers below the standard's minimum size give a record with the
/// standard set, unknown transfer and primaries, `is_valid == false` and a
/// warning. SDR returns [`HdrMetadata::sdr`]. Standards without a parser
/// get their canonical transfer, the static block when present, and a
/// warning.
pub fn parse(standard: HdrStandard, data: &[u8]) -> HdrMetadata {
    if standard == HdrStandard::None {
        return HdrMetadata::sdr();
    }

    let need = min_len(standard).unwrap_or(0);
    if data.len() < need {
        debug!(%standard, need, got = data.len(), "metadata buffer too short");
        return HdrMetadata {
            standard,
            transfer: TransferCharacteristic::Unknown,
            primaries: ColorPrimaries::Unknown,
            is_valid: false,
            warnings: vec![format!(
                "Insufficient data for {standard} metadata: need {need} bytes, got {}",
                data.len()
            )],
            ..HdrMetadata::default()
        };
    }

    let mut md = match standard {
        HdrStandard::Hdr10 => {
            let mut md = pq_base(standard);
            read_static_block(data, &mut md);
            md
        }
        HdrStandard::Hdr10Plus => {
            let mut md = pq_base(standard);
            read_static_block(data, &mut md);
            md.dynamic.present = true;
            md.dynamic.hdr10_plus = data[STATIC_BLOCK_LEN..].to_vec();
            md
        }
        HdrStandard::DolbyVision => {
            let mut md = pq_base(standard);
            read_static_block(data, &mut md);
            md.dynamic.present = true;
            md.dynamic.dolby_vision_rpu = data[..data.len().min(RPU_MAX_LEN)].to_vec();
            md
        }
        HdrStandard::Hlg => {
            let mut md = HdrMetadata {
                standard,
                transfer: TransferCharacteristic::Hlg,
                primaries: ColorPrimaries::Bt2020,
                mastering: MasteringDisplay::bt2020(),
                ..HdrMetadata::default()
            };
            md.mastering.max_luminance = hlg::REFERENCE_PEAK_NITS;
            md.hlg.ootf_gamma = hlg::REFERENCE_SYSTEM_GAMMA;
            md.hlg.system_start_code = data[7] & 0x01 != 0;
            md.hlg.reference_white_nits = HLG_REFERENCE_WHITE;
            md
        }
        _ => {
            let mut md = pq_base(standard);
            md.transfer = standard.canonical_transfer();
            read_static_block(data, &mut md);
            md.revalidate();
            md.is_valid = false;
            md.warnings.push(format!("No metadata parser for {standard}"));
            return md;
        }
    };

    md.revalidate();
    md
}

/// Detects the standard, parses its metadata and validates the result.
///
/// Transfer and primaries come from detection, overriding the parser's
/// defaults. Buffers under 8 bytes give [`HdrMetadata::sdr`].
///
/// ```rust
/// use chroma_hdr::{detect_metadata, CodecHint, HdrStandard};
///
/// let mut stream = vec![0u8; 32];
/// stream[..5].copy_from_slice(b"HDR10");
/// stream[5] = 0x10; // PQ
/// stream[6] = 0x09; // BT.2020
/// stream[16..20].copy_from_slice(&10_000_000u32.to_be_bytes()); // 1000 nits
/// stream[20..24].copy_from_slice(&50u32.to_be_bytes()); // 0.005 nits
/// stream[24..26].copy_from_slice(&1000u16.to_be_bytes());
///
/// let md = detect_metadata(&stream, CodecHint::Hevc);
/// assert_eq!(md.standard, HdrStandard::Hdr10);
/// assert_eq!(md.content_light.max_cll, 1000);
/// assert!(md.is_valid);
/// ```
pub fn detect_metadata(data: &[u8], hint: CodecHint) -> HdrMetadata {
    if data.len() < DETECT_MIN_LEN {
        return HdrMetadata::sdr();
    }
    let detection = detect(data, hint);
    let mut md = parse(detection.standard, data);
    if detection.standard == HdrStandard::None {
        return md;
    }
    let parsed = md.transfer != TransferCharacteristic::Unknown;
    md.transfer = detection.transfer;
    md.primaries = detection.primaries;
    if parsed {
        md.revalidate();
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn static_block(max_raw: u32, min_raw: u32, cll: u16, fall: u16, len: usize) -> Vec<u8> {
        let mut v = vec![0u8; len];
        v[16..20].copy_from_slice(&max_raw.to_be_bytes());
        v[20..24].copy_from_slice(&min_raw.to_be_bytes());
        v[24..26].copy_from_slice(&cll.to_be_bytes());
        v[26..28].copy_from_slice(&fall.to_be_bytes());
        v
    }

    #[test]
    fn hdr10_static_block() {
        let data = static_block(40_000_000, 50, 1000, 400, 32);
        let md = parse(HdrStandard::Hdr10, &data);
        assert_abs_diff_eq!(md.mastering.max_luminance, 4000.0, epsilon = 1e-2);
        assert_abs_diff_eq!(md.mastering.min_luminance, 0.005, epsilon = 1e-6);
        assert_eq!(md.content_light.max_cll, 1000);
        assert_eq!(md.content_light.max_fall, 400);
        assert_eq!(md.mastering.primaries, chroma_primaries::RgbPrimaries::BT2020);
        assert!(md.is_valid, "{:?}", md.warnings);
    }

    #[test]
    fn short_buffers_fail_softly() {
        let md = parse(HdrStandard::Hdr10, &[0u8; 31]);
        assert_eq!(md.standard, HdrStandard::Hdr10);
        assert_eq!(md.transfer, TransferCharacteristic::Unknown);
        assert_eq!(md.primaries, ColorPrimaries::Unknown);
        assert!(!md.is_valid);
        assert!(md.warnings[0].contains("32 bytes"));

        assert!(!parse(HdrStandard::DolbyVision, &[0u8; 15]).is_valid);
        assert!(!parse(HdrStandard::Hlg, &[0u8; 7]).is_valid);
    }

    #[test]
    fn hdr10_plus_payload_follows_block() {
        let mut data = static_block(10_000_000, 100, 800, 200, 40);
        data[32..].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let md = parse(HdrStandard::Hdr10Plus, &data);
        assert!(md.dynamic.present);
        assert_eq!(md.dynamic.hdr10_plus, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(md.is_valid);

        let bare = static_block(10_000_000, 100, 800, 200, 32);
        let md = parse(HdrStandard::Hdr10Plus, &bare);
        assert!(!md.is_valid);
        assert!(md.warnings.iter().any(|w| w == "Missing dynamic metadata payload"));
    }

    #[test]
    fn dolby_vision_rpu_is_capped() {
        let data: Vec<u8> = (0..100).collect();
        let md = parse(HdrStandard::DolbyVision, &data);
        assert_eq!(md.dynamic.dolby_vision_rpu.len(), RPU_MAX_LEN);
        assert_eq!(md.dynamic.dolby_vision_rpu[63], 63);

        let short: Vec<u8> = vec![0x7C; 20];
        let md = parse(HdrStandard::DolbyVision, &short);
        assert_eq!(md.dynamic.dolby_vision_rpu.len(), 20);
        assert_eq!(md.mastering.max_luminance, 1000.0);
        assert!(md.is_valid);
    }

    #[test]
    fn hlg_parameters() {
        let md = parse(HdrStandard::Hlg, &[0, 0, 0, 0, 0, 0, 0x18, 0x01]);
        assert_eq!(md.transfer, TransferCharacteristic::Hlg);
        assert_eq!(md.hlg.ootf_gamma, 1.2);
        assert!(md.hlg.system_start_code);
        assert_eq!(md.hlg.reference_white_nits, 203.0);
        assert_eq!(md.mastering.max_luminance, 1000.0);
        assert!(md.is_valid);

        let md = parse(HdrStandard::Hlg, &[0, 0, 0, 0, 0, 0, 0x18, 0x02]);
        assert!(!md.hlg.system_start_code);
    }

    #[test]
    fn unparsed_standard_is_flagged() {
        let md = parse(HdrStandard::SlHdr1, &[0u8; 8]);
        assert_eq!(md.standard, HdrStandard::SlHdr1);
        assert!(!md.is_valid);
        assert!(md.warnings.iter().any(|w| w.contains("SL-HDR1")));
    }

    #[test]
    fn detect_metadata_on_tiny_buffers() {
        let md = detect_metadata(b"HDR10", CodecHint::Unknown);
        assert_eq!(md, HdrMetadata::sdr());
    }

    #[test]
    fn detection_overrides_parser_transfer() {
        // HLG signature with an explicit PQ code in byte 5
        let data = [b'H', b'L', b'G', 0, 0, 0x10, 0x09, 0x00];
        let md = detect_metadata(&data, CodecHint::Unknown);
        assert_eq!(md.standard, HdrStandard::Hlg);
        assert_eq!(md.transfer, TransferCharacteristic::Pq);
        assert!(!md.is_valid);
        assert!(md.warnings.iter().any(|w| w.contains("HLG transfer")));
    }

    #[test]
    fn detected_but_short_keeps_parse_failure() {
        // HDR10 indicators in an 8 byte buffer: too short for the static block
        let data = [0, 0, 0, 0, 0x10, 0x84, 0x09, 0];
        let md = detect_metadata(&data, CodecHint::Unknown);
        assert_eq!(md.standard, HdrStandard::Hdr10);
        assert!(!md.is_valid);
        assert!(md.warnings[0].starts_with("Insufficient data"));
    }
}
