//! # chroma-hdr
//!
//! HDR signaling: what a stream declares and whether it is consistent.
//!
//! - [`detect()`] / [`detect_standard`] - HDR10, HDR10+, Dolby Vision and HLG
//!   from raw stream bytes
//! - [`parse()`] / [`detect_metadata`] - static block, dynamic payloads and
//!   HLG parameters into an [`HdrMetadata`]
//! - [`validate()`] - consistency checks, also stored by
//!   [`HdrMetadata::revalidate`]
//! - [`create_processing_config`] and the delivery presets
//! - [`PlatformCatalog`] / [`validate_for_platform`] - streaming platform
//!   requirements, built in or loaded from YAML
//!
//! ```rust
//! use chroma_hdr::{detect_metadata, validate_for_platform, CodecHint, HdrStandard};
//!
//! let mut stream = vec![0u8; 48];
//! stream[..5].copy_from_slice(b"HDR10");
//! stream[16..20].copy_from_slice(&10_000_000u32.to_be_bytes());
//! stream[20..24].copy_from_slice(&100u32.to_be_bytes());
//! stream[24..26].copy_from_slice(&800u16.to_be_bytes());
//! stream[26..28].copy_from_slice(&300u16.to_be_bytes());
//!
//! let md = detect_metadata(&stream, CodecHint::Hevc);
//! assert_eq!(md.standard, HdrStandard::Hdr10);
//! assert!(md.is_valid);
//! assert!(validate_for_platform(&md, "YouTube").meets_requirements);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
mod metadata;
mod parse;
mod platform;
mod processing;
mod signal;
mod validate;

pub use detect::{detect, detect_standard, CodecHint, Detection, MIN_DETECT_LEN, SIGNATURE_WINDOW};
pub use error::{HdrError, HdrResult};
pub use metadata::{
    ContentLightLevel, DynamicMetadata, HdrMetadata, HlgParameters, MasteringDisplay,
};
pub use parse::{
    detect_metadata, parse, DETECT_MIN_LEN, DOLBY_VISION_MIN_LEN, HLG_MIN_LEN, RPU_MAX_LEN,
    STATIC_BLOCK_LEN,
};
pub use platform::{
    validate_for_platform, FormatRule, LightLevelRule, PlatformCatalog, PlatformProfile,
    PlatformReport, PrimariesRule, Requirement, REVIEW_RECOMMENDATION, UNKNOWN_PLATFORM,
};
pub use processing::{
    apple_dolby_vision_config, broadcast_hlg_config, check_compatibility, cinema_dci_p3_config,
    convert_color_space, convert_pixel, convert_sdr_to_hdr, create_hdr10_metadata,
    create_processing_config, netflix_config, primaries_conversion_matrix, youtube_config,
    CompatibilityInfo, GamutConversionParams, HdrCapabilities, HdrProcessingConfig,
    ToneMappingParams, CINEMA_PEAK_NITS, DEFAULT_LUT_SIZE, SDR_PEAK_NITS,
};
pub use signal::{ColorPrimaries, HdrStandard, TransferCharacteristic};
pub use validate::{validate, ValidationReport, MAX_MASTERING_NITS};
