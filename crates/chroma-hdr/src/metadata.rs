//! HDR metadata record.
//!
//! One [`HdrMetadata`] describes a stream or segment: what it declares,
//! the mastering display, light levels, HLG parameters and any dynamic
//! payloads. Validation results travel with the record.

use crate::signal::{ColorPrimaries, HdrStandard, TransferCharacteristic};
use crate::validate::{validate, ValidationReport};
use chroma_primaries::{Chromaticity, RgbPrimaries};
use chroma_transfer::TransferFunction;
use serde::{Deserialize, Serialize};

/// Mastering display colour volume (SMPTE ST 2086).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasteringDisplay {
    /// Display primaries.
    pub primaries: RgbPrimaries,
    /// Display white.
    pub white_point: Chromaticity,
    /// Peak luminance in nits.
    pub max_luminance: f32,
    /// Black level in nits.
    pub min_luminance: f32,
}

impl Default for MasteringDisplay {
    fn default() -> Self {
        Self {
            primaries: RgbPrimaries::default(),
            white_point: Chromaticity::D65,
            max_luminance: 1000.0,
            min_luminance: 0.01,
        }
    }
}

impl MasteringDisplay {
    /// BT.2020 primaries, D65 white, default luminance range.
    pub fn bt2020() -> Self {
        Self {
            primaries: RgbPrimaries::BT2020,
            ..Self::default()
        }
    }
}

/// Content light levels (CTA-861.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentLightLevel {
    /// MaxCLL in nits.
    pub max_cll: u16,
    /// MaxFALL in nits.
    pub max_fall: u16,
}

/// HLG presentation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HlgParameters {
    /// OOTF system gamma.
    pub ootf_gamma: f32,
    /// System start code flag from the stream.
    pub system_start_code: bool,
    /// Nominal diffuse white in nits.
    pub reference_white_nits: f32,
}

impl Default for HlgParameters {
    fn default() -> Self {
        Self {
            ootf_gamma: chroma_transfer::hlg::REFERENCE_SYSTEM_GAMMA,
            system_start_code: false,
            reference_white_nits: 203.0,
        }
    }
}

/// Per-scene metadata payloads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicMetadata {
    /// The stream carries dynamic metadata.
    pub present: bool,
    /// Frame the payloads belong to.
    pub frame_number: u32,
    /// Raw HDR10+ payload.
    pub hdr10_plus: Vec<u8>,
    /// Raw Dolby Vision RPU.
    pub dolby_vision_rpu: Vec<u8>,
}

impl DynamicMetadata {
    /// True when at least one payload has bytes.
    pub fn has_payload(&self) -> bool {
        !self.hdr10_plus.is_empty() || !self.dolby_vision_rpu.is_empty()
    }
}

/// Everything known about the HDR signaling of a stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HdrMetadata {
    /// Declared standard.
    pub standard: HdrStandard,
    /// Declared transfer characteristic.
    pub transfer: TransferCharacteristic,
    /// Declared primaries.
    pub primaries: ColorPrimaries,
    /// Mastering display.
    pub mastering: MasteringDisplay,
    /// Content light levels.
    pub content_light: ContentLightLevel,
    /// HLG parameters.
    pub hlg: HlgParameters,
    /// Dynamic payloads.
    pub dynamic: DynamicMetadata,
    /// Full-range quantization.
    pub full_range: bool,
    /// Result of the last validation.
    pub is_valid: bool,
    /// Warnings from parsing and the last validation.
    pub warnings: Vec<String>,
}

impl HdrMetadata {
    /// SDR record: BT.709 transfer and primaries, valid.
    pub fn sdr() -> Self {
        Self {
            standard: HdrStandard::None,
            transfer: TransferCharacteristic::Bt709,
            primaries: ColorPrimaries::Bt709,
            is_valid: true,
            ..Self::default()
        }
    }

    /// Runs [`validate`] and stores the outcome.
    ///
    /// Earlier validation warnings are replaced; the rest of the record is
    /// kept as is.
    pub fn revalidate(&mut self) -> bool {
        let ValidationReport { valid, warnings } = validate(self);
        self.is_valid = valid;
        self.warnings = warnings;
        valid
    }

    /// Curve for the declared transfer, if the engine has one.
    pub fn transfer_function(&self) -> Option<TransferFunction> {
        self.transfer.transfer_function()
    }

    /// True for any standard but SDR.
    pub fn is_hdr(&self) -> bool {
        self.standard.is_hdr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let md = HdrMetadata::default();
        assert_eq!(md.standard, HdrStandard::None);
        assert_eq!(md.transfer, TransferCharacteristic::Unknown);
        assert_eq!(md.mastering.white_point, Chromaticity::new(0.3127, 0.3290));
        assert_eq!(md.mastering.max_luminance, 1000.0);
        assert_eq!(md.mastering.min_luminance, 0.01);
        assert_eq!(md.hlg.ootf_gamma, 1.2);
        assert!(!md.is_valid);
    }

    #[test]
    fn sdr_record_is_valid() {
        let mut md = HdrMetadata::sdr();
        assert!(md.revalidate());
        assert!(md.warnings.is_empty());
        assert_eq!(md.transfer_function(), Some(TransferFunction::Rec709));
    }

    #[test]
    fn yaml_round_trip_with_partial_input() {
        let yaml = "standard: Hdr10\ntransfer: Pq\ncontent_light:\n  max_cll: 1000\n";
        let md: HdrMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(md.standard, HdrStandard::Hdr10);
        assert_eq!(md.content_light.max_cll, 1000);
        assert_eq!(md.content_light.max_fall, 0);
        assert_eq!(md.mastering.max_luminance, 1000.0);

        let text = serde_yaml::to_string(&md).unwrap();
        let back: HdrMetadata = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, md);
    }
}
