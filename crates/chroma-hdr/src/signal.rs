//! HDR signaling enums: standard, transfer characteristic, primaries.
//!
//! These mirror what a stream declares. [`ColorSpaceId`] and
//! [`TransferFunction`] describe what the engine can compute; the
//! `color_space` and `transfer_function` accessors map between the two
//! where a mapping exists.

use chroma_core::ColorSpaceId;
use chroma_transfer::TransferFunction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HDR delivery standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HdrStandard {
    /// Standard dynamic range.
    #[default]
    None,
    /// BT.2020 + PQ with static metadata.
    Hdr10,
    /// HDR10 plus per-scene dynamic metadata.
    Hdr10Plus,
    /// Dolby Vision.
    DolbyVision,
    /// Hybrid Log-Gamma.
    Hlg,
    /// CUVA HDR Vivid.
    HdrVivid,
    /// SL-HDR1.
    SlHdr1,
    /// SL-HDR2.
    SlHdr2,
    /// Technicolor HDR.
    TechnicolorHdr,
}

impl HdrStandard {
    /// Every standard, SDR first.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Hdr10,
        Self::Hdr10Plus,
        Self::DolbyVision,
        Self::Hlg,
        Self::HdrVivid,
        Self::SlHdr1,
        Self::SlHdr2,
        Self::TechnicolorHdr,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "SDR",
            Self::Hdr10 => "HDR10",
            Self::Hdr10Plus => "HDR10+",
            Self::DolbyVision => "Dolby Vision",
            Self::Hlg => "HLG",
            Self::HdrVivid => "HDR Vivid",
            Self::SlHdr1 => "SL-HDR1",
            Self::SlHdr2 => "SL-HDR2",
            Self::TechnicolorHdr => "Technicolor HDR",
        }
    }

    /// True for anything but SDR.
    pub fn is_hdr(self) -> bool {
        self != Self::None
    }

    /// True when the standard relies on per-scene metadata.
    pub fn requires_dynamic_metadata(self) -> bool {
        matches!(self, Self::Hdr10Plus | Self::DolbyVision | Self::HdrVivid)
    }

    /// Transfer characteristic the standard is defined with.
    pub fn canonical_transfer(self) -> TransferCharacteristic {
        match self {
            Self::None => TransferCharacteristic::Bt709,
            Self::Hlg => TransferCharacteristic::Hlg,
            _ => TransferCharacteristic::Pq,
        }
    }
}

impl fmt::Display for HdrStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared transfer characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransferCharacteristic {
    /// Not signaled.
    #[default]
    Unknown,
    /// Linear light.
    Linear,
    /// IEC 61966-2-1.
    Srgb,
    /// ITU-R BT.709.
    Bt709,
    /// ITU-R BT.2020 (same curve as BT.709).
    Bt2020,
    /// SMPTE ST 2084.
    Pq,
    /// ITU-R BT.2100 HLG.
    Hlg,
    /// Camera log encoding.
    Log,
    /// Pure gamma 2.2.
    Gamma22,
    /// Pure gamma 2.8.
    Gamma28,
    /// DCI gamma 2.6.
    DciP3,
    /// Display P3 gamma 2.2.
    DisplayP3,
}

impl TransferCharacteristic {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Linear => "Linear",
            Self::Srgb => "sRGB",
            Self::Bt709 => "BT.709",
            Self::Bt2020 => "BT.2020",
            Self::Pq => "PQ (SMPTE ST 2084)",
            Self::Hlg => "HLG (ITU-R BT.2100)",
            Self::Log => "Logarithmic",
            Self::Gamma22 => "Gamma 2.2",
            Self::Gamma28 => "Gamma 2.8",
            Self::DciP3 => "DCI-P3",
            Self::DisplayP3 => "Display P3",
        }
    }

    /// Curve that evaluates this characteristic, if the engine has one.
    pub fn transfer_function(self) -> Option<TransferFunction> {
        match self {
            Self::Linear => Some(TransferFunction::Linear),
            Self::Srgb => Some(TransferFunction::Srgb),
            Self::Bt709 | Self::Bt2020 => Some(TransferFunction::Rec709),
            Self::Pq => Some(TransferFunction::Pq),
            Self::Hlg => Some(TransferFunction::Hlg),
            Self::Gamma22 | Self::DisplayP3 => Some(TransferFunction::Gamma(2.2)),
            Self::Gamma28 => Some(TransferFunction::Gamma(2.8)),
            Self::DciP3 => Some(TransferFunction::Gamma(2.6)),
            Self::Unknown | Self::Log => None,
        }
    }

    /// True for PQ and HLG.
    pub fn is_hdr(self) -> bool {
        matches!(self, Self::Pq | Self::Hlg)
    }
}

impl fmt::Display for TransferCharacteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared color primaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorPrimaries {
    /// Not signaled.
    #[default]
    Unknown,
    /// ITU-R BT.709.
    Bt709,
    /// ITU-R BT.2020.
    Bt2020,
    /// DCI-P3.
    DciP3,
    /// Display P3.
    DisplayP3,
    /// Adobe RGB (1998).
    AdobeRgb,
    /// sRGB.
    Srgb,
    /// ProPhoto RGB.
    ProPhotoRgb,
    /// BT.601 525-line.
    Bt601_525,
    /// BT.601 625-line.
    Bt601_625,
    /// BT.470 System M.
    Bt470M,
    /// BT.470 System B/G.
    Bt470Bg,
    /// SMPTE 240M.
    Smpte240M,
    /// Generic film.
    GenericFilm,
    /// BT.2020 non-constant luminance.
    Bt2020Ncl,
    /// BT.2020 constant luminance.
    Bt2020Cl,
}

impl ColorPrimaries {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bt709 => "BT.709",
            Self::Bt2020 => "BT.2020",
            Self::DciP3 => "DCI-P3",
            Self::DisplayP3 => "Display P3",
            Self::AdobeRgb => "Adobe RGB",
            Self::Srgb => "sRGB",
            Self::ProPhotoRgb => "ProPhoto RGB",
            Self::Bt601_525 => "BT.601 NTSC",
            Self::Bt601_625 => "BT.601 PAL",
            Self::Bt470M => "BT.470 M",
            Self::Bt470Bg => "BT.470 B/G",
            Self::Smpte240M => "SMPTE 240M",
            Self::GenericFilm => "Generic film",
            Self::Bt2020Ncl => "BT.2020 NCL",
            Self::Bt2020Cl => "BT.2020 CL",
            Self::Unknown => "Unknown",
        }
    }

    /// Registered working space with the same primaries, if any.
    pub fn color_space(self) -> Option<ColorSpaceId> {
        match self {
            Self::Bt709 => Some(ColorSpaceId::Bt709),
            Self::Bt2020 => Some(ColorSpaceId::Bt2020),
            Self::Bt2020Ncl => Some(ColorSpaceId::Bt2020Ncl),
            Self::Bt2020Cl => Some(ColorSpaceId::Bt2020Cl),
            Self::DciP3 => Some(ColorSpaceId::DciP3),
            Self::DisplayP3 => Some(ColorSpaceId::DisplayP3),
            Self::AdobeRgb => Some(ColorSpaceId::AdobeRgb),
            Self::Srgb => Some(ColorSpaceId::Srgb),
            Self::ProPhotoRgb => Some(ColorSpaceId::ProPhotoRgb),
            Self::Bt601_525 | Self::Smpte240M => Some(ColorSpaceId::Bt601_525),
            Self::Bt601_625 | Self::Bt470Bg => Some(ColorSpaceId::Bt601_625),
            Self::Bt470M | Self::GenericFilm | Self::Unknown => None,
        }
    }

    /// True for the BT.2020 variants.
    pub fn is_bt2020(self) -> bool {
        matches!(self, Self::Bt2020 | Self::Bt2020Ncl | Self::Bt2020Cl)
    }
}

impl fmt::Display for ColorPrimaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
