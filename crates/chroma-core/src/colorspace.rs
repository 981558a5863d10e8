//! Color space and white point identifiers.
//!
//! [`ColorSpaceId`] is a closed enumeration: adding a space is a
//! compile-time change everywhere the identifier is matched. The numeric
//! description of each space (primaries, white, gamma) lives in the
//! registry of `chroma-primaries`, not here.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Named RGB working spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorSpaceId {
    /// ITU-R BT.601, 525-line (NTSC) primaries.
    Bt601_525,
    /// ITU-R BT.601, 625-line (PAL/SECAM) primaries.
    Bt601_625,
    /// ITU-R BT.709 (HDTV).
    Bt709,
    /// IEC 61966-2-1 sRGB.
    Srgb,
    /// ITU-R BT.2020 (UHDTV).
    Bt2020,
    /// BT.2020 non-constant luminance.
    Bt2020Ncl,
    /// BT.2020 constant luminance.
    Bt2020Cl,
    /// DCI-P3 theatrical, DCI white.
    DciP3,
    /// Display P3 (P3 primaries, D65 white).
    DisplayP3,
    /// Adobe RGB (1998).
    AdobeRgb,
    /// ProPhoto RGB (ROMM), D50 white.
    ProPhotoRgb,
    /// SMPTE-C (SMPTE 170M).
    SmpteC,
    /// Linear-light BT.709 primaries.
    LinearBt709,
    /// Linear-light BT.2020 primaries.
    LinearBt2020,
    /// ACEScg (AP1 primaries, linear).
    AcesCg,
    /// Unrecognized space. Registry lookups fall back to BT.709.
    Unknown,
}

impl ColorSpaceId {
    /// Every identifier, `Unknown` last.
    pub const ALL: [ColorSpaceId; 16] = [
        Self::Bt601_525,
        Self::Bt601_625,
        Self::Bt709,
        Self::Srgb,
        Self::Bt2020,
        Self::Bt2020Ncl,
        Self::Bt2020Cl,
        Self::DciP3,
        Self::DisplayP3,
        Self::AdobeRgb,
        Self::ProPhotoRgb,
        Self::SmpteC,
        Self::LinearBt709,
        Self::LinearBt2020,
        Self::AcesCg,
        Self::Unknown,
    ];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bt601_525 => "BT.601-525",
            Self::Bt601_625 => "BT.601-625",
            Self::Bt709 => "BT.709",
            Self::Srgb => "sRGB",
            Self::Bt2020 => "BT.2020",
            Self::Bt2020Ncl => "BT.2020 NCL",
            Self::Bt2020Cl => "BT.2020 CL",
            Self::DciP3 => "DCI-P3",
            Self::DisplayP3 => "Display P3",
            Self::AdobeRgb => "Adobe RGB",
            Self::ProPhotoRgb => "ProPhoto RGB",
            Self::SmpteC => "SMPTE-C",
            Self::LinearBt709 => "Linear BT.709",
            Self::LinearBt2020 => "Linear BT.2020",
            Self::AcesCg => "ACEScg",
            Self::Unknown => "Unknown",
        }
    }

    /// True for the BT.2020 family, which is what HDR content is mastered in.
    pub fn is_bt2020_family(self) -> bool {
        matches!(
            self,
            Self::Bt2020 | Self::Bt2020Ncl | Self::Bt2020Cl | Self::LinearBt2020
        )
    }

    /// Guesses a color space from free-form codec or stream information.
    ///
    /// Case-insensitive substring checks, first match wins: "2020",
    /// "dci"/"p3", "adobe", "srgb", "709". Without an explicit hint, HEVC
    /// streams are assumed to be BT.2020 and everything else BT.709.
    ///
    /// ```
    /// use chroma_core::ColorSpaceId;
    ///
    /// assert_eq!(ColorSpaceId::from_codec_info("HEVC Main10 bt2020nc"), ColorSpaceId::Bt2020);
    /// assert_eq!(ColorSpaceId::from_codec_info("hevc"), ColorSpaceId::Bt2020);
    /// assert_eq!(ColorSpaceId::from_codec_info("h264 high"), ColorSpaceId::Bt709);
    /// ```
    pub fn from_codec_info(info: &str) -> Self {
        let info = info.to_ascii_lowercase();
        if info.contains("2020") {
            Self::Bt2020
        } else if info.contains("dci") || info.contains("p3") {
            Self::DciP3
        } else if info.contains("adobe") {
            Self::AdobeRgb
        } else if info.contains("srgb") {
            Self::Srgb
        } else if info.contains("709") {
            Self::Bt709
        } else if info.contains("hevc") || info.contains("h265") {
            Self::Bt2020
        } else {
            Self::Bt709
        }
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    /// Parses a display name or a common alias, ignoring case, spaces,
    /// dots, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '.' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let id = match key.as_str() {
            "bt601525" | "rec601525" | "ntsc" => Self::Bt601_525,
            "bt601625" | "rec601625" | "pal" => Self::Bt601_625,
            "bt709" | "rec709" => Self::Bt709,
            "srgb" => Self::Srgb,
            "bt2020" | "rec2020" => Self::Bt2020,
            "bt2020ncl" => Self::Bt2020Ncl,
            "bt2020cl" => Self::Bt2020Cl,
            "dcip3" | "p3dci" => Self::DciP3,
            "displayp3" | "p3d65" => Self::DisplayP3,
            "adobergb" | "adobergb1998" => Self::AdobeRgb,
            "prophotorgb" | "prophoto" | "romm" => Self::ProPhotoRgb,
            "smptec" | "smpte170m" => Self::SmpteC,
            "linearbt709" | "linearsrgb" | "linrec709" => Self::LinearBt709,
            "linearbt2020" | "linrec2020" => Self::LinearBt2020,
            "acescg" | "ap1" => Self::AcesCg,
            "unknown" => Self::Unknown,
            _ => return Err(Error::UnknownColorSpace(s.to_string())),
        };
        Ok(id)
    }
}

/// Reference white identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WhitePointId {
    /// CIE D50 (ICC, print, ProPhoto).
    D50,
    /// CIE D55.
    D55,
    /// CIE D60 (ACES).
    D60,
    /// CIE D65 (BT.709, BT.2020, sRGB).
    D65,
    /// DCI theatrical white.
    Dci,
    /// Equal-energy illuminant E.
    E,
    /// Caller-supplied white, configured on the registry.
    Custom,
}

impl WhitePointId {
    /// Every identifier.
    pub const ALL: [WhitePointId; 7] = [
        Self::D50,
        Self::D55,
        Self::D60,
        Self::D65,
        Self::Dci,
        Self::E,
        Self::Custom,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D60 => "D60",
            Self::D65 => "D65",
            Self::Dci => "DCI",
            Self::E => "E",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for WhitePointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WhitePointId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d50" => Ok(Self::D50),
            "d55" => Ok(Self::D55),
            "d60" | "aces" => Ok(Self::D60),
            "d65" => Ok(Self::D65),
            "dci" => Ok(Self::Dci),
            "e" => Ok(Self::E),
            "custom" => Ok(Self::Custom),
            _ => Err(Error::UnknownWhitePoint(s.to_string())),
        }
    }
}
