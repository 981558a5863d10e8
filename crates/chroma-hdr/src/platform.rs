//! Streaming platform HDR requirements.
//!
//! A [`PlatformCatalog`] holds one [`PlatformProfile`] per platform. The
//! built-in catalog covers YouTube, Netflix, Apple TV+ and BBC iPlayer;
//! custom catalogs load from YAML:
//!
//! ```yaml
//! platforms:
//!   - name: ExampleTV
//!     aliases: [example]
//!     formats:
//!       - standard: Hdr10
//!         met: HDR10 format supported
//!     unsupported_format:
//!       failure: Unsupported HDR format
//!       recommendation: Convert to HDR10
//!     light_level:
//!       max_cll: 1000
//!       met: Content light levels within limits
//!       failure: Invalid content light levels
//!       recommendation: Ensure MaxCLL <= 1000 nits
//! ```

use crate::error::{HdrError, HdrResult};
use crate::metadata::HdrMetadata;
use crate::signal::{ColorPrimaries, HdrStandard};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Reported for names missing from the catalog.
pub const UNKNOWN_PLATFORM: &str = "Unknown streaming platform";

/// Added to every failing report.
pub const REVIEW_RECOMMENDATION: &str = "Review HDR metadata and consider format conversion";

/// An accepted HDR format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRule {
    /// The standard.
    pub standard: HdrStandard,
    /// Reported when content uses it.
    pub met: String,
    /// Optional advice even when accepted.
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Failure text plus advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Reported on failure.
    pub failure: String,
    /// Advice on failure.
    pub recommendation: String,
}

/// Required mastering primaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimariesRule {
    /// Primaries content must declare.
    pub required: ColorPrimaries,
    /// Reported on success.
    pub met: String,
    /// Reported on failure.
    pub failure: String,
    /// Advice on failure.
    pub recommendation: String,
}

/// MaxCLL bound; `0 < MaxCLL <= max_cll` passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightLevelRule {
    /// Upper bound in nits.
    pub max_cll: u16,
    /// Reported on success.
    pub met: String,
    /// Reported on failure.
    pub failure: String,
    /// Advice on failure.
    pub recommendation: String,
}

/// One platform's rules.
///
/// Format rules only apply to HDR content; SDR passes them silently.
/// Primaries and light-level rules apply to every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    /// Display name.
    pub name: String,
    /// Other names accepted by lookups.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Accepted formats.
    #[serde(default)]
    pub formats: Vec<FormatRule>,
    /// Text for HDR formats not in `formats`.
    #[serde(default)]
    pub unsupported_format: Option<Requirement>,
    /// Primaries requirement.
    #[serde(default)]
    pub primaries: Option<PrimariesRule>,
    /// Light level requirement.
    #[serde(default)]
    pub light_level: Option<LightLevelRule>,
}

/// Outcome of a platform check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlatformReport {
    /// No requirement failed.
    pub meets_requirements: bool,
    /// Passed requirements.
    pub met: Vec<String>,
    /// Failed requirements.
    pub failed: Vec<String>,
    /// Advice.
    pub recommendations: Vec<String>,
}

impl PlatformReport {
    fn finish(mut self) -> Self {
        self.meets_requirements = self.failed.is_empty();
        if !self.meets_requirements {
            self.recommendations.push(REVIEW_RECOMMENDATION.to_string());
        }
        self
    }
}

fn s(text: &str) -> String {
    text.to_string()
}

impl PlatformProfile {
    /// True when `name` matches the name or an alias, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Checks a record against this profile.
    pub fn check(&self, md: &HdrMetadata) -> PlatformReport {
        let mut report = PlatformReport::default();

        if md.standard.is_hdr() {
            match self.formats.iter().find(|f| f.standard == md.standard) {
                Some(rule) => {
                    report.met.push(rule.met.clone());
                    report.recommendations.extend(rule.recommendation.clone());
                }
                None => match &self.unsupported_format {
                    Some(req) => {
                        report.failed.push(req.failure.clone());
                        report.recommendations.push(req.recommendation.clone());
                    }
                    None => report
                        .failed
                        .push(format!("Unsupported HDR format for {}", self.name)),
                },
            }
        }

        if let Some(rule) = &self.primaries {
            if md.primaries == rule.required {
                report.met.push(rule.met.clone());
            } else {
                report.failed.push(rule.failure.clone());
                report.recommendations.push(rule.recommendation.clone());
            }
        }

        if let Some(rule) = &self.light_level {
            let cll = md.content_light.max_cll;
            if cll > 0 && cll <= rule.max_cll {
                report.met.push(rule.met.clone());
            } else {
                report.failed.push(rule.failure.clone());
                report.recommendations.push(rule.recommendation.clone());
            }
        }

        report.finish()
    }

    fn youtube() -> Self {
        Self {
            name: s("YouTube"),
            aliases: vec![s("yt")],
            formats: vec![
                FormatRule {
                    standard: HdrStandard::Hdr10,
                    met: s("HDR10 format supported"),
                    recommendation: None,
                },
                FormatRule {
                    standard: HdrStandard::Hlg,
                    met: s("HLG format supported"),
                    recommendation: None,
                },
            ],
            unsupported_format: Some(Requirement {
                failure: s("Unsupported HDR format for YouTube"),
                recommendation: s("Convert to HDR10 or HLG"),
            }),
            primaries: Some(bt2020_rule()),
            light_level: None,
        }
    }

    fn netflix() -> Self {
        let supported = |standard| FormatRule {
            standard,
            met: s("Supported HDR format"),
            recommendation: None,
        };
        Self {
            name: s("Netflix"),
            aliases: Vec::new(),
            formats: vec![
                supported(HdrStandard::DolbyVision),
                supported(HdrStandard::Hdr10),
                supported(HdrStandard::Hdr10Plus),
            ],
            unsupported_format: Some(Requirement {
                failure: s("Unsupported HDR format"),
                recommendation: s("Convert to Dolby Vision or HDR10+"),
            }),
            primaries: None,
            light_level: Some(LightLevelRule {
                max_cll: 4000,
                met: s("Content light levels within limits"),
                failure: s("Invalid content light levels"),
                recommendation: s("Ensure MaxCLL ≤ 4000 nits"),
            }),
        }
    }

    fn apple_tv() -> Self {
        Self {
            name: s("Apple TV+"),
            aliases: vec![s("Apple TV"), s("AppleTV+"), s("Apple")],
            formats: vec![
                FormatRule {
                    standard: HdrStandard::DolbyVision,
                    met: s("Dolby Vision supported"),
                    recommendation: None,
                },
                FormatRule {
                    standard: HdrStandard::Hdr10,
                    met: s("HDR10 supported"),
                    recommendation: Some(s("Dolby Vision preferred for optimal quality")),
                },
            ],
            unsupported_format: Some(Requirement {
                failure: s("Unsupported HDR format"),
                recommendation: s("Convert to Dolby Vision or HDR10"),
            }),
            primaries: None,
            light_level: None,
        }
    }

    fn bbc_iplayer() -> Self {
        Self {
            name: s("BBC iPlayer"),
            aliases: vec![s("iPlayer"), s("BBC")],
            formats: vec![FormatRule {
                standard: HdrStandard::Hlg,
                met: s("HLG format supported"),
                recommendation: None,
            }],
            unsupported_format: Some(Requirement {
                failure: s("Unsupported HDR format for BBC iPlayer"),
                recommendation: s("Convert to HLG"),
            }),
            primaries: Some(bt2020_rule()),
            light_level: None,
        }
    }
}

fn bt2020_rule() -> PrimariesRule {
    PrimariesRule {
        required: ColorPrimaries::Bt2020,
        met: s("BT.2020 color primaries supported"),
        failure: s("Non-BT.2020 color primaries"),
        recommendation: s("Convert to BT.2020 for optimal HDR"),
    }
}

/// Platform profiles with name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCatalog {
    profiles: Vec<PlatformProfile>,
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PlatformCatalog {
    /// YouTube, Netflix, Apple TV+ and BBC iPlayer.
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                PlatformProfile::youtube(),
                PlatformProfile::netflix(),
                PlatformProfile::apple_tv(),
                PlatformProfile::bbc_iplayer(),
            ],
        }
    }

    /// Builds a catalog, rejecting empty and clashing names.
    pub fn new(profiles: Vec<PlatformProfile>) -> HdrResult<Self> {
        let mut seen = HashSet::new();
        for p in &profiles {
            if p.name.trim().is_empty() {
                return Err(HdrError::UnnamedPlatform);
            }
            for name in std::iter::once(&p.name).chain(&p.aliases) {
                let key = name.to_lowercase();
                if !seen.insert(key.clone()) {
                    return Err(HdrError::DuplicatePlatform { name: key });
                }
            }
        }
        Ok(Self { profiles })
    }

    /// Loads a catalog from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> HdrResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(HdrError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), platforms = catalog.len(), "loaded platform catalog");
        Ok(catalog)
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> HdrResult<Self> {
        let raw: RawCatalog = serde_yaml::from_str(yaml)?;
        Self::new(raw.platforms)
    }

    /// Serializes the catalog to YAML.
    pub fn to_yaml_string(&self) -> HdrResult<String> {
        let raw = RawCatalogRef {
            platforms: &self.profiles,
        };
        Ok(serde_yaml::to_string(&raw)?)
    }

    /// Looks up a platform by name or alias, ignoring case.
    pub fn find(&self, name: &str) -> Option<&PlatformProfile> {
        let name = name.trim();
        self.profiles.iter().find(|p| p.matches(name))
    }

    /// Profiles in catalog order.
    pub fn profiles(&self) -> &[PlatformProfile] {
        &self.profiles
    }

    /// Platform names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    /// Number of platforms.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when the catalog has no platforms.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Checks a record against a named platform.
    ///
    /// Unknown names fail with [`UNKNOWN_PLATFORM`].
    pub fn validate(&self, md: &HdrMetadata, platform: &str) -> PlatformReport {
        match self.find(platform) {
            Some(profile) => {
                let report = profile.check(md);
                debug!(
                    platform = %profile.name,
                    standard = %md.standard,
                    ok = report.meets_requirements,
                    "platform check"
                );
                report
            }
            None => {
                debug!(platform, "unknown platform");
                PlatformReport {
                    failed: vec![s(UNKNOWN_PLATFORM)],
                    recommendations: vec![s("Check platform-specific HDR requirements")],
                    ..PlatformReport::default()
                }
                .finish()
            }
        }
    }
}

/// Checks a record against a platform from the built-in catalog.
///
/// ```rust
/// use chroma_hdr::{create_hdr10_metadata, validate_for_platform};
///
/// let md = create_hdr10_metadata(1000.0, 0.01, 1000, 400);
/// assert!(validate_for_platform(&md, "netflix").meets_requirements);
/// assert!(!validate_for_platform(&md, "MyTube").meets_requirements);
/// ```
pub fn validate_for_platform(md: &HdrMetadata, platform: &str) -> PlatformReport {
    PlatformCatalog::builtin().validate(md, platform)
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    platforms: Vec<PlatformProfile>,
}

#[derive(Serialize)]
struct RawCatalogRef<'a> {
    platforms: &'a [PlatformProfile],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::create_hdr10_metadata;
    use crate::signal::TransferCharacteristic;

    fn hdr10() -> HdrMetadata {
        create_hdr10_metadata(1000.0, 0.01, 1000, 400)
    }

    fn with_standard(standard: HdrStandard) -> HdrMetadata {
        HdrMetadata {
            standard,
            ..hdr10()
        }
    }

    #[test]
    fn youtube_accepts_hdr10_and_hlg() {
        let r = validate_for_platform(&hdr10(), "YouTube");
        assert!(r.meets_requirements);
        assert_eq!(r.met, ["HDR10 format supported", "BT.2020 color primaries supported"]);

        let hlg = HdrMetadata {
            transfer: TransferCharacteristic::Hlg,
            ..with_standard(HdrStandard::Hlg)
        };
        assert!(validate_for_platform(&hlg, "youtube").meets_requirements);

        let r = validate_for_platform(&with_standard(HdrStandard::DolbyVision), "YouTube");
        assert!(!r.meets_requirements);
        assert_eq!(r.failed, ["Unsupported HDR format for YouTube"]);
        assert_eq!(
            r.recommendations,
            ["Convert to HDR10 or HLG", REVIEW_RECOMMENDATION]
        );
    }

    #[test]
    fn youtube_requires_bt2020() {
        let md = HdrMetadata {
            primaries: ColorPrimaries::DciP3,
            ..hdr10()
        };
        let r = validate_for_platform(&md, "YouTube");
        assert_eq!(r.failed, ["Non-BT.2020 color primaries"]);
    }

    #[test]
    fn netflix_light_levels() {
        assert!(validate_for_platform(&hdr10(), "Netflix").meets_requirements);

        for cll in [0, 4001] {
            let mut md = hdr10();
            md.content_light.max_cll = cll;
            let r = validate_for_platform(&md, "Netflix");
            assert_eq!(r.failed, ["Invalid content light levels"], "cll {cll}");
        }

        let r = validate_for_platform(&with_standard(HdrStandard::Hlg), "Netflix");
        assert!(r.failed.contains(&"Unsupported HDR format".to_string()));
    }

    #[test]
    fn sdr_skips_format_rules() {
        let r = validate_for_platform(&HdrMetadata::sdr(), "Apple TV+");
        assert!(r.meets_requirements);
        assert!(r.met.is_empty());
    }

    #[test]
    fn apple_prefers_dolby_vision() {
        let r = validate_for_platform(&hdr10(), "apple tv+");
        assert!(r.meets_requirements);
        assert_eq!(r.recommendations, ["Dolby Vision preferred for optimal quality"]);

        let r = validate_for_platform(&with_standard(HdrStandard::DolbyVision), "Apple TV");
        assert_eq!(r.met, ["Dolby Vision supported"]);
    }

    #[test]
    fn bbc_wants_hlg() {
        let r = validate_for_platform(&hdr10(), "BBC iPlayer");
        assert_eq!(r.failed, ["Unsupported HDR format for BBC iPlayer"]);
    }

    #[test]
    fn unknown_platform() {
        let r = validate_for_platform(&hdr10(), "Quibi");
        assert!(!r.meets_requirements);
        assert_eq!(r.failed, [UNKNOWN_PLATFORM]);
        assert_eq!(
            r.recommendations,
            ["Check platform-specific HDR requirements", REVIEW_RECOMMENDATION]
        );
    }

    #[test]
    fn yaml_catalog() {
        let yaml = r#"
platforms:
  - name: ExampleTV
    aliases: [example]
    formats:
      - standard: Hdr10
        met: HDR10 ok
    light_level:
      max_cll: 1000
      met: levels ok
      failure: levels bad
      recommendation: lower MaxCLL
"#;
        let catalog = PlatformCatalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.len(), 1);
        let r = catalog.validate(&hdr10(), "EXAMPLE");
        assert!(r.meets_requirements);
        assert_eq!(r.met, ["HDR10 ok", "levels ok"]);

        let r = catalog.validate(&with_standard(HdrStandard::Hlg), "exampletv");
        assert_eq!(r.failed, ["Unsupported HDR format for ExampleTV"]);
    }

    #[test]
    fn duplicate_names_rejected() {
        let yaml = "platforms:\n  - name: A\n  - name: B\n    aliases: [a]\n";
        let err = PlatformCatalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, HdrError::DuplicatePlatform { ref name } if name == "a"));

        let err = PlatformCatalog::from_yaml_str("platforms:\n  - name: ' '\n").unwrap_err();
        assert!(matches!(err, HdrError::UnnamedPlatform));
    }

    #[test]
    fn builtin_round_trips_through_yaml() {
        let builtin = PlatformCatalog::builtin();
        let text = builtin.to_yaml_string().unwrap();
        assert_eq!(PlatformCatalog::from_yaml_str(&text).unwrap(), builtin);
        assert_eq!(
            builtin.names().collect::<Vec<_>>(),
            ["YouTube", "Netflix", "Apple TV+", "BBC iPlayer"]
        );
    }

    #[test]
    fn missing_file() {
        let err = PlatformCatalog::from_file("/nonexistent/platforms.yaml").unwrap_err();
        assert!(matches!(err, HdrError::CatalogNotFound { .. }));
    }
}
