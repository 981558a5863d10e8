//! Working and delivery space advice by target platform.

use crate::gamut::GamutMappingMethod;
use chroma_core::ColorSpaceId;

/// Suggested color pipeline for a delivery target.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowRecommendation {
    /// Space to grade and composite in.
    pub working_space: ColorSpaceId,
    /// Space of the delivered master.
    pub output_space: ColorSpaceId,
    /// Gamut mapping for the working to output step.
    pub mapping_method: GamutMappingMethod,
    /// Whether the delivery needs an HDR to SDR pass.
    pub requires_tone_mapping: bool,
    /// Why this pipeline was chosen.
    pub reasoning: String,
}

/// Picks a pipeline from a free-form delivery target.
///
/// Matching is a lowercase substring test: "netflix" or "streaming" select
/// a BT.2020 working space, "cinema" or "theatrical" select DCI-P3 and
/// everything else is BT.709 broadcast. The source space does not change
/// the outcome.
///
/// ```rust
/// use chroma_color::{recommend, GamutMappingMethod};
/// use chroma_core::ColorSpaceId;
///
/// let rec = recommend(ColorSpaceId::Bt709, "Theatrical DCP", false);
/// assert_eq!(rec.working_space, ColorSpaceId::DciP3);
/// assert_eq!(rec.mapping_method, GamutMappingMethod::RelativeColorimetric);
/// ```
pub fn recommend(
    _source: ColorSpaceId,
    platform: &str,
    hdr_workflow: bool,
) -> WorkflowRecommendation {
    let target = platform.to_lowercase();
    if target.contains("netflix") || target.contains("streaming") {
        WorkflowRecommendation {
            working_space: ColorSpaceId::Bt2020,
            output_space: if hdr_workflow {
                ColorSpaceId::Bt2020
            } else {
                ColorSpaceId::Bt709
            },
            mapping_method: GamutMappingMethod::Perceptual,
            requires_tone_mapping: hdr_workflow,
            reasoning: "Streaming platforms prefer BT.2020 working space for future-proofing"
                .into(),
        }
    } else if target.contains("cinema") || target.contains("theatrical") {
        WorkflowRecommendation {
            working_space: ColorSpaceId::DciP3,
            output_space: ColorSpaceId::DciP3,
            mapping_method: GamutMappingMethod::RelativeColorimetric,
            requires_tone_mapping: false,
            reasoning: "Cinema delivery requires DCI-P3 color space".into(),
        }
    } else {
        WorkflowRecommendation {
            working_space: ColorSpaceId::Bt709,
            output_space: ColorSpaceId::Bt709,
            mapping_method: GamutMappingMethod::Perceptual,
            requires_tone_mapping: false,
            reasoning: "Standard broadcast delivery using BT.709".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streaming_follows_hdr_flag() {
        let sdr = recommend(ColorSpaceId::Bt709, "Netflix", false);
        assert_eq!(sdr.working_space, ColorSpaceId::Bt2020);
        assert_eq!(sdr.output_space, ColorSpaceId::Bt709);
        assert!(!sdr.requires_tone_mapping);

        let hdr = recommend(ColorSpaceId::Bt709, "generic streaming", true);
        assert_eq!(hdr.output_space, ColorSpaceId::Bt2020);
        assert!(hdr.requires_tone_mapping);
        assert!(hdr.reasoning.contains("future-proofing"));
    }

    #[test]
    fn unknown_target_is_broadcast() {
        let rec = recommend(ColorSpaceId::DciP3, "local tv", true);
        assert_eq!(rec.working_space, ColorSpaceId::Bt709);
        assert_eq!(rec.mapping_method, GamutMappingMethod::Perceptual);
        assert_eq!(rec.reasoning, "Standard broadcast delivery using BT.709");
    }
}
