//! Consistency checks for HDR metadata.

use crate::metadata::HdrMetadata;
use crate::signal::{HdrStandard, TransferCharacteristic};
use tracing::debug;

/// Highest mastering luminance accepted, in nits.
pub const MAX_MASTERING_NITS: f32 = 10_000.0;

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// False when any fatal check failed.
    pub valid: bool,
    /// One entry per failed or advisory check.
    pub warnings: Vec<String>,
}

/// Checks a record for internal consistency.
///
/// SDR records are always valid. For HDR standards:
///
/// - HDR10 and HDR10+ must declare PQ, HLG must declare HLG
/// - HDR10 without BT.2020 primaries only warns
/// - mastering luminance must satisfy `0 < min < max <= 10000`
/// - mastering chromaticities must lie in `[0, 1]`
/// - standards with dynamic metadata must carry a payload
///
/// Failed checks add warnings and clear `valid`; the record itself is not
/// touched.
pub fn validate(md: &HdrMetadata) -> ValidationReport {
    let mut report = ValidationReport {
        valid: true,
        warnings: Vec::new(),
    };
    if md.standard == HdrStandard::None {
        return report;
    }

    let mut fail = |msg: &str| {
        report.valid = false;
        report.warnings.push(msg.to_string());
    };

    match md.standard {
        HdrStandard::Hdr10 | HdrStandard::Hdr10Plus => {
            if md.transfer != TransferCharacteristic::Pq {
                fail("HDR10 should use PQ transfer function");
            }
        }
        HdrStandard::Hlg => {
            if md.transfer != TransferCharacteristic::Hlg {
                fail("HLG content should use HLG transfer function");
            }
        }
        _ => {}
    }

    let m = &md.mastering;
    if !(m.min_luminance > 0.0
        && m.min_luminance < m.max_luminance
        && m.max_luminance <= MAX_MASTERING_NITS)
    {
        fail("Invalid mastering display luminance levels");
    }

    if !(m.primaries.is_normalized() && m.white_point.is_normalized()) {
        fail("Invalid color primaries coordinates");
    }

    if md.standard.requires_dynamic_metadata() && !md.dynamic.has_payload() {
        fail("Missing dynamic metadata payload");
    }

    if matches!(md.standard, HdrStandard::Hdr10 | HdrStandard::Hdr10Plus)
        && !md.primaries.is_bt2020()
    {
        report
            .warnings
            .push("HDR10 should use BT.2020 color primaries".to_string());
    }

    if !report.valid {
        debug!(standard = %md.standard, warnings = ?report.warnings, "metadata failed validation");
    }
    report
}
