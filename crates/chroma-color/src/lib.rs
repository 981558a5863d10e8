//! # chroma-color
//!
//! Color space conversion on top of the registry matrices.
//!
//! - [`ColorConverter`] - batch conversion with gamut test, mapping and
//!   statistics
//! - [`map_color`] / [`GamutMappingMethod`] - bringing colors into the unit
//!   cube
//! - [`tone_map_to_sdr`], [`expand_to_hdr`], [`ToneMapOperator`] - dynamic
//!   range curves
//! - [`delta_e`], [`validate_accuracy`], [`validate_workflow`] - accuracy
//!   checks
//! - [`ColorManagement`] - conversion into a display's native space
//! - [`recommend`] - working space advice per delivery target
//!
//! ```rust
//! use chroma_color::{ColorConverter, ColorConversionConfig, GamutMappingMethod};
//! use chroma_core::{ColorSpaceId, RgbColor};
//!
//! let config = ColorConversionConfig::new(ColorSpaceId::Bt2020, ColorSpaceId::Bt709)
//!     .with_method(GamutMappingMethod::SaturationPreserving);
//! let result = ColorConverter::default().convert(&[RgbColor::new(0.0, 1.0, 0.0)], &config);
//!
//! assert_eq!(result.out_of_gamut_count, 1);
//! assert!(result.colors[0].is_in_unit_range());
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - large batches run on the rayon pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod accuracy;
mod convert;
mod display;
mod error;
mod gamut;
mod tonemap;
mod workflow;

pub use accuracy::{
    compare, delta_e, gamut_utilization, validate_accuracy, validate_workflow, AccuracyReport,
    HIGH_DELTA_E, HIGH_FAILING_RATIO, MIN_FIDELITY,
};
pub use convert::{
    ColorConversionConfig, ColorConverter, ConversionResult, HIGH_OUT_OF_GAMUT_WARNING,
    OUT_OF_GAMUT_WARNING_RATIO, PARALLEL_THRESHOLD,
};
pub use display::{
    bt2020_to_bt709, bt709_to_bt2020, dci_p3_to_display_p3, srgb_to_bt709, ColorManagement,
    DisplayConfig,
};
pub use error::{ColorError, ColorResult};
pub use gamut::{
    gamut_boundary, gamut_coverage, is_in_gamut, map_color, GamutBoundary, GamutMappingMethod,
    DEFAULT_COMPRESSION,
};
pub use tonemap::{expand_to_hdr, tone_map_to_sdr, ToneMapOperator};
pub use workflow::{recommend, WorkflowRecommendation};

pub use chroma_math::AdaptationMethod;
