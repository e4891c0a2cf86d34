//! figdrift
//!
//! Detects drift between a design frame (the source of truth for colors,
//! fonts, spacing and dimensions) and the live rendered implementation of
//! that design.
//!
//! # Features
//!
//! - **Pixel comparator**: crops both captures to their common area, runs a
//!   perceptual per-pixel diff, scores the result and renders a labelled
//!   design | live | diff composite
//! - **Spec comparator**: finds design colors, fonts and spacing values with no
//!   acceptably close live counterpart, keeping track of which design nodes
//!   declared them
//! - **PNG codec** (`codec` feature, default): decode captures and encode
//!   composites
//!
//! # Example
//!
//! ```
//! use figdrift::{Bitmap, Severity};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let design = Bitmap::filled(64, 64, [255, 255, 255, 255]);
//! let live = Bitmap::filled(64, 64, [255, 255, 255, 255]);
//!
//! let result = figdrift::visual::compare(&design, &live, figdrift::DEFAULT_THRESHOLD)?;
//! assert_eq!(result.diff_percent, 0.0);
//! assert_eq!(result.severity, Severity::Low);
//! assert!(result.composite.is_some());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod bitmap;
pub mod color;
pub mod pixelmatch;
pub mod rendering;
pub mod report;
pub mod specs;
pub mod visual;

// PNG decode/encode at the crate boundary
#[cfg(feature = "codec")]
pub mod codec;

pub use bitmap::Bitmap;
pub use color::Rgb;
pub use pixelmatch::{PixelDiff, PixelMatch};
pub use report::{run_drift_check, DriftOutcome, DriftReport};
pub use specs::{
    compare_specs, DesignSpecs, FontDescriptor, LiveSpecs, NodeRef, SpecDiffResult, SpecItem,
    COLOR_TOLERANCE, FONT_SIZE_TOLERANCE, SPACING_TOLERANCE,
};
pub use visual::{
    PixelDiffResult, Severity, DEFAULT_THRESHOLD, HIGH_SEVERITY_PERCENT, MEDIUM_SEVERITY_PERCENT,
};

/// Configuration for a comparison run
///
/// Defaults match what design QA tooling usually expects: a per-pixel
/// sensitivity of 0.1 and a rendered composite.
///
/// # Examples
///
/// ```
/// let cfg = figdrift::CompareConfig::default();
/// assert_eq!(cfg.threshold, 0.1);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Per-pixel perceptual sensitivity in (0, 1); lower is stricter
    pub threshold: f64,
    /// Whether to render the design | live | diff composite
    pub render_composite: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            render_composite: true,
        }
    }
}

impl CompareConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(Error::ConfigError(format!(
                "threshold must be between 0 and 1 (exclusive), got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
