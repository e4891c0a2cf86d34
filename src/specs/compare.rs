//! Tolerance-aware comparison of design specs against live specs.

use super::{
    DesignSpecs, FontDescriptor, LiveSpecs, SpecDiffResult, SpecItem, COLOR_TOLERANCE,
    FONT_SIZE_TOLERANCE, SPACING_TOLERANCE,
};
use crate::color::Rgb;
use crate::Result;
use log::debug;

/// Find design colors, fonts and spacing values with no acceptable live counterpart.
///
/// Fails with `InvalidColorFormat` if a design color is not `#RRGGBB`, or if a
/// live color needed for a distance check is not.
pub fn compare_specs(design: &DesignSpecs, live: &LiveSpecs) -> Result<SpecDiffResult> {
    let color_drift = find_color_drift(&design.colors, &live.colors)?;
    let font_drift = find_font_drift(&design.fonts, &live.fonts);
    let spacing_drift = find_spacing_drift(&design.spacing, &live.spacing);

    let has_drift = !color_drift.is_empty() || !font_drift.is_empty() || !spacing_drift.is_empty();
    debug!(
        "Spec drift: {} colors, {} fonts, {} spacing values",
        color_drift.len(),
        font_drift.len(),
        spacing_drift.len()
    );

    Ok(SpecDiffResult {
        color_drift,
        font_drift,
        spacing_drift,
        has_drift,
    })
}

fn find_color_drift(design: &[SpecItem<String>], live: &[String]) -> Result<Vec<SpecItem<String>>> {
    let mut drift = Vec::new();
    for item in design {
        let rgb = Rgb::from_hex(&item.value)?;
        let mut matched = false;
        for hex in live {
            if hex.eq_ignore_ascii_case(&item.value) || rgb.distance(Rgb::from_hex(hex)?) <= COLOR_TOLERANCE {
                matched = true;
                break;
            }
        }
        if !matched {
            drift.push(item.clone());
        }
    }
    Ok(drift)
}

fn font_matches(design: &FontDescriptor, live: &FontDescriptor) -> bool {
    design.family.to_lowercase() == live.family.to_lowercase()
        && (design.size - live.size).abs() < FONT_SIZE_TOLERANCE
        && design.weight == live.weight
}

fn find_font_drift(design: &[SpecItem<FontDescriptor>], live: &[FontDescriptor]) -> Vec<SpecItem<FontDescriptor>> {
    design
        .iter()
        .filter(|item| !live.iter().any(|lf| font_matches(&item.value, lf)))
        .cloned()
        .collect()
}

fn find_spacing_drift(design: &[SpecItem<f64>], live: &[f64]) -> Vec<SpecItem<f64>> {
    design
        .iter()
        .filter(|item| {
            !live
                .iter()
                .any(|&ls| ls == item.value || (ls - item.value).abs() <= SPACING_TOLERANCE)
        })
        .cloned()
        .collect()
}
