// Pixel density formulas

use serde::Serialize;

/// Millimeters in one inch
pub const MM_PER_INCH: f64 = 25.4;

/// Pixels per inch along the diagonal. `None` when the diagonal is not positive.
pub fn compute_ppi(width: f64, height: f64, diagonal: f64) -> Option<f64> {
    if diagonal <= 0.0 {
        return None;
    }
    let diagonal_pixels = (width * width + height * height).sqrt();
    Some(diagonal_pixels / diagonal)
}

/// Distance between pixel centers in millimeters
pub fn compute_dot_pitch(ppi: f64) -> Option<f64> {
    if ppi <= 0.0 {
        return None;
    }
    Some(MM_PER_INCH / ppi)
}

pub fn compute_total_pixels(width: f64, height: f64) -> f64 {
    width * height
}

/// Outputs derived from one monitor's raw dimensions.
///
/// Always produced as a group so an entry can never hold a PPI without its
/// matching dot pitch or pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub ppi: f64,
    pub ppi2: f64,
    pub dot_pitch: f64,
    pub total_pixels: f64,
}

/// A raw dimension that can take part in a calculation
pub fn is_usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl DerivedMetrics {
    /// Compute every output, or `None` unless all three inputs are finite and
    /// strictly positive
    pub fn compute(width: f64, height: f64, diagonal: f64) -> Option<Self> {
        if !(is_usable(width) && is_usable(height) && is_usable(diagonal)) {
            return None;
        }

        let ppi = compute_ppi(width, height, diagonal)?;
        let dot_pitch = compute_dot_pitch(ppi)?;

        Some(Self {
            ppi,
            ppi2: ppi * ppi,
            dot_pitch,
            total_pixels: compute_total_pixels(width, height),
        })
    }
}
