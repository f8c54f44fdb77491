use crate::{masks::sequence::MaskSequence, raster::canvas::Mask};

/// Fraction of zero pixels in `mask`.
///
/// Zero marks masked (invalid) pixels and non-zero marks valid ones, so a
/// blank canvas has ratio `1.0` and a fully filled one `0.0`.
pub fn masked_ratio(mask: &Mask) -> f64 {
    let total = mask.size().pixel_count();
    if total == 0 {
        return 0.0;
    }
    (total - mask.filled_count()) as f64 / total as f64
}

impl MaskSequence {
    /// [`masked_ratio`] of every frame, in order.
    pub fn masked_ratios(&self) -> Vec<f64> {
        self.iter().map(masked_ratio).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/masks/ratio.rs"]
mod tests;
