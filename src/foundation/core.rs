use crate::foundation::error::{MaskError, MaskResult};

pub use kurbo::{Point, Rect, Vec2};

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Build a validated size; both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> MaskResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Reject zero-sized canvases.
    pub fn validate(self) -> MaskResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MaskError::invalid_argument(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Total number of pixels.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// True when `p` lies on the canvas, edges included.
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= f64::from(self.width) && p.y <= f64::from(self.height)
    }

    /// Region left after keeping `gap` pixels clear on every side.
    pub fn inset(self, gap: u32) -> MaskResult<GapBox> {
        let doubled = u64::from(gap) * 2;
        if doubled > u64::from(self.width) || doubled > u64::from(self.height) {
            return Err(MaskError::invalid_argument(format!(
                "boarder gap {gap} leaves no room on a {}x{} canvas",
                self.width, self.height
            )));
        }
        let gap = f64::from(gap);
        Ok(GapBox {
            area: Rect::new(
                gap,
                gap,
                f64::from(self.width) - gap,
                f64::from(self.height) - gap,
            ),
        })
    }
}

/// Closed rectangle every control point is clamped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapBox {
    area: Rect,
}

impl GapBox {
    /// Nearest point inside the box.
    pub fn clamp(self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.area.x0, self.area.x1),
            p.y.clamp(self.area.y0, self.area.y1),
        )
    }

    /// True when `p` lies inside the box, edges included.
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.area.x0 && p.x <= self.area.x1 && p.y >= self.area.y0 && p.y <= self.area.y1
    }
}

/// Half-open integer range `[low, high)` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct CountRange {
    /// Inclusive lower bound.
    pub low: u32,
    /// Exclusive upper bound.
    pub high: u32,
}

impl CountRange {
    /// Range `low..high`; call [`CountRange::validate`] before sampling.
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Reject empty or inverted ranges, naming `field` in the error.
    pub fn validate(self, field: &str) -> MaskResult<()> {
        if self.low >= self.high {
            return Err(MaskError::invalid_argument(format!(
                "{field} must satisfy low < high, got ({}, {})",
                self.low, self.high
            )));
        }
        Ok(())
    }

    /// Uniform draw from `low..high`.
    pub fn sample<R: rand::Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.gen_range(self.low..self.high)
    }
}

impl From<(u32, u32)> for CountRange {
    fn from((low, high): (u32, u32)) -> Self {
        Self { low, high }
    }
}

impl From<CountRange> for (u32, u32) {
    fn from(r: CountRange) -> Self {
        (r.low, r.high)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
