use image::{GrayImage, Luma};
use kurbo::{Circle, Shape};
use ndarray::Array2;

use crate::foundation::core::{CanvasSize, Point, Rect};

/// Value written for filled pixels.
pub const FILLED: u8 = 255;

const EDGE_EPS: f64 = 1e-9;

/// Drawing backend for binary canvases.
///
/// Coordinates are in pixels with pixel centres on integer positions. Any
/// non-zero `fill` sets pixels to [`FILLED`], zero clears them.
pub trait MaskCanvas {
    /// Canvas dimensions.
    fn size(&self) -> CanvasSize;

    /// Thick segment from `p0` to `p1` with flat ends. Pixel centres on the
    /// outline, end edges included, are painted.
    fn draw_line(&mut self, p0: Point, p1: Point, width: u32, fill: u8);

    /// Filled disc covering the box `center ± radius`.
    fn draw_ellipse(&mut self, center: Point, radius: f64, fill: u8);

    /// Paint the single pixel nearest to `p`; off-canvas points are ignored.
    fn draw_point(&mut self, p: Point, fill: u8);
}

/// Single-channel binary canvas holding `0` or [`FILLED`] per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    image: GrayImage,
}

impl Mask {
    /// All-zero canvas.
    pub fn new(size: CanvasSize) -> Self {
        Self {
            image: GrayImage::new(size.width, size.height),
        }
    }

    /// Wrap a grayscale image, mapping every non-zero pixel to [`FILLED`].
    pub fn from_image(mut image: GrayImage) -> Self {
        for px in image.pixels_mut() {
            if px.0[0] != 0 {
                px.0[0] = FILLED;
            }
        }
        Self { image }
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.image.width(),
            height: self.image.height(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel value at `(x, y)`, `0` or [`FILLED`]. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[0]
    }

    /// Set `(x, y)` to [`FILLED`] for non-zero `fill`, else clear it. Panics when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, fill: u8) {
        let v = if fill == 0 { 0 } else { FILLED };
        self.image.put_pixel(x, y, Luma([v]));
    }

    /// Number of filled pixels.
    pub fn filled_count(&self) -> u64 {
        self.image.pixels().filter(|p| p.0[0] != 0).count() as u64
    }

    /// True when no pixel is filled.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p.0[0] == 0)
    }

    /// Borrow the backing image.
    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    /// Unwrap the backing image.
    pub fn into_image(self) -> GrayImage {
        self.image
    }

    /// Row-major `height x width` array of `{0, 255}`.
    pub fn to_array(&self) -> Array2<u8> {
        let (w, h) = self.image.dimensions();
        Array2::from_shape_fn((h as usize, w as usize), |(y, x)| {
            self.image.get_pixel(x as u32, y as u32).0[0]
        })
    }

    /// Apply `fill` to every pixel centre within `bbox` for which `inside` holds.
    fn fill_region(&mut self, bbox: Rect, fill: u8, inside: impl Fn(Point) -> bool) {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return;
        }
        let x0 = bbox.x0.ceil().max(0.0);
        let y0 = bbox.y0.ceil().max(0.0);
        let x1 = bbox.x1.floor().min(f64::from(w - 1));
        let y1 = bbox.y1.floor().min(f64::from(h - 1));
        if x0 > x1 || y0 > y1 {
            return;
        }
        for y in (y0 as u32)..=(y1 as u32) {
            for x in (x0 as u32)..=(x1 as u32) {
                if inside(Point::new(f64::from(x), f64::from(y))) {
                    self.set(x, y, fill);
                }
            }
        }
    }
}

impl MaskCanvas for Mask {
    fn size(&self) -> CanvasSize {
        Mask::size(self)
    }

    fn draw_line(&mut self, p0: Point, p1: Point, width: u32, fill: u8) {
        if width == 0 {
            return;
        }
        let dir = p1 - p0;
        let len = dir.hypot();
        if len < 1e-9 {
            return;
        }
        let half = f64::from(width) / 2.0;
        let bbox = Rect::from_points(p0, p1).inflate(half, half);
        // Closed band: centres on the side or end edges are painted.
        self.fill_region(bbox, fill, |pt| {
            let v = pt - p0;
            let along = v.dot(dir) / len;
            let across = v.cross(dir).abs() / len;
            (-EDGE_EPS..=len + EDGE_EPS).contains(&along) && across <= half + EDGE_EPS
        });
    }

    fn draw_ellipse(&mut self, center: Point, radius: f64, fill: u8) {
        if !radius.is_finite() || radius < 0.0 {
            return;
        }
        // Half a pixel of slack so the outermost pixels of the box are reached.
        let disc = Circle::new(center, radius + 0.5);
        self.fill_region(disc.bounding_box(), fill, |pt| disc.contains(pt));
    }

    fn draw_point(&mut self, p: Point, fill: u8) {
        let (x, y) = (p.x.round(), p.y.round());
        if x >= 0.0 && y >= 0.0 && x < f64::from(self.width()) && y < f64::from(self.height()) {
            self.set(x as u32, y as u32, fill);
        }
    }
}

impl From<Mask> for GrayImage {
    fn from(mask: Mask) -> Self {
        mask.image
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
