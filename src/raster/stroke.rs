use crate::{
    foundation::core::{CanvasSize, Point},
    motion::stroke::Stroke,
    raster::canvas::{FILLED, Mask, MaskCanvas},
};

/// Radius of the round joint drawn at every control point, `None` for brushes
/// too thin to carry one.
pub fn joint_radius(brush_width: u32) -> Option<u32> {
    (brush_width / 2).checked_sub(1)
}

/// Render one polyline: thick segments between consecutive points, then a disc
/// at every point to round off joints and caps. Brushes too thin for a disc
/// still mark the pixel under each point.
pub fn draw_stroke<C: MaskCanvas + ?Sized>(
    canvas: &mut C,
    points: &[Point],
    brush_width: u32,
    fill: u8,
) {
    for seg in points.windows(2) {
        canvas.draw_line(seg[0], seg[1], brush_width, fill);
    }
    match joint_radius(brush_width) {
        Some(radius) => {
            for p in points {
                canvas.draw_ellipse(*p, f64::from(radius), fill);
            }
        }
        None if brush_width > 0 => {
            for p in points {
                canvas.draw_point(*p, fill);
            }
        }
        None => {}
    }
}

/// Union of all strokes on a fresh canvas.
pub fn rasterize_strokes(size: CanvasSize, strokes: &[Stroke]) -> Mask {
    let mut mask = Mask::new(size);
    for stroke in strokes {
        draw_stroke(&mut mask, &stroke.path.points, stroke.brush_width, FILLED);
    }
    mask
}

#[cfg(test)]
#[path = "../../tests/unit/raster/stroke.rs"]
mod tests;
