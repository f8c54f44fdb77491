use super::*;
use crate::motion::{stroke::StrokePath, velocity::Velocity};

fn polyline() -> Vec<Point> {
    vec![
        Point::new(10.0, 10.0),
        Point::new(30.5, 14.2),
        Point::new(25.0, 35.7),
    ]
}

fn size() -> CanvasSize {
    CanvasSize::new(50, 50).unwrap()
}

#[test]
fn joint_radius_follows_half_width_minus_one() {
    assert_eq!(joint_radius(10), Some(4));
    assert_eq!(joint_radius(3), Some(0));
    assert_eq!(joint_radius(2), Some(0));
    assert_eq!(joint_radius(1), None);
    assert_eq!(joint_radius(0), None);
}

#[test]
fn drawing_is_deterministic() {
    let mut a = Mask::new(size());
    let mut b = Mask::new(size());
    draw_stroke(&mut a, &polyline(), 10, FILLED);
    draw_stroke(&mut b, &polyline(), 10, FILLED);
    assert_eq!(a, b);
    assert!(!a.is_blank());
}

#[test]
fn every_control_point_is_covered() {
    let mut m = Mask::new(size());
    let pts = polyline();
    draw_stroke(&mut m, &pts, 6, FILLED);
    for p in &pts {
        assert_eq!(m.get(p.x.round() as u32, p.y.round() as u32), FILLED);
    }
}

#[test]
fn thin_brush_marks_every_control_point() {
    let mut m = Mask::new(size());
    let pts = [
        Point::new(5.0, 5.0),
        Point::new(44.0, 18.0),
        Point::new(44.0, 40.0),
    ];
    draw_stroke(&mut m, &pts, 1, FILLED);
    for p in &pts {
        assert_eq!(m.get(p.x as u32, p.y as u32), FILLED, "{p:?}");
    }
}

#[test]
fn thin_diagonal_leaves_no_column_empty() {
    let mut m = Mask::new(size());
    draw_stroke(&mut m, &[Point::new(5.0, 5.0), Point::new(44.0, 18.0)], 1, FILLED);
    for x in 5..=44 {
        assert!((0..50).any(|y| m.get(x, y) == FILLED), "column {x} is empty");
    }
}

#[test]
fn thin_brush_marks_fractional_points_at_nearest_pixel() {
    let mut m = Mask::new(size());
    draw_stroke(&mut m, &[Point::new(30.5, 14.2)], 1, FILLED);
    assert_eq!(m.filled_count(), 1);
    assert_eq!(m.get(31, 14), FILLED);
}

#[test]
fn zero_width_brush_draws_nothing() {
    let mut m = Mask::new(size());
    draw_stroke(&mut m, &polyline(), 0, FILLED);
    assert!(m.is_blank());
}

#[test]
fn single_point_stroke_is_a_disc() {
    let mut m = Mask::new(size());
    draw_stroke(&mut m, &[Point::new(20.0, 20.0)], 10, FILLED);
    assert_eq!(m.get(20, 20), FILLED);
    assert_eq!(m.get(24, 20), FILLED);
    assert_eq!(m.get(26, 20), 0);
}

#[test]
fn zero_fill_erases() {
    let mut m = Mask::new(size());
    draw_stroke(&mut m, &polyline(), 8, FILLED);
    draw_stroke(&mut m, &polyline(), 8, 0);
    assert!(m.is_blank());
}

#[test]
fn stroke_order_does_not_change_union() {
    let a = Stroke {
        path: StrokePath {
            points: polyline(),
            velocity: Velocity::default(),
        },
        brush_width: 7,
    };
    let b = Stroke {
        path: StrokePath {
            points: vec![Point::new(5.0, 40.0), Point::new(45.0, 8.0)],
            velocity: Velocity::default(),
        },
        brush_width: 12,
    };
    let ab = rasterize_strokes(size(), &[a.clone(), b.clone()]);
    let ba = rasterize_strokes(size(), &[b, a]);
    assert_eq!(ab, ba);
}
