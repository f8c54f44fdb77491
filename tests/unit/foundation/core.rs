use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(CanvasSize::new(0, 10).is_err());
    assert!(CanvasSize::new(10, 0).is_err());
    assert_eq!(CanvasSize::new(4, 3).unwrap().pixel_count(), 12);
}

#[test]
fn canvas_contains_includes_edges() {
    let c = CanvasSize::new(10, 20).unwrap();
    assert!(c.contains(Point::new(0.0, 0.0)));
    assert!(c.contains(Point::new(10.0, 20.0)));
    assert!(!c.contains(Point::new(10.5, 3.0)));
    assert!(!c.contains(Point::new(3.0, -0.1)));
}

#[test]
fn inset_clamps_into_gap_box() {
    let c = CanvasSize::new(50, 30).unwrap();
    let gap = c.inset(5).unwrap();
    assert_eq!(gap.clamp(Point::new(-3.0, 100.0)), Point::new(5.0, 25.0));
    assert_eq!(gap.clamp(Point::new(12.5, 7.0)), Point::new(12.5, 7.0));
    assert!(gap.contains(Point::new(45.0, 25.0)));
    assert!(!gap.contains(Point::new(4.9, 10.0)));
}

#[test]
fn inset_rejects_gap_wider_than_half_canvas() {
    let c = CanvasSize::new(50, 30).unwrap();
    assert!(c.inset(15).is_ok());
    assert!(c.inset(16).is_err());
}

#[test]
fn count_range_is_half_open() {
    let r = CountRange::new(3, 4);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..32 {
        assert_eq!(r.sample(&mut rng), 3);
    }
    assert!(CountRange::new(4, 4).validate("x").is_err());
    assert!(CountRange::new(5, 4).validate("x").is_err());
}

#[test]
fn count_range_serializes_as_pair() {
    let r: CountRange = serde_json::from_str("[5, 20]").unwrap();
    assert_eq!(r, CountRange::new(5, 20));
    assert_eq!(serde_json::to_string(&r).unwrap(), "[5,20]");
}
