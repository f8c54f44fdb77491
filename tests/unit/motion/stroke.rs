use rand::{SeedableRng, rngs::StdRng};

use super::*;

fn shape() -> ShapeParams {
    ShapeParams {
        n_vertex_bound: CountRange::new(5, 20),
        max_head_speed: 15.0,
        max_head_acceleration: Acceleration::new(15.0, 3.0),
        boarder_gap: 20,
        max_init_speed: 10.0,
    }
}

fn motion() -> MotionParams {
    MotionParams {
        n_move_point_ratio: 0.5,
        max_point_move: 10,
        max_line_acceleration: Acceleration::new(5.0, 0.5),
        boarder_gap: 20,
        max_init_speed: 10.0,
    }
}

fn canvas() -> CanvasSize {
    CanvasSize::new(424, 240).unwrap()
}

#[test]
fn created_stroke_has_sampled_vertex_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let params = ShapeParams {
        n_vertex_bound: CountRange::new(3, 4),
        ..shape()
    };
    for _ in 0..20 {
        let path = create_stroke(&mut rng, canvas(), &params).unwrap();
        assert_eq!(path.points.len(), 4);
        assert!(path.velocity.speed >= 0.0);
    }
}

#[test]
fn vertices_after_start_respect_border_gap() {
    let mut rng = StdRng::seed_from_u64(2);
    let bounds = canvas().inset(20).unwrap();
    for _ in 0..50 {
        let path = create_stroke(&mut rng, canvas(), &shape()).unwrap();
        assert!(canvas().contains(path.points[0]));
        for p in &path.points[1..] {
            assert!(bounds.contains(*p), "{p:?} outside gap box");
        }
    }
}

#[test]
fn consecutive_vertices_are_at_most_one_head_step_apart() {
    let mut rng = StdRng::seed_from_u64(3);
    let params = ShapeParams {
        boarder_gap: 0,
        ..shape()
    };
    let path = create_stroke(&mut rng, canvas(), &params).unwrap();
    for w in path.points.windows(2) {
        assert!(w[0].distance(w[1]) <= params.max_head_speed + 1e-9);
    }
}

#[test]
fn oversized_gap_is_rejected_before_sampling() {
    let mut rng = StdRng::seed_from_u64(4);
    let params = ShapeParams {
        boarder_gap: 200,
        ..shape()
    };
    let err = create_stroke(&mut rng, canvas(), &params).unwrap_err();
    assert!(matches!(err, MaskError::InvalidArgument(_)));
}

#[test]
fn empty_vertex_range_is_rejected() {
    let mut rng = StdRng::seed_from_u64(4);
    let params = ShapeParams {
        n_vertex_bound: CountRange::new(7, 7),
        ..shape()
    };
    assert!(create_stroke(&mut rng, canvas(), &params).is_err());
}

#[test]
fn advance_keeps_count_and_gap_box() {
    let mut rng = StdRng::seed_from_u64(5);
    let bounds = canvas().inset(20).unwrap();
    let mut path = create_stroke(&mut rng, canvas(), &shape()).unwrap();
    let n = path.points.len();
    for _ in 0..100 {
        advance_stroke(&mut rng, &mut path, canvas(), &motion()).unwrap();
        assert_eq!(path.points.len(), n);
        assert!(path.points.iter().all(|p| bounds.contains(*p)));
        assert!(path.velocity.speed.is_finite());
    }
}

#[test]
fn stationary_stroke_without_jitter_stays_put() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut path = StrokePath {
        points: vec![Point::new(50.0, 50.0), Point::new(60.0, 70.0)],
        velocity: Velocity::new(0.0, 0.0),
    };
    let params = MotionParams {
        n_move_point_ratio: 0.0,
        max_line_acceleration: Acceleration::new(0.0, 0.0),
        ..motion()
    };
    let escaped = advance_stroke(&mut rng, &mut path, canvas(), &params).unwrap();
    assert!(!escaped);
    assert_eq!(
        path.points,
        vec![Point::new(50.0, 50.0), Point::new(60.0, 70.0)]
    );
    assert_eq!(path.velocity, Velocity::new(0.0, 0.0));
}

#[test]
fn whole_line_translation_uses_cos_for_x() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut path = StrokePath {
        points: vec![Point::new(100.0, 100.0), Point::new(120.0, 110.0)],
        velocity: Velocity::new(5.5, 0.0),
    };
    let params = MotionParams {
        n_move_point_ratio: 0.0,
        max_line_acceleration: Acceleration::new(0.0, 0.0),
        ..motion()
    };
    advance_stroke(&mut rng, &mut path, canvas(), &params).unwrap();
    assert_eq!(
        path.points,
        vec![Point::new(105.0, 100.0), Point::new(125.0, 110.0)]
    );
}

#[test]
fn escaping_point_redraws_velocity() {
    let mut rng = StdRng::seed_from_u64(8);
    // Every point is pushed off the right edge by the whole-line translation.
    let mut path = StrokePath {
        points: vec![Point::new(400.0, 100.0), Point::new(404.0, 120.0)],
        velocity: Velocity::new(100.0, 0.0),
    };
    let params = MotionParams {
        n_move_point_ratio: 1.0,
        max_point_move: 1,
        max_line_acceleration: Acceleration::new(0.0, 0.0),
        max_init_speed: 0.0,
        ..motion()
    };
    let escaped = advance_stroke(&mut rng, &mut path, canvas(), &params).unwrap();
    assert!(escaped);
    assert_eq!(path.velocity.speed, 0.0);
    assert!(path.points.iter().all(|p| p.x == 404.0));
}

#[test]
fn unselected_points_are_not_escape_candidates() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut path = StrokePath {
        points: vec![Point::new(400.0, 100.0), Point::new(404.0, 120.0)],
        velocity: Velocity::new(100.0, 0.0),
    };
    let params = MotionParams {
        n_move_point_ratio: 0.0,
        max_line_acceleration: Acceleration::new(0.0, 0.0),
        ..motion()
    };
    let escaped = advance_stroke(&mut rng, &mut path, canvas(), &params).unwrap();
    assert!(!escaped);
    assert_eq!(path.velocity, Velocity::new(100.0, 0.0));
    assert!(path.points.iter().all(|p| p.x == 404.0));
}

#[test]
fn out_of_range_ratio_is_rejected() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut path = create_stroke(&mut rng, canvas(), &shape()).unwrap();
    let params = MotionParams {
        n_move_point_ratio: 1.5,
        ..motion()
    };
    assert!(advance_stroke(&mut rng, &mut path, canvas(), &params).is_err());
}
