use std::f64::consts::TAU;

use rand::Rng;

use crate::{
    foundation::core::{CanvasSize, CountRange, Point, Vec2},
    foundation::error::{MaskError, MaskResult},
    motion::velocity::{
        Acceleration, Distribution, Velocity, check_magnitude, perturb_velocity, sample_velocity,
    },
};

/// Parameters shaping a stroke's initial polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParams {
    /// Half-open range for the number of vertices appended after the start point.
    pub n_vertex_bound: CountRange,
    /// Upper clamp for the head speed while laying out vertices.
    pub max_head_speed: f64,
    /// Uniform acceleration applied to the head before each vertex.
    pub max_head_acceleration: Acceleration,
    /// Margin kept clear between vertices and the canvas edge.
    pub boarder_gap: u32,
    /// Scale of the gaussian whole-line velocity.
    pub max_init_speed: f64,
}

impl ShapeParams {
    /// Reject ranges and magnitudes that cannot drive generation.
    pub fn validate(&self) -> MaskResult<()> {
        self.n_vertex_bound.validate("n_vertex_bound")?;
        check_magnitude("max_head_speed", self.max_head_speed)?;
        self.max_head_acceleration.validate("max_head_acceleration")?;
        check_magnitude("max_init_speed", self.max_init_speed)
    }
}

/// Parameters driving a stroke from one frame to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Fraction of control points jittered per frame, in `[0, 1]`.
    pub n_move_point_ratio: f64,
    /// Jitter magnitude; offsets are drawn from `[-max_point_move, max_point_move)`.
    pub max_point_move: u32,
    /// Gaussian acceleration applied to the whole-line velocity.
    pub max_line_acceleration: Acceleration,
    /// Margin kept clear between control points and the canvas edge.
    pub boarder_gap: u32,
    /// Scale of the gaussian velocity drawn after an escape.
    pub max_init_speed: f64,
}

impl MotionParams {
    /// Reject a move ratio outside `[0, 1]` and bad magnitudes.
    pub fn validate(&self) -> MaskResult<()> {
        let r = self.n_move_point_ratio;
        if !r.is_finite() || !(0.0..=1.0).contains(&r) {
            return Err(MaskError::invalid_argument(format!(
                "n_move_point_ratio must be within [0, 1], got {r}"
            )));
        }
        self.max_line_acceleration.validate("max_line_acceleration")?;
        check_magnitude("max_init_speed", self.max_init_speed)
    }
}

/// Control-point polyline plus the velocity translating it as a whole.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokePath {
    /// Vertices in canvas coordinates; the count never changes after creation.
    pub points: Vec<Point>,
    /// Whole-line velocity.
    pub velocity: Velocity,
}

/// One moving brush path tracked across a mask sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Control points and whole-line velocity.
    pub path: StrokePath,
    /// Brush width in pixels, fixed at creation.
    pub brush_width: u32,
}

/// Lay out a new stroke polyline with a correlated random walk.
///
/// The start point is drawn over the full canvas; every following vertex is
/// clamped into the border-gap box. The head velocity used here is discarded;
/// the returned path carries an independent gaussian whole-line velocity.
pub fn create_stroke<R: Rng + ?Sized>(
    rng: &mut R,
    canvas: CanvasSize,
    params: &ShapeParams,
) -> MaskResult<StrokePath> {
    canvas.validate()?;
    params.validate()?;
    let bounds = canvas.inset(params.boarder_gap)?;

    let mut head = Point::new(
        f64::from(rng.gen_range(0..canvas.width)),
        f64::from(rng.gen_range(0..canvas.height)),
    );
    let n_vertex = params.n_vertex_bound.sample(rng);

    let angle = rng.gen_range(0.0..TAU);
    let speed = rng.gen_range(0.0..=params.max_head_speed);
    let mut head_velocity = Velocity::new(speed, angle);

    let mut points = Vec::with_capacity(n_vertex as usize + 1);
    points.push(head);
    for _ in 0..n_vertex {
        head_velocity = perturb_velocity(
            rng,
            head_velocity,
            params.max_head_acceleration,
            Distribution::Uniform,
        )?;
        head_velocity.speed = head_velocity.speed.clamp(0.0, params.max_head_speed);
        head = bounds.clamp(head + head_velocity.head_step());
        points.push(head);
    }

    let velocity = sample_velocity(rng, params.max_init_speed, Distribution::Gaussian)?;
    Ok(StrokePath { points, velocity })
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, max_move: u32) -> f64 {
    if max_move == 0 {
        return 0.0;
    }
    let m = i64::from(max_move);
    rng.gen_range(-m..m) as f64
}

/// Move a stroke one frame forward. Returns `true` when a jittered point
/// escaped the canvas and the whole-line velocity was redrawn.
///
/// Every control point ends up inside the border-gap box.
pub fn advance_stroke<R: Rng + ?Sized>(
    rng: &mut R,
    path: &mut StrokePath,
    canvas: CanvasSize,
    params: &MotionParams,
) -> MaskResult<bool> {
    canvas.validate()?;
    params.validate()?;
    let bounds = canvas.inset(params.boarder_gap)?;

    let shift = path.velocity.line_translation();
    for p in &mut path.points {
        *p += shift;
    }
    path.velocity = perturb_velocity(
        rng,
        path.velocity,
        params.max_line_acceleration,
        Distribution::Gaussian,
    )?;

    let n = path.points.len();
    let n_move = ((n as f64) * params.n_move_point_ratio).floor() as usize;
    let chosen = rand::seq::index::sample(rng, n, n_move.min(n));

    let mut escaped = false;
    for i in chosen.into_iter() {
        let offset = Vec2::new(
            jitter(rng, params.max_point_move),
            jitter(rng, params.max_point_move),
        );
        let moved = path.points[i] + offset;
        escaped |= !canvas.contains(moved);
        path.points[i] = bounds.clamp(moved);
    }
    for p in &mut path.points {
        *p = bounds.clamp(*p);
    }

    if escaped {
        path.velocity = sample_velocity(rng, params.max_init_speed, Distribution::Gaussian)?;
        tracing::trace!(speed = path.velocity.speed, "stroke escaped, velocity redrawn");
    }
    Ok(escaped)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/stroke.rs"]
mod tests;
