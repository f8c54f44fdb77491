use crate::{
    foundation::core::{CanvasSize, CountRange},
    foundation::error::{MaskError, MaskResult},
    motion::stroke::{MotionParams, ShapeParams},
    motion::velocity::Acceleration,
};

/// Parameters for [`crate::moving_stroke_masks`].
///
/// Missing JSON fields fall back to [`MovingStrokeConfig::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MovingStrokeConfig {
    /// Canvas width in pixels.
    pub image_width: u32,
    /// Canvas height in pixels.
    pub image_height: u32,
    /// Number of strokes per sequence.
    pub n_stroke: u32,
    /// Half-open range for extra vertices per stroke.
    pub n_vertex_bound: CountRange,
    /// Head speed clamp while laying out a stroke.
    pub max_head_speed: f64,
    /// Uniform head acceleration `(d_speed, d_angle)`.
    pub max_head_acceleration: Acceleration,
    /// Half-open range for per-stroke brush width.
    pub brush_width_bound: CountRange,
    /// Margin between control points and the canvas edge.
    pub boarder_gap: u32,
    /// Fraction of control points jittered per frame.
    pub n_move_point_ratio: f64,
    /// Per-frame control-point jitter magnitude.
    pub max_point_move: u32,
    /// Gaussian whole-line acceleration `(d_speed, d_angle)`.
    pub max_line_acceleration: Acceleration,
    /// Scale of gaussian whole-line velocity draws.
    pub max_init_speed: f64,
}

impl Default for MovingStrokeConfig {
    #[allow(clippy::approx_constant)]
    fn default() -> Self {
        Self {
            image_width: 424,
            image_height: 240,
            n_stroke: 3,
            n_vertex_bound: CountRange::new(5, 20),
            max_head_speed: 15.0,
            max_head_acceleration: Acceleration::new(15.0, 3.14),
            brush_width_bound: CountRange::new(30, 50),
            boarder_gap: 50,
            n_move_point_ratio: 0.5,
            max_point_move: 10,
            max_line_acceleration: Acceleration::new(5.0, 0.5),
            max_init_speed: 10.0,
        }
    }
}

impl MovingStrokeConfig {
    /// Few wide, blob-like strokes resembling occluding objects.
    pub fn object_like() -> Self {
        Self {
            boarder_gap: 20,
            ..Self::default()
        }
    }

    /// Many thin, long curves.
    pub fn rand_curve() -> Self {
        Self {
            n_vertex_bound: CountRange::new(10, 30),
            max_head_speed: 20.0,
            max_head_acceleration: Acceleration::new(15.0, 0.5),
            brush_width_bound: CountRange::new(3, 10),
            n_move_point_ratio: 0.5,
            max_point_move: 3,
            max_line_acceleration: Acceleration::new(5.0, 0.5),
            boarder_gap: 20,
            max_init_speed: 6.0,
            ..Self::default()
        }
    }

    /// Decode and validate a JSON config.
    pub fn from_json(s: &str) -> MaskResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| MaskError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> MaskResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MaskError::serde(e.to_string()))
    }

    /// Validated canvas size.
    pub fn canvas(&self) -> MaskResult<CanvasSize> {
        CanvasSize::new(self.image_width, self.image_height)
    }

    /// Parameters for laying out new strokes.
    pub fn shape_params(&self) -> ShapeParams {
        ShapeParams {
            n_vertex_bound: self.n_vertex_bound,
            max_head_speed: self.max_head_speed,
            max_head_acceleration: self.max_head_acceleration,
            boarder_gap: self.boarder_gap,
            max_init_speed: self.max_init_speed,
        }
    }

    /// Parameters for advancing strokes between frames.
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            n_move_point_ratio: self.n_move_point_ratio,
            max_point_move: self.max_point_move,
            max_line_acceleration: self.max_line_acceleration,
            boarder_gap: self.boarder_gap,
            max_init_speed: self.max_init_speed,
        }
    }

    /// Check every field before any random draw.
    pub fn validate(&self) -> MaskResult<()> {
        self.canvas()?.inset(self.boarder_gap)?;
        self.brush_width_bound.validate("brush_width_bound")?;
        self.shape_params().validate()?;
        self.motion_params().validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/masks/config.rs"]
mod tests;
