//! strokemask generates synthetic occlusion masks for video-inpainting training.
//!
//! The main generator animates free-form brush strokes across frames so that
//! consecutive masks stay temporally coherent:
//!
//! 1. **Create**: each stroke lays out a polyline with a correlated random walk
//!    ([`create_stroke`]) and gets a brush width and a whole-line velocity.
//! 2. **Advance**: per frame, the whole line drifts with bounded acceleration and a
//!    random subset of control points jitters ([`advance_stroke`]). A point escaping
//!    the canvas redraws the line velocity.
//! 3. **Rasterize**: thick segments plus round joints are drawn onto a binary
//!    [`Mask`] ([`draw_stroke`]).
//!
//! [`moving_stroke_masks`] runs the whole loop. [`random_walk_mask`] is an
//! independent, static alternative. The [`HorizontalFlip`], [`GroupScale`],
//! [`Stack`] and [`ToTensorLayout`] adapters prepare frame groups for training.
//!
//! Every stochastic entry point takes an explicit `&mut impl rand::Rng`; seed a
//! `rand::rngs::StdRng` for reproducible output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod masks;
mod motion;
mod raster;
mod transforms;

pub use foundation::core::{CanvasSize, CountRange, GapBox, Point, Rect, Vec2};
pub use foundation::error::{MaskError, MaskResult};
pub use masks::config::MovingStrokeConfig;
pub use masks::random_walk::random_walk_mask;
pub use masks::ratio::masked_ratio;
pub use masks::sequence::{MaskSequence, init_strokes, moving_stroke_masks, step_strokes};
pub use motion::stroke::{
    MotionParams, ShapeParams, Stroke, StrokePath, advance_stroke, create_stroke,
};
pub use motion::velocity::{
    Acceleration, Distribution, Velocity, perturb_velocity, sample_velocity,
};
pub use raster::canvas::{FILLED, Mask, MaskCanvas};
pub use raster::stroke::{draw_stroke, joint_radius, rasterize_strokes};
pub use transforms::flip::{FLIP_PROBABILITY, HorizontalFlip};
pub use transforms::frame::{Frame, PixelMode};
pub use transforms::scale::GroupScale;
pub use transforms::stack::Stack;
pub use transforms::tensor::ToTensorLayout;
