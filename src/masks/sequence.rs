use std::ops::Index;

use rand::Rng;

use crate::{
    foundation::error::{MaskError, MaskResult},
    masks::config::MovingStrokeConfig,
    motion::stroke::{Stroke, advance_stroke, create_stroke},
    raster::{canvas::Mask, stroke::rasterize_strokes},
};

/// Ordered masks, one per frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskSequence {
    frames: Vec<Mask>,
}

impl MaskSequence {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for generated sequences.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `frame`, if any.
    pub fn get(&self, frame: usize) -> Option<&Mask> {
        self.frames.get(frame)
    }

    /// All frames in order.
    pub fn frames(&self) -> &[Mask] {
        &self.frames
    }

    /// Iterate frames in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Mask> {
        self.frames.iter()
    }

    /// Take ownership of the frames.
    pub fn into_frames(self) -> Vec<Mask> {
        self.frames
    }
}

impl Index<usize> for MaskSequence {
    type Output = Mask;

    fn index(&self, frame: usize) -> &Mask {
        &self.frames[frame]
    }
}

impl IntoIterator for MaskSequence {
    type Item = Mask;
    type IntoIter = std::vec::IntoIter<Mask>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a MaskSequence {
    type Item = &'a Mask;
    type IntoIter = std::slice::Iter<'a, Mask>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Create the frame-0 strokes, each with its own brush width.
pub fn init_strokes<R: Rng + ?Sized>(
    rng: &mut R,
    config: &MovingStrokeConfig,
) -> MaskResult<Vec<Stroke>> {
    let canvas = config.canvas()?;
    let shape = config.shape_params();
    let mut strokes = Vec::with_capacity(config.n_stroke as usize);
    for _ in 0..config.n_stroke {
        let brush_width = config.brush_width_bound.sample(rng);
        let path = create_stroke(rng, canvas, &shape)?;
        strokes.push(Stroke { path, brush_width });
    }
    Ok(strokes)
}

/// Advance every stroke by one frame. Returns how many strokes escaped.
pub fn step_strokes<R: Rng + ?Sized>(
    rng: &mut R,
    strokes: &mut [Stroke],
    config: &MovingStrokeConfig,
) -> MaskResult<usize> {
    let canvas = config.canvas()?;
    let motion = config.motion_params();
    let mut escapes = 0;
    for stroke in strokes.iter_mut() {
        if advance_stroke(rng, &mut stroke.path, canvas, &motion)? {
            escapes += 1;
        }
    }
    Ok(escapes)
}

/// Generate `video_len` temporally coherent masks from moving random strokes.
///
/// Frame 0 rasterizes the freshly created strokes; every later frame advances
/// each stroke once and rasterizes the union onto a fresh canvas.
#[tracing::instrument(skip(rng, config), fields(n_stroke = config.n_stroke))]
pub fn moving_stroke_masks<R: Rng + ?Sized>(
    rng: &mut R,
    video_len: usize,
    config: &MovingStrokeConfig,
) -> MaskResult<MaskSequence> {
    if video_len < 1 {
        return Err(MaskError::invalid_argument("video_len must be >= 1"));
    }
    config.validate()?;
    let canvas = config.canvas()?;

    let mut strokes = init_strokes(rng, config)?;
    let mut frames = Vec::with_capacity(video_len);
    frames.push(rasterize_strokes(canvas, &strokes));

    let mut escapes = 0;
    for _ in 1..video_len {
        escapes += step_strokes(rng, &mut strokes, config)?;
        frames.push(rasterize_strokes(canvas, &strokes));
    }

    tracing::debug!(frames = frames.len(), escapes, "mask sequence generated");
    Ok(MaskSequence { frames })
}

#[cfg(test)]
#[path = "../../tests/unit/masks/sequence.rs"]
mod tests;
