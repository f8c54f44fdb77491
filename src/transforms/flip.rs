use rand::Rng;

use crate::transforms::frame::Frame;

/// Chance that a group gets mirrored.
pub const FLIP_PROBABILITY: f64 = 0.5;

/// Mirror a whole frame group left to right, or leave it untouched.
///
/// One draw decides for the entire group. In optical-flow mode every
/// even-indexed frame is also inverted after flipping, which negates the
/// horizontal flow component it encodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HorizontalFlip {
    /// Invert even-indexed frames after flipping, for flow fields.
    #[serde(default)]
    pub is_flow: bool,
}

impl HorizontalFlip {
    /// Flip adapter, optionally in flow mode.
    pub fn new(is_flow: bool) -> Self {
        Self { is_flow }
    }

    /// Flip the whole group with probability [`FLIP_PROBABILITY`].
    pub fn apply<R: Rng + ?Sized>(&self, rng: &mut R, frames: Vec<Frame>) -> Vec<Frame> {
        let draw = rng.gen_range(0.0..1.0);
        self.apply_with_draw(draw, frames)
    }

    /// Same as [`HorizontalFlip::apply`] with the random draw supplied by the caller.
    pub fn apply_with_draw(&self, draw: f64, frames: Vec<Frame>) -> Vec<Frame> {
        if draw >= FLIP_PROBABILITY {
            return frames;
        }
        let mut flipped: Vec<Frame> = frames.iter().map(Frame::flip_horizontal).collect();
        if self.is_flow {
            for frame in flipped.iter_mut().step_by(2) {
                frame.invert();
            }
        }
        flipped
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transforms/flip.rs"]
mod tests;
