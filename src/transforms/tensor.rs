use ndarray::{Array3, Array4};

use crate::transforms::frame::Frame;

/// Reorder pixel data channel-major and optionally scale `[0, 255]` to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToTensorLayout {
    /// Divide by 255 when set.
    pub normalize: bool,
}

impl Default for ToTensorLayout {
    fn default() -> Self {
        Self { normalize: true }
    }
}

impl ToTensorLayout {
    /// Layout adapter with optional normalisation.
    pub fn new(normalize: bool) -> Self {
        Self { normalize }
    }

    fn scale(&self, v: u8) -> f32 {
        if self.normalize {
            f32::from(v) / 255.0
        } else {
            f32::from(v)
        }
    }

    /// `height x width x channel x time` to `channel x time x height x width`.
    pub fn apply_stacked(&self, stacked: &Array4<u8>) -> Array4<f32> {
        stacked
            .view()
            .permuted_axes([2, 3, 0, 1])
            .mapv(|v| self.scale(v))
    }

    /// Single frame to `channel x height x width`.
    pub fn apply_frame(&self, frame: &Frame) -> Array3<f32> {
        let (w, h) = frame.dimensions();
        let shape = (frame.mode().channels(), h as usize, w as usize);
        Array3::from_shape_fn(shape, |(c, y, x)| {
            self.scale(frame.sample(x as u32, y as u32, c))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transforms/tensor.rs"]
mod tests;
