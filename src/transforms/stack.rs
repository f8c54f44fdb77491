use image::DynamicImage;
use ndarray::Array4;

use crate::{
    foundation::error::{MaskError, MaskResult},
    transforms::frame::{Frame, PixelMode},
};

/// Channel routine chosen once per group from the first frame's mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StackLayout {
    /// Binary frames are promoted to grayscale and share this path.
    Luma,
    Rgb { reversed: bool },
}

impl StackLayout {
    fn resolve(mode: PixelMode, roll: bool) -> Self {
        match mode {
            PixelMode::Binary | PixelMode::Grayscale => Self::Luma,
            PixelMode::Rgb => Self::Rgb { reversed: roll },
        }
    }

    fn channels(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::Rgb { .. } => 3,
        }
    }

    fn accepts(self, mode: PixelMode) -> bool {
        Self::resolve(mode, false).channels() == self.channels()
    }

    fn source_channel(self, c: usize) -> usize {
        match self {
            Self::Rgb { reversed: true } => 2 - c,
            _ => c,
        }
    }
}

/// Concatenate same-shape frames along a trailing time axis.
///
/// Output layout is `height x width x channel x time`. With `roll`, RGB frames
/// are stored in BGR order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stack {
    /// Store RGB channels reversed.
    #[serde(default)]
    pub roll: bool,
}

impl Stack {
    /// Stack adapter with optional channel roll.
    pub fn new(roll: bool) -> Self {
        Self { roll }
    }

    /// Stack `frames`; all must share mode class and dimensions.
    pub fn apply(&self, frames: &[Frame]) -> MaskResult<Array4<u8>> {
        let first = frames
            .first()
            .ok_or_else(|| MaskError::invalid_argument("cannot stack an empty frame group"))?;
        let layout = StackLayout::resolve(first.mode(), self.roll);
        let (w, h) = first.dimensions();

        for (t, frame) in frames.iter().enumerate().skip(1) {
            if !layout.accepts(frame.mode()) {
                return Err(MaskError::invalid_argument(format!(
                    "frame {t} is {} but the group started as {}",
                    frame.mode(),
                    first.mode()
                )));
            }
            if frame.dimensions() != (w, h) {
                return Err(MaskError::invalid_argument(format!(
                    "frame {t} is {:?}, expected {:?}",
                    frame.dimensions(),
                    (w, h)
                )));
            }
        }

        let shape = (h as usize, w as usize, layout.channels(), frames.len());
        Ok(Array4::from_shape_fn(shape, |(y, x, c, t)| {
            frames[t].sample(x as u32, y as u32, layout.source_channel(c))
        }))
    }

    /// Convert decoded images to frames first; anything other than 8-bit
    /// grayscale or RGB is rejected.
    pub fn apply_images(&self, images: Vec<DynamicImage>) -> MaskResult<Array4<u8>> {
        let frames = images
            .into_iter()
            .map(Frame::try_from)
            .collect::<MaskResult<Vec<_>>>()?;
        self.apply(&frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transforms/stack.rs"]
mod tests;
