use crate::{
    foundation::error::{MaskError, MaskResult},
    transforms::frame::Frame,
};

/// Resize every frame so its shorter edge equals `size`, keeping aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupScale {
    size: u32,
}

impl GroupScale {
    /// Adapter targeting a shorter edge of `size`, which must be non-zero.
    pub fn new(size: u32) -> MaskResult<Self> {
        if size == 0 {
            return Err(MaskError::invalid_argument("GroupScale size must be > 0"));
        }
        Ok(Self { size })
    }

    /// Target shorter-edge length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Output dimensions for a `width x height` input; the longer edge is truncated.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let size = u64::from(self.size);
        let (w, h) = (u64::from(width), u64::from(height));
        if w == 0 || h == 0 {
            return (width, height);
        }
        let (ow, oh) = if w < h {
            (size, size * h / w)
        } else {
            (size * w / h, size)
        };
        (ow.max(1) as u32, oh.max(1) as u32)
    }

    /// Resize each frame independently.
    pub fn apply(&self, frames: &[Frame]) -> Vec<Frame> {
        frames
            .iter()
            .map(|frame| {
                let (w, h) = frame.dimensions();
                if w.min(h) == self.size {
                    return frame.clone();
                }
                let (ow, oh) = self.target_dimensions(w, h);
                frame.resize(ow, oh)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transforms/scale.rs"]
mod tests;
