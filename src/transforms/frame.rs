use std::fmt;

use image::{DynamicImage, GrayImage, RgbImage, imageops};

use crate::{
    foundation::error::{MaskError, MaskResult},
    raster::canvas::Mask,
};

/// Pixel layout of a [`Frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelMode {
    /// One channel holding `0` or `255`.
    Binary,
    /// One 8-bit channel.
    Grayscale,
    /// Three 8-bit channels in RGB order.
    Rgb,
}

impl PixelMode {
    /// Number of channels stored per pixel.
    pub fn channels(self) -> usize {
        match self {
            Self::Binary | Self::Grayscale => 1,
            Self::Rgb => 3,
        }
    }
}

impl fmt::Display for PixelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::Grayscale => "grayscale",
            Self::Rgb => "rgb",
        })
    }
}

/// One image of a frame group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Binary mask with values `0` or `255`.
    Binary(GrayImage),
    /// 8-bit grayscale.
    Gray(GrayImage),
    /// 8-bit RGB.
    Rgb(RgbImage),
}

impl Frame {
    /// Pixel layout of this frame.
    pub fn mode(&self) -> PixelMode {
        match self {
            Self::Binary(_) => PixelMode::Binary,
            Self::Gray(_) => PixelMode::Grayscale,
            Self::Rgb(_) => PixelMode::Rgb,
        }
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Binary(img) | Self::Gray(img) => img.dimensions(),
            Self::Rgb(img) => img.dimensions(),
        }
    }

    /// Channel value at `(x, y, c)`.
    pub fn sample(&self, x: u32, y: u32, c: usize) -> u8 {
        match self {
            Self::Binary(img) | Self::Gray(img) => img.get_pixel(x, y).0[0],
            Self::Rgb(img) => img.get_pixel(x, y).0[c],
        }
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&self) -> Self {
        match self {
            Self::Binary(img) => Self::Binary(imageops::flip_horizontal(img)),
            Self::Gray(img) => Self::Gray(imageops::flip_horizontal(img)),
            Self::Rgb(img) => Self::Rgb(imageops::flip_horizontal(img)),
        }
    }

    /// Replace every channel value `v` with `255 - v`.
    pub fn invert(&mut self) {
        match self {
            Self::Binary(img) | Self::Gray(img) => imageops::invert(img),
            Self::Rgb(img) => imageops::invert(img),
        }
    }

    /// Resample to `width x height`: nearest-neighbour for binary frames,
    /// bilinear otherwise.
    pub fn resize(&self, width: u32, height: u32) -> Self {
        use imageops::FilterType::{Nearest, Triangle};
        match self {
            Self::Binary(img) => Self::Binary(imageops::resize(img, width, height, Nearest)),
            Self::Gray(img) => Self::Gray(imageops::resize(img, width, height, Triangle)),
            Self::Rgb(img) => Self::Rgb(imageops::resize(img, width, height, Triangle)),
        }
    }
}

impl From<Mask> for Frame {
    fn from(mask: Mask) -> Self {
        Self::Binary(mask.into_image())
    }
}

impl TryFrom<DynamicImage> for Frame {
    type Error = MaskError;

    fn try_from(img: DynamicImage) -> MaskResult<Self> {
        match img {
            DynamicImage::ImageLuma8(g) => Ok(Self::Gray(g)),
            DynamicImage::ImageRgb8(rgb) => Ok(Self::Rgb(rgb)),
            other => Err(MaskError::unsupported_format(format!(
                "{:?} frames are not supported",
                other.color()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transforms/frame.rs"]
mod tests;
