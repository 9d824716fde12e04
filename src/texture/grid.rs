//! Rectangular pixel grids and conversions to and from decoded images
//!
//! Samples are stored row-major in an [`Array2`] indexed `[y, x]`, so the
//! grid's rows are the image's scanlines.

use crate::texture::pixel::PixelSample;
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};
use ndarray::Array2;
use num_traits::{Bounded, ToPrimitive};

/// `width × height` grid of unit-interval samples
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    samples: Array2<PixelSample>,
}

impl PixelGrid {
    /// Create a grid filled with `fill`
    pub fn filled(width: usize, height: usize, fill: PixelSample) -> Self {
        Self {
            samples: Array2::from_elem((height, width), fill),
        }
    }

    /// Build a grid from row-major samples
    ///
    /// Returns `None` if `samples.len()` is not `width * height`.
    pub fn from_samples(width: usize, height: usize, samples: Vec<PixelSample>) -> Option<Self> {
        Array2::from_shape_vec((height, width), samples)
            .ok()
            .map(|samples| Self { samples })
    }

    /// Build a grid by evaluating `f(x, y)` at every position
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> PixelSample,
    ) -> Self {
        Self {
            samples: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Grid width in pixels
    pub fn width(&self) -> usize {
        self.samples.ncols()
    }

    /// Grid height in pixels
    pub fn height(&self) -> usize {
        self.samples.nrows()
    }

    /// Whether the grid has no pixels
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<&PixelSample> {
        self.samples.get([y, x])
    }

    /// Mutable sample at column `x`, row `y`
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut PixelSample> {
        self.samples.get_mut([y, x])
    }

    /// Row-major iterator over all samples
    pub fn iter(&self) -> impl Iterator<Item = &PixelSample> {
        self.samples.iter()
    }

    /// Apply `f` to every sample, producing a grid of the same dimensions
    #[must_use]
    pub fn map(&self, f: impl FnMut(&PixelSample) -> PixelSample) -> Self {
        Self {
            samples: self.samples.map(f),
        }
    }

    /// Convert a decoded image at its native channel depth
    pub fn from_dynamic_image(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => Self::from_rgba16(&image.to_rgba16()),
            _ => Self::from_rgba8(&image.to_rgba8()),
        }
    }

    /// Convert an 8-bit RGBA image
    pub fn from_rgba8(image: &RgbaImage) -> Self {
        Self::from_pixels(image.width(), image.height(), image.pixels().map(|p| p.0))
    }

    /// Convert a 16-bit RGBA image
    pub fn from_rgba16(image: &ImageBuffer<Rgba<u16>, Vec<u16>>) -> Self {
        Self::from_pixels(image.width(), image.height(), image.pixels().map(|p| p.0))
    }

    fn from_pixels<T>(width: u32, height: u32, pixels: impl Iterator<Item = [T; 4]>) -> Self
    where
        T: Bounded + ToPrimitive + Copy,
    {
        let (width, height) = (width as usize, height as usize);
        let samples = pixels.map(PixelSample::from_channels).collect();
        Self::from_samples(width, height, samples)
            .unwrap_or_else(|| Self::filled(width, height, PixelSample::default()))
    }

    /// Quantize to an 8-bit RGBA image
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgba(self.sample_or_default(x, y).to_rgba8())
        })
    }

    /// Quantize to an 8-bit RGB image, dropping alpha
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgb(self.sample_or_default(x, y).to_rgb8())
        })
    }

    fn sample_or_default(&self, x: u32, y: u32) -> PixelSample {
        self.get(x as usize, y as usize).copied().unwrap_or_default()
    }
}
