//! Unit-interval color samples and their 8-bit channel conversions

use num_traits::{Bounded, ToPrimitive};

/// RGBA color with each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelSample {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl PixelSample {
    /// Create a sample from its four channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with every color channel set to `value`
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value, 1.0)
    }

    /// Convert from integer channels, mapping the channel type's full range onto `[0, 1]`
    pub fn from_channels<T>(channels: [T; 4]) -> Self
    where
        T: Bounded + ToPrimitive + Copy,
    {
        let [r, g, b, a] = channels.map(normalize);
        Self { r, g, b, a }
    }

    /// Convert to 8-bit channels, clamping out-of-range values
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(quantize_u8)
    }

    /// Convert to 8-bit color channels, dropping alpha
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(quantize_u8)
    }
}

fn normalize<T>(value: T) -> f32
where
    T: Bounded + ToPrimitive + Copy,
{
    let max = T::max_value().to_f32().unwrap_or(1.0);
    value.to_f32().map_or(0.0, |v| v / max)
}

fn quantize_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * f32::from(u8::MAX)).round() as u8
}
