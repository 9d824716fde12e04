//! Texture import settings, target formats and power-of-two scaling
//!
//! These values describe how a texture is read and how its alpha map should
//! be stored on each platform. Alpha maps are always written at source size;
//! power-of-two scaling and encoding into the compressed GPU formats are left
//! to the engine that imports them, so here they are only selected.

use clap::ValueEnum;
use std::fmt;

/// Build target whose texture format rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Platform {
    /// Android devices (ETC1 compression)
    #[default]
    Android,
    /// iOS devices (PVRTC compression)
    Ios,
    /// Desktop builds, left uncompressed
    Standalone,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Android => "Android",
            Self::Ios => "iPhone",
            Self::Standalone => "Standalone",
        })
    }
}

/// Stored pixel format of an imported texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 8 bits per channel, RGBA order
    Rgba32,
    /// 8 bits per channel, ARGB order
    Argb32,
    /// 4 bits per channel, RGBA order
    Rgba16,
    /// 4 bits per channel, ARGB order
    Argb16,
    /// 8 bits per color channel, no alpha
    Rgb24,
    /// 5-6-5 bit color, no alpha
    Rgb16,
    /// Single 8-bit alpha channel
    Alpha8,
    /// ETC1 4 bits per pixel, no alpha
    EtcRgb4,
    /// PVRTC 4 bits per pixel, no alpha
    PvrtcRgb4,
}

impl TextureFormat {
    /// Whether the format keeps a full alpha channel alongside color
    pub const fn has_transparency(self) -> bool {
        matches!(self, Self::Rgba32 | Self::Argb32 | Self::Rgba16 | Self::Argb16)
    }

    /// Whether the format is block-compressed
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::EtcRgb4 | Self::PvrtcRgb4)
    }

    /// Whether pixels can be read back losslessly enough to extract from
    pub const fn is_plain_color(self) -> bool {
        matches!(
            self,
            Self::Rgb16 | Self::Rgb24 | Self::Argb32 | Self::Argb16 | Self::Rgba32
        )
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rgba32 => "RGBA32",
            Self::Argb32 => "ARGB32",
            Self::Rgba16 => "RGBA16",
            Self::Argb16 => "ARGB16",
            Self::Rgb24 => "RGB24",
            Self::Rgb16 => "RGB16",
            Self::Alpha8 => "Alpha8",
            Self::EtcRgb4 => "ETC_RGB4",
            Self::PvrtcRgb4 => "PVRTC_RGB4",
        })
    }
}

/// Rescaling policy for non-power-of-two textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NpotScale {
    /// Keep the original size
    None,
    /// Scale each side to the closest power of two
    #[default]
    ToNearest,
    /// Scale each side up to the next power of two
    ToLarger,
    /// Scale each side down to the previous power of two
    ToSmaller,
}

impl NpotScale {
    /// Side length after scaling
    pub const fn scale_side(self, side: u32) -> u32 {
        if side == 0 || side.is_power_of_two() {
            return side;
        }

        let smaller: u32 = 1 << (u32::BITS - 1 - side.leading_zeros());
        let Some(larger) = smaller.checked_mul(2) else {
            // Sides above 2^31 have no larger power of two in range
            return match self {
                Self::None => side,
                Self::ToLarger | Self::ToSmaller | Self::ToNearest => smaller,
            };
        };
        match self {
            Self::None => side,
            Self::ToLarger => larger,
            Self::ToSmaller => smaller,
            Self::ToNearest => {
                if side - smaller < larger - side {
                    smaller
                } else {
                    larger
                }
            }
        }
    }

    /// Dimensions after scaling both sides
    pub const fn target_size(self, width: u32, height: u32) -> (u32, u32) {
        (self.scale_side(width), self.scale_side(height))
    }
}

/// Storage depth of an extracted alpha map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum AlphaMapMode {
    /// Platform block compression at 4 bits per pixel
    #[default]
    Compressed,
    /// Uncompressed 8-bit channels
    Uncompressed,
}

impl AlphaMapMode {
    /// Format the alpha map is stored in on `platform`
    pub const fn target_format(self, platform: Platform) -> TextureFormat {
        match (self, platform) {
            (Self::Compressed, Platform::Android) => TextureFormat::EtcRgb4,
            (Self::Compressed, Platform::Ios) => TextureFormat::PvrtcRgb4,
            (Self::Compressed, Platform::Standalone) => TextureFormat::Rgb24,
            (Self::Uncompressed, _) => TextureFormat::Rgba32,
        }
    }

    /// Scaling the importer applies to non-power-of-two alpha maps
    pub const fn npot_scale(self) -> NpotScale {
        match self {
            Self::Compressed => NpotScale::ToNearest,
            Self::Uncompressed => NpotScale::None,
        }
    }

    /// Import settings for the alpha map written on `platform`
    pub const fn output_settings(self, platform: Platform) -> ImportSettings {
        let format = self.target_format(platform);
        ImportSettings {
            readable: false,
            compressed: format.is_compressed(),
            npot_scale: self.npot_scale(),
            format,
        }
    }
}

/// How a texture is imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportSettings {
    /// Pixels are accessible from the CPU
    pub readable: bool,
    /// Import applies compression
    pub compressed: bool,
    /// Non-power-of-two handling
    pub npot_scale: NpotScale,
    /// Stored pixel format
    pub format: TextureFormat,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            readable: false,
            compressed: true,
            npot_scale: NpotScale::ToNearest,
            format: TextureFormat::Rgba32,
        }
    }
}

impl ImportSettings {
    /// Whether the texture has to be reimported before its alpha can be read
    pub const fn needs_reimport(&self) -> bool {
        !self.format.has_transparency()
            || !self.readable
            || !matches!(self.npot_scale, NpotScale::None)
    }

    /// Settings under which the original pixels, alpha included, are readable
    #[must_use]
    pub const fn prepared_for_extraction(&self) -> Self {
        Self {
            readable: true,
            compressed: false,
            npot_scale: NpotScale::None,
            format: if self.format.is_plain_color() {
                self.format
            } else {
                TextureFormat::Rgba32
            },
        }
    }
}
