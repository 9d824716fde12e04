//! Alpha channel extraction into a separate grayscale image
//!
//! The extracted map carries the source alpha in all three color channels so
//! it survives formats without an alpha channel (ETC1, PVRTC RGB) and can be
//! compressed independently of the color texture.

use crate::io::configuration::{ALPHA_MAP_MARKER, ALPHA_MAP_SUFFIX};
use crate::io::error::{Result, StackError};
use crate::texture::grid::PixelGrid;
use crate::texture::pixel::PixelSample;
use std::path::{Path, PathBuf};

/// Copy each pixel's alpha into the RGB channels of a new opaque grid
///
/// # Errors
///
/// Returns [`StackError::EmptyImage`] if the grid has zero width or height
pub fn extract_alpha(image: &PixelGrid) -> Result<PixelGrid> {
    if image.is_empty() {
        return Err(StackError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    Ok(image.map(|sample| PixelSample::gray(sample.a)))
}

/// Path of the alpha map written for `source`: `dir/stem[a].png`
pub fn alpha_map_path(source: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default();
    let name = format!("{}{ALPHA_MAP_SUFFIX}", stem.to_string_lossy());

    source
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

/// Whether `path` names an already extracted alpha map
///
/// Only a stem ending in the marker counts; `icon[a]_old.png` is a source.
pub fn is_alpha_map(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(ALPHA_MAP_MARKER))
}
