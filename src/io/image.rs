//! PNG loading into pixel grids and alpha-map export

use crate::io::error::{Result, StackError, WithPath, invalid_parameter};
use crate::texture::PixelGrid;
use crate::texture::import::ImportSettings;
use image::RgbImage;
use std::path::Path;

/// Decode the texture at `path` into a pixel grid
///
/// # Errors
///
/// Returns an error if:
/// - The import settings do not allow reading pixels
/// - The file cannot be opened or decoded
pub fn load_texture(path: &Path, settings: &ImportSettings) -> Result<PixelGrid> {
    if !settings.readable {
        return Err(invalid_parameter(
            "readable",
            &path.display(),
            &"texture is not imported as readable",
        ));
    }

    let image = image::open(path).map_err(|source| StackError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PixelGrid::from_dynamic_image(&image))
}

/// Write an alpha map as an RGB PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_alpha_map(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StackError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| StackError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Read the pixel dimensions of the image at `path` without decoding it
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header is invalid
pub fn texture_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).with_path(path)
}
