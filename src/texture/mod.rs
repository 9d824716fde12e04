//! Pixel grids and alpha-map extraction

/// Alpha channel extraction and alpha-map naming
pub mod extract;
/// Pixel grid storage and image conversions
pub mod grid;
/// Import settings and platform texture formats
pub mod import;
/// Unit-interval color samples
pub mod pixel;
/// Scoped configuration overrides
pub mod scope;

pub use extract::extract_alpha;
pub use grid::PixelGrid;
pub use pixel::PixelSample;
