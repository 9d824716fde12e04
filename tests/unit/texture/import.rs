//! Tests for import settings, target formats and power-of-two scaling

#[cfg(test)]
mod tests {
    use stackburger::texture::import::{
        AlphaMapMode, ImportSettings, NpotScale, Platform, TextureFormat,
    };

    // Tests compressed alpha maps use each platform's 4-bit format
    // Verified by swapping the Android and iOS formats
    #[test]
    fn test_compressed_target_formats() {
        let mode = AlphaMapMode::Compressed;
        assert_eq!(mode.target_format(Platform::Android), TextureFormat::EtcRgb4);
        assert_eq!(mode.target_format(Platform::Ios), TextureFormat::PvrtcRgb4);
        assert_eq!(mode.target_format(Platform::Standalone), TextureFormat::Rgb24);
        assert_eq!(mode.npot_scale(), NpotScale::ToNearest);
        assert!(mode.output_settings(Platform::Ios).compressed);
    }

    // Tests uncompressed alpha maps keep 8-bit channels and size
    // Verified by scaling uncompressed maps
    #[test]
    fn test_uncompressed_target_format() {
        let mode = AlphaMapMode::Uncompressed;
        assert_eq!(mode.target_format(Platform::Android), TextureFormat::Rgba32);
        assert_eq!(mode.npot_scale(), NpotScale::None);
        assert!(!mode.output_settings(Platform::Android).compressed);
    }

    // Tests format classification
    // Verified by treating RGB24 as transparent
    #[test]
    fn test_format_classification() {
        assert!(TextureFormat::Rgba32.has_transparency());
        assert!(TextureFormat::Argb16.has_transparency());
        assert!(!TextureFormat::Rgb24.has_transparency());
        assert!(TextureFormat::EtcRgb4.is_compressed());
        assert!(!TextureFormat::Alpha8.is_compressed());
        assert!(!TextureFormat::Alpha8.is_plain_color());
        assert_eq!(TextureFormat::PvrtcRgb4.to_string(), "PVRTC_RGB4");
        assert_eq!(Platform::Ios.to_string(), "iPhone");
    }

    // Tests side scaling for each policy
    // Verified by rounding ties down
    #[test]
    fn test_npot_scale_side() {
        assert_eq!(NpotScale::ToNearest.scale_side(100), 128);
        assert_eq!(NpotScale::ToNearest.scale_side(90), 64);
        assert_eq!(NpotScale::ToNearest.scale_side(96), 128);
        assert_eq!(NpotScale::ToLarger.scale_side(65), 128);
        assert_eq!(NpotScale::ToSmaller.scale_side(127), 64);
        assert_eq!(NpotScale::None.scale_side(100), 100);
        assert_eq!(NpotScale::ToNearest.scale_side(256), 256);
        assert_eq!(NpotScale::ToNearest.scale_side(3), 4);
        assert_eq!(NpotScale::ToSmaller.scale_side(0), 0);
    }

    // Tests sides above the largest u32 power of two stay in range
    // Verified by doubling the smaller power without overflow checks
    #[test]
    fn test_npot_scale_side_near_u32_max() {
        let top = 1_u32 << 31;
        assert_eq!(NpotScale::ToLarger.scale_side(u32::MAX), top);
        assert_eq!(NpotScale::ToNearest.scale_side(u32::MAX), top);
        assert_eq!(NpotScale::ToSmaller.scale_side(u32::MAX), top);
        assert_eq!(NpotScale::ToNearest.scale_side(top + 1), top);
        assert_eq!(NpotScale::None.scale_side(u32::MAX), u32::MAX);
        assert_eq!(NpotScale::ToLarger.scale_side(top), top);
        assert_eq!(
            NpotScale::ToLarger.target_size(u32::MAX, 100),
            (top, 128)
        );
    }

    // Tests reimport detection and extraction preparation
    // Verified by keeping compression during extraction
    #[test]
    fn test_prepared_for_extraction() {
        let settings = ImportSettings::default();
        assert!(settings.needs_reimport());

        let prepared = settings.prepared_for_extraction();
        assert!(prepared.readable);
        assert!(!prepared.compressed);
        assert_eq!(prepared.npot_scale, NpotScale::None);
        assert_eq!(prepared.format, TextureFormat::Rgba32);
        assert!(!prepared.needs_reimport());

        let compressed = ImportSettings {
            format: TextureFormat::EtcRgb4,
            ..settings
        };
        assert_eq!(
            compressed.prepared_for_extraction().format,
            TextureFormat::Rgba32
        );

        let rgb = ImportSettings {
            format: TextureFormat::Rgb24,
            ..prepared
        };
        assert_eq!(rgb.prepared_for_extraction().format, TextureFormat::Rgb24);
        assert!(rgb.needs_reimport());
    }
}
