//! SVG rasterization boundary.
//!
//! Produces the single-channel sample buffer the codec consumes: the SVG is
//! rendered into a width x height RGBA surface at a uniform scale and the
//! alpha channel becomes the 8-bit coverage sample for each pixel.

use std::path::Path;

use resvg::{tiny_skia, usvg};

/// Rasterize the SVG file at `path` to `width * height` coverage samples,
/// row-major, one byte per pixel.
pub fn rasterize(path: &Path, width: u32, height: u32) -> Result<Vec<u8>, String> {
    let data = std::fs::read(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    rasterize_data(&data, width, height)
        .map_err(|e| format!("Failed to rasterize {}: {}", path.display(), e))
}

/// Rasterize SVG source bytes to `width * height` coverage samples.
///
/// The image is scaled uniformly by `min(width / svg_width, height /
/// svg_height)` and rendered at the origin, so a non-square source leaves
/// transparent (zero) samples along one edge.
pub fn rasterize_data(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &options).map_err(|e| e.to_string())?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| format!("Invalid raster dimensions {}x{}", width, height))?;

    let size = tree.size();
    let scale = (width as f32 / size.width()).min(height as f32 / size.height());
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // Alpha is the shape coverage; it is unaffected by premultiplication.
    Ok(pixmap.pixels().iter().map(|p| p.alpha()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_FILLED: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2">
        <rect x="0" y="0" width="2" height="1" fill="#000000"/>
    </svg>"##;

    #[test]
    fn test_rasterize_alpha_coverage() {
        let samples = rasterize_data(HALF_FILLED.as_bytes(), 2, 2).unwrap();
        assert_eq!(samples.len(), 4);
        // Top row covered by the rect, bottom row empty.
        assert_eq!(samples[0], 255);
        assert_eq!(samples[1], 255);
        assert_eq!(samples[2], 0);
        assert_eq!(samples[3], 0);
    }

    #[test]
    fn test_rasterize_scales_to_target() {
        let samples = rasterize_data(HALF_FILLED.as_bytes(), 8, 8).unwrap();
        assert_eq!(samples.len(), 64);
        assert_eq!(samples[0], 255);
        assert_eq!(samples[63], 0);
    }

    #[test]
    fn test_rasterize_rejects_garbage() {
        assert!(rasterize_data(b"not an svg", 2, 2).is_err());
    }

    #[test]
    fn test_rasterize_rejects_zero_dimensions() {
        assert!(rasterize_data(HALF_FILLED.as_bytes(), 0, 2).is_err());
    }
}
