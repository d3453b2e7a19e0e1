//! Rasterize SVG markup onto an RGBA surface.
//!
//! Parses with `usvg` and paints with `resvg` onto a `tiny_skia`
//! pixmap sized like the export canvas. The drawing is scaled to fit
//! the surface and centred, preserving its aspect ratio.

use image::ImageEncoder;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::ExportError;

/// Size of the export surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl ExportOptions {
    /// Default width of an HTML `<canvas>` without attributes.
    pub const CANVAS_DEFAULT_WIDTH: u32 = 300;
    /// Default height of an HTML `<canvas>` without attributes.
    pub const CANVAS_DEFAULT_HEIGHT: u32 = 150;
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: Self::CANVAS_DEFAULT_WIDTH,
            height: Self::CANVAS_DEFAULT_HEIGHT,
        }
    }
}

/// Straight (non-premultiplied) RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaRaster {
    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, four per pixel.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let (x, y, width) = (x as usize, y as usize, self.width as usize);
        let i = (y * width + x) * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::PngEncode`] if encoding fails.
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut png_bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder.write_image(
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(png_bytes)
    }
}

/// Paint `svg` onto a transparent surface of `options` size.
///
/// # Errors
///
/// Returns [`ExportError::EmptyCanvas`] for a zero-sized surface and
/// [`ExportError::Parse`] if `svg` is not valid SVG.
pub fn rasterize(svg: &str, options: ExportOptions) -> Result<RgbaRaster, ExportError> {
    let ExportOptions { width, height } = options;
    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::EmptyCanvas { width, height })?;

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
    resvg::render(&tree, fit_transform(tree.size(), width, height), &mut pixmap.as_mut());

    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    log::debug!("rasterized {width}x{height} surface");
    Ok(RgbaRaster {
        width,
        height,
        pixels,
    })
}

/// Scale `size` to fit inside `width`x`height` and centre it.
#[allow(clippy::cast_precision_loss)]
fn fit_transform(size: usvg::Size, width: u32, height: u32) -> Transform {
    let (w, h) = (width as f32, height as f32);
    let scale = (w / size.width()).min(h / size.height());
    let tx = (w - size.width() * scale) / 2.0;
    let ty = (h - size.height() * scale) / 2.0;
    Transform::from_row(scale, 0.0, 0.0, scale, tx, ty)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" style="fill: #ff0000"/></svg>"##;

    #[test]
    fn square_fills_the_centre_of_a_wide_canvas() {
        let raster = rasterize(SQUARE, ExportOptions::default()).unwrap();
        assert_eq!((raster.width(), raster.height()), (300, 150));
        assert_eq!(raster.as_raw().len(), 300 * 150 * 4);
        assert_eq!(raster.pixel(150, 75), Some([255, 0, 0, 255]));
        // Letterboxed margins stay transparent.
        assert_eq!(raster.pixel(10, 75), Some([0, 0, 0, 0]));
        assert_eq!(raster.pixel(300, 0), None);
    }

    #[test]
    fn pixel_offset_beyond_u32_range_is_out_of_bounds() {
        let raster = RgbaRaster {
            width: 70_000,
            height: 70_000,
            pixels: vec![0; 16],
        };
        // The byte offset of the last pixel exceeds u32::MAX.
        assert_eq!(raster.pixel(69_999, 69_999), None);
        assert_eq!(raster.pixel(1, 0), Some([0, 0, 0, 0]));
        assert_eq!(raster.pixel(70_000, 0), None);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let err = rasterize(
            SQUARE,
            ExportOptions {
                width: 0,
                height: 10,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ExportError::EmptyCanvas {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn malformed_markup_is_a_parse_error() {
        let err = rasterize("<svg", ExportOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::Parse(_)));
    }

    #[test]
    fn png_has_signature() {
        let raster = rasterize(SQUARE, ExportOptions::default()).unwrap();
        let png = raster.to_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
