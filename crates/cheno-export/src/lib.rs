//! cheno-export: Scene serialization and rasterization (sans-IO).
//!
//! Turns the live editor scene into SVG markup, paints that markup
//! onto an RGBA surface the size of the export canvas, and packages the
//! result as a PNG data URL ready for a download link.

pub mod artifact;
pub mod raster;
pub mod svg;

pub use artifact::{RenderArtifact, export, png_data_url};
pub use raster::{ExportOptions, RgbaRaster, rasterize};
pub use svg::{SvgMetadata, scene_to_svg};

/// Errors that can occur while exporting the scene.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The SVG markup could not be parsed.
    #[error("failed to parse SVG: {0}")]
    Parse(#[from] resvg::usvg::Error),

    /// The target surface has a zero dimension.
    #[error("cannot render onto a {width}x{height} canvas")]
    EmptyCanvas {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),
}
