//! The downloadable result of an export.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use cheno_core::Editor;

use crate::ExportError;
use crate::raster::{ExportOptions, RgbaRaster, rasterize};
use crate::svg::{SvgMetadata, scene_to_svg};

/// Prefix of every suggested download filename.
const DOWNLOAD_PREFIX: &str = "best-lodger";

/// A finished render: when it completed, its pixels, and its PNG data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderArtifact {
    /// Completion time in milliseconds since the Unix epoch.
    pub rendered_at_ms: u64,
    /// `data:image/png;base64,...` URL of the PNG.
    pub data_url: String,
    /// Rendered pixels, for painting onto a canvas.
    pub raster: RgbaRaster,
}

impl RenderArtifact {
    /// Suggested filename for the download link.
    #[must_use]
    pub fn download_filename(&self) -> String {
        format!("{DOWNLOAD_PREFIX}-{}.png", self.rendered_at_ms)
    }
}

/// Wrap PNG bytes in a `data:` URL.
#[must_use]
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Serialize, rasterize, and encode the editor's current scene.
///
/// `now_ms` is read once the PNG is encoded, so the artifact carries its
/// completion time. It is not called when the export fails.
///
/// # Errors
///
/// Propagates any [`ExportError`] from rasterization or PNG encoding.
pub fn export(
    editor: &Editor,
    options: ExportOptions,
    now_ms: impl FnOnce() -> u64,
) -> Result<RenderArtifact, ExportError> {
    let svg = scene_to_svg(editor, &SvgMetadata::default());
    let raster = rasterize(&svg, options)?;
    let png = raster.to_png()?;
    log::info!(
        "exported {}x{} PNG ({} bytes)",
        raster.width(),
        raster.height(),
        png.len()
    );
    Ok(RenderArtifact {
        rendered_at_ms: now_ms(),
        data_url: png_data_url(&png),
        raster,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn data_url_is_base64_png() {
        assert_eq!(png_data_url(b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(png_data_url(&[]), "data:image/png;base64,");
    }

    #[test]
    fn filename_embeds_epoch_millis() {
        let artifact =
            export(&Editor::default(), ExportOptions::default(), || 1_700_000_000_123).unwrap();
        assert_eq!(
            artifact.download_filename(),
            "best-lodger-1700000000123.png"
        );
    }

    #[test]
    fn timestamp_is_read_only_after_a_successful_render() {
        let reads = std::cell::Cell::new(0);
        let clock = || {
            reads.set(reads.get() + 1);
            7
        };

        let empty = ExportOptions {
            width: 0,
            height: 0,
        };
        assert!(export(&Editor::default(), empty, clock).is_err());
        assert_eq!(reads.get(), 0);

        let artifact = export(&Editor::default(), ExportOptions::default(), clock).unwrap();
        assert_eq!(reads.get(), 1);
        assert_eq!(artifact.rendered_at_ms, 7);
    }
}
