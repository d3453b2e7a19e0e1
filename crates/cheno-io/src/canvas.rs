//! Canvas painting and the fade-in cue for export renders.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use cheno_export::{ExportOptions, RgbaRaster};
use wasm_bindgen::{Clamped, JsCast, JsValue};

/// Errors that can occur when drawing onto a canvas.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// No `<canvas>` element with the given id exists.
    #[error("no canvas element with id {0:?}")]
    Missing(String),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Media query matched when the user asked for less motion.
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn canvas_by_id(id: &str) -> Result<web_sys::HtmlCanvasElement, CanvasError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CanvasError::JsError("no document".into()))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| CanvasError::Missing(id.to_owned()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|e| CanvasError::JsError(format!("not a canvas: {e:?}")))
}

/// The canvas's own pixel size, used as the export surface size.
///
/// # Errors
///
/// Returns [`CanvasError::Missing`] if the canvas is not in the document.
pub fn native_size(id: &str) -> Result<ExportOptions, CanvasError> {
    let canvas = canvas_by_id(id)?;
    Ok(ExportOptions {
        width: canvas.width(),
        height: canvas.height(),
    })
}

/// Replace the canvas contents with `raster`, resizing the canvas to
/// match if needed.
///
/// # Errors
///
/// Returns [`CanvasError`] if the canvas or its 2D context is
/// unavailable or the pixel upload fails.
pub fn paint(id: &str, raster: &RgbaRaster) -> Result<(), CanvasError> {
    let canvas = canvas_by_id(id)?;
    if canvas.width() != raster.width() || canvas.height() != raster.height() {
        canvas.set_width(raster.width());
        canvas.set_height(raster.height());
    }

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| CanvasError::JsError("no 2d context".into()))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|e| CanvasError::JsError(format!("not a 2d context: {e:?}")))?;

    let data = web_sys::ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(raster.as_raw()),
        raster.width(),
        raster.height(),
    )?;
    context.put_image_data(&data, 0.0, 0.0)?;
    Ok(())
}

/// Whether the user prefers reduced motion.
///
/// Returns `false` when `matchMedia` is unsupported.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        _ => {
            log::warn!("matchMedia not supported");
            false
        }
    }
}

/// Fade the canvas in over `duration_ms` using the Web Animations API.
///
/// Best-effort: silently does nothing if the canvas is missing, the
/// API is unavailable, or the user prefers reduced motion.
pub fn fade_in(id: &str, duration_ms: f64) {
    if prefers_reduced_motion() {
        return;
    }
    let Ok(canvas) = canvas_by_id(id) else {
        return;
    };
    let Ok(animate) = js_sys::Reflect::get(&canvas, &JsValue::from_str("animate")) else {
        return;
    };
    if !animate.is_function() {
        return;
    }
    let animate: js_sys::Function = animate.unchecked_into();

    let keyframes = js_sys::Array::of2(&opacity_frame(0.0), &opacity_frame(1.0));
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(duration_ms),
    );
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("fill"),
        &JsValue::from_str("forwards"),
    );
    let _ = animate.call2(&canvas, &keyframes, &options);
}

fn opacity_frame(opacity: f64) -> js_sys::Object {
    let frame = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &frame,
        &JsValue::from_str("opacity"),
        &JsValue::from_f64(opacity),
    );
    frame
}
