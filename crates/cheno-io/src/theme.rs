//! The single place the theme touches the document.
//!
//! Components receive a [`ThemeContext`] value; only [`apply`] writes
//! the corresponding custom properties onto `<html>`.

use cheno_core::{ColorScheme, ThemeContext};
use wasm_bindgen::{JsCast, JsValue};

/// Errors that can occur when writing the theme to the document.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Media query matched when the system prefers a dark scheme.
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The scheme the operating system prefers, defaulting to light.
#[must_use]
pub fn preferred_scheme() -> ColorScheme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .is_some_and(|q| q.matches());
    ColorScheme::from_prefers_dark(prefers_dark)
}

/// Write `theme` onto the document root: the `data-theme` attribute and
/// every custom property the theme defines.
///
/// # Errors
///
/// Returns [`ThemeError::JsError`] if the document root is unavailable
/// or a style write fails.
pub fn apply(theme: ThemeContext) -> Result<(), ThemeError> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| ThemeError::JsError("no document element".into()))?;
    root.set_attribute("data-theme", theme.scheme.as_str())?;

    let root = root
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|e| ThemeError::JsError(format!("document element is not HTML: {e:?}")))?;
    let style = root.style();
    for &(name, value) in theme.custom_properties() {
        match value {
            Some(value) => style.set_property(name, value)?,
            None => {
                style.remove_property(name)?;
            }
        }
    }
    log::debug!("applied {} theme", theme.scheme);
    Ok(())
}
