//! Retrieval of runtime files served next to the app.
//!
//! These helpers never fail: any network, HTTP, or decoding problem is
//! logged and resolves to `None`, so callers treat a missing file and a
//! broken one the same way.

use cheno_core::SiteConfig;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Path of the deploy-time site configuration, relative to the page.
pub const SITE_CONFIG_PATH: &str = "config.json";

#[allow(clippy::future_not_send)]
async fn retrieve(url: &str) -> Option<web_sys::Response> {
    let window = web_sys::window()?;
    let response = match JsFuture::from(window.fetch_with_str(url)).await {
        Ok(value) => value.dyn_into::<web_sys::Response>().ok()?,
        Err(e) => {
            log::warn!("fetch {url} failed: {e:?}");
            return None;
        }
    };
    if !response.ok() {
        log::warn!("fetch {url} returned HTTP {}", response.status());
        return None;
    }
    Some(response)
}

/// Retrieve `url` as text.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Response is !Send
pub async fn retrieve_text(url: &str) -> Option<String> {
    let response = retrieve(url).await?;
    let promise = response.text().ok()?;
    match JsFuture::from(promise).await {
        Ok(value) => value.as_string(),
        Err(e) => {
            log::warn!("reading body of {url} failed: {e:?}");
            None
        }
    }
}

/// Retrieve `url` and deserialize it as JSON.
#[allow(clippy::future_not_send)]
pub async fn retrieve_json<T: DeserializeOwned>(url: &str) -> Option<T> {
    let text = retrieve_text(url).await?;
    serde_json::from_str(&text)
        .inspect_err(|e| log::warn!("{url} is not valid JSON: {e}"))
        .ok()
}

/// Retrieve the deploy-time [`SiteConfig`], if one was deployed.
#[allow(clippy::future_not_send)]
pub async fn load_site_config() -> Option<SiteConfig> {
    retrieve_json(SITE_CONFIG_PATH).await
}
