//! The logo editor page.

use std::rc::Rc;

use cheno_core::{Editor, RenderGeneration, ThemeContext};
use cheno_export::{ExportOptions, RenderArtifact};
use dioxus::prelude::*;

use super::controls::ControlPanel;
use super::scene::LogoScene;
use crate::{canvas, clock};

/// Id of the `<canvas>` that receives export renders.
pub const CANVAS_ID: &str = "dump";

/// Duration of the fade played on the canvas after a render.
const FADE_MS: f64 = 300.0;

/// Logo editor: the interactive scene beside the control panel.
///
/// Owns the editor state and the export bookkeeping. Exports run as
/// spawned tasks; while one is running the export button is disabled,
/// and if renders still overlap only the latest issued one publishes
/// its result. A failed export keeps the previous render and shows the
/// error in the panel.
///
/// Reads a `Signal<ThemeContext>` from context when one is provided.
#[component]
pub fn Home() -> Element {
    let editor = use_signal(Editor::default);
    let mut generation = use_signal(RenderGeneration::default);
    let mut artifact = use_signal(|| Option::<Rc<RenderArtifact>>::None);
    let mut export_error = use_signal(|| Option::<String>::None);
    let theme = try_use_context::<Signal<ThemeContext>>().map_or_else(ThemeContext::default, |t| t());

    let on_export = move |()| {
        let ticket = generation.write().begin();
        let snapshot = Editor::clone(&editor.peek());

        spawn(async move {
            // Yield so the disabled button paints before rasterizing.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let options = canvas::native_size(CANVAS_ID).unwrap_or_else(|e| {
                log::warn!("falling back to default export size: {e}");
                ExportOptions::default()
            });
            let outcome = cheno_export::export(&snapshot, options, clock::now_ms);

            if !generation.write().finish(ticket) {
                log::debug!("discarding superseded render");
                return;
            }

            match outcome {
                Ok(rendered) => {
                    if let Err(e) = canvas::paint(CANVAS_ID, &rendered.raster) {
                        log::warn!("could not paint render: {e}");
                    }
                    canvas::fade_in(CANVAS_ID, FADE_MS);
                    log::info!("render ready: {}", rendered.download_filename());
                    export_error.set(None);
                    artifact.set(Some(Rc::new(rendered)));
                }
                Err(e) => {
                    log::warn!("export failed: {e}");
                    export_error.set(Some(format!("Export failed: {e}")));
                }
            }
        });
    };

    rsx! {
        div { id: "page", class: "page", role: "main",
            div { class: "scene",
                LogoScene { editor, theme }
            }
            ControlPanel {
                editor,
                exporting: generation.read().in_flight(),
                artifact: artifact(),
                error: export_error(),
                on_export,
            }
        }
    }
}
