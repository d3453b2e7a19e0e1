//! Side control panel: selected shape, color picker, export, and the
//! rendered snapshot with its download link.

use std::rc::Rc;

use cheno_core::{Color, Editor};
use cheno_export::RenderArtifact;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCrosshair, LdSave};

use super::home::CANVAS_ID;
use super::status::StatusBar;

/// Props for the [`ControlPanel`] component.
#[derive(Props, Clone)]
pub struct ControlPanelProps {
    /// Shared editor state; the color picker writes into it.
    editor: Signal<Editor>,
    /// Whether an export is running. Disables the export button.
    exporting: bool,
    /// Latest published render, if any.
    artifact: Option<Rc<RenderArtifact>>,
    /// Message from the last failed export, if any.
    error: Option<String>,
    /// Called when the export button is clicked.
    on_export: EventHandler<()>,
}

impl PartialEq for ControlPanelProps {
    fn eq(&self, other: &Self) -> bool {
        let artifacts_eq = match (&self.artifact, &other.artifact) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        artifacts_eq
            && self.editor == other.editor
            && self.exporting == other.exporting
            && self.error == other.error
            && self.on_export == other.on_export
    }
}

/// Editor controls.
///
/// The color field appears once a shape is selected; every change is
/// applied to the selected shape immediately. The canvas below the
/// export button receives each published render.
#[component]
pub fn ControlPanel(props: ControlPanelProps) -> Element {
    let mut editor = props.editor;
    let state = editor.read();
    let selected_label = state
        .selected()
        .shape()
        .and_then(|at| state.scene().label(at));
    let picker = state.picker_value().unwrap_or_else(|| Color::BLACK.to_hex());
    let status = state.status();

    let on_color = move |evt: FormEvent| match Color::parse_css(&evt.value()) {
        Ok(color) => {
            editor.write().set_selected_color(color);
        }
        Err(e) => log::warn!("ignoring picker value: {e}"),
    };

    let on_export = props.on_export;
    let export_class = if props.exporting {
        "btn btn--disabled"
    } else {
        "btn btn--primary"
    };

    rsx! {
        div { class: "controls",
            h4 { class: "controls-title", "Editeur" }

            if let Some(ref label) = selected_label {
                h3 { class: "my-location",
                    Icon { width: 20, height: 20, icon: LdCrosshair }
                    " {label}"
                }
                div { class: "field",
                    label { r#for: "current-field-color", "Couleur" }
                    input {
                        id: "current-field-color",
                        class: "current-field-color",
                        r#type: "color",
                        value: "{picker}",
                        oninput: on_color,
                    }
                }
            }

            div { class: "field right",
                button {
                    class: "{export_class}",
                    disabled: props.exporting,
                    onclick: move |_| on_export.call(()),
                    "Générer"
                }
            }

            if let Some(ref err) = props.error {
                p { class: "error", "{err}" }
            }

            if props.artifact.is_some() {
                span { class: "render-title", "Rendu" }
            }
            div { class: "render-container",
                canvas { id: CANVAS_ID }
                if let Some(ref artifact) = props.artifact {
                    {render_download(artifact)}
                }
            }

            StatusBar { status }
        }
    }
}

/// Download link for a published render.
fn render_download(artifact: &RenderArtifact) -> Element {
    let href = artifact.data_url.clone();
    let filename = artifact.download_filename();
    rsx! {
        a {
            class: "button download",
            href: "{href}",
            download: "{filename}",
            title: "{filename}",
            Icon { width: 20, height: 20, icon: LdSave }
        }
    }
}
