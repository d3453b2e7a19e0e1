use cheno_core::ThemeContext;
use cheno_io::{Home, fetch, theme};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdSun};

fn main() {
    init_logging();
    dioxus::launch(app);
}

/// Route `log` records to the browser console and panics to
/// `console.error`.
#[cfg(target_arch = "wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Another logger may already be installed; keep it.
    let _ = console_log::init_with_level(level);
}

#[cfg(not(target_arch = "wasm32"))]
const fn init_logging() {}

/// Root application component.
///
/// Owns the theme and provides it to descendants as a
/// `Signal<ThemeContext>`; the document itself is only written by the
/// effect here. Mounts exactly one [`Home`] editor inside `<main>`.
fn app() -> Element {
    // --- Theme ---
    let mut theme_ctx = use_signal(|| ThemeContext::new(theme::preferred_scheme()));
    use_context_provider(|| theme_ctx);

    use_effect(move || {
        if let Err(e) = theme::apply(theme_ctx()) {
            log::warn!("could not apply theme: {e}");
        }
    });

    let toggle_theme = move |_| {
        let next = theme_ctx().scheme.toggled();
        theme_ctx.set(ThemeContext::new(next));
    };

    // --- Site config written at deploy time (absent in development) ---
    let site = use_resource(fetch::load_site_config);
    let site_config = site.cloned().flatten();

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { class: "title", "Cheno" }
                button {
                    class: "theme-toggle",
                    aria_label: "Toggle theme",
                    onclick: toggle_theme,
                    if theme_ctx().scheme == cheno_core::ColorScheme::Dark {
                        Icon { width: 20, height: 20, icon: LdSun }
                    } else {
                        Icon { width: 20, height: 20, icon: LdMoon }
                    }
                }
            }

            main { id: "main", class: "content",
                ui-home { Home {} }
            }

            if let Some(config) = site_config {
                footer { class: "app-footer",
                    "{config.name} · {config.revision}"
                }
            }
        }
    }
}
