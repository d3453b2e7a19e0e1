//! Hover/selection status bar.

use cheno_core::Status;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdMousePointer};

/// Props for the [`StatusBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StatusBarProps {
    /// Labels to show.
    status: Status,
}

/// Shows the hovered shape (when it is not the selection) and the
/// selected shape.
#[component]
pub fn StatusBar(props: StatusBarProps) -> Element {
    rsx! {
        div { class: "status",
            span { class: "item",
                if let Some(ref hovered) = props.status.hovered {
                    Icon { width: 16, height: 16, icon: LdMousePointer }
                    " {hovered}"
                }
            }
            span { class: "item",
                if let Some(ref selected) = props.status.selected {
                    Icon { width: 16, height: 16, icon: LdCheck }
                    " {selected}"
                }
            }
        }
    }
}
