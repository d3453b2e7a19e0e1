//! Dioxus UI components for the logo editor.
//!
//! Provides the interactive logo scene, the side control panel with
//! color picker and export, the hover/selection status bar, and the
//! [`Home`] page that wires them together.

mod controls;
mod home;
mod scene;
mod status;

pub use controls::ControlPanel;
pub use home::{CANVAS_ID, Home};
pub use scene::LogoScene;
pub use status::StatusBar;
