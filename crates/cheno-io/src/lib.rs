//! cheno-io: Browser I/O and Dioxus component library.
//!
//! Paints export renders onto a canvas, retrieves runtime files,
//! writes the theme to the document, and provides the logo editor
//! components for the cheno web application.

pub mod canvas;
pub mod clock;
pub mod components;
pub mod fetch;
pub mod theme;

pub use components::{ControlPanel, Home, LogoScene, StatusBar};
