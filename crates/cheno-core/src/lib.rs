//! cheno-core: Logo scene model and editor state (sans-IO).
//!
//! Holds everything the logo editor decides without touching the
//! browser: the static logo scene, the hover/selection state machine
//! with its layered fills, color parsing and formatting, the theme
//! context, and the deploy-time site artifacts.
//!
//! All browser interaction lives in `cheno-io`; rasterization lives in
//! `cheno-export`.

pub mod color;
pub mod editor;
pub mod render;
pub mod scene;
pub mod site;
pub mod theme;

pub use color::{Color, ColorError};
pub use editor::{Editor, EditorState, Focus, Status};
pub use render::{RenderGeneration, RenderTicket};
pub use scene::{Geometry, Group, Scene, Shape, ShapeRef, ViewBox};
pub use site::{HTACCESS, SiteConfig};
pub use theme::{ColorScheme, ThemeContext};
