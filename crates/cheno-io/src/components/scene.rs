//! Interactive SVG rendering of the logo scene.

use cheno_core::{Editor, Geometry, Shape, ShapeRef, ThemeContext};
use dioxus::prelude::*;

/// Props for the [`LogoScene`] component.
#[derive(Props, Clone, PartialEq)]
pub struct LogoSceneProps {
    /// Shared editor state; pointer events are written back into it.
    editor: Signal<Editor>,
    /// Active theme.
    theme: ThemeContext,
}

/// Renders the editor's scene as inline SVG.
///
/// Each shape reports pointer-enter and click; leaving the `<svg>`
/// clears the hover. Fills come from [`Editor::inline_fill`], so the
/// markup always reflects the composited hover and picked colors.
#[component]
pub fn LogoScene(props: LogoSceneProps) -> Element {
    let mut editor = props.editor;
    let state = editor.read();
    let scene = state.scene();
    let view_box = scene.view_box.to_string();
    let default_fill = scene.default_fill.to_hex();
    let scheme = props.theme.scheme;

    rsx! {
        svg {
            id: "object",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{view_box}",
            fill: "{default_fill}",
            class: "scene-svg scene-svg--{scheme}",
            onmouseleave: move |_| editor.write().pointer_leave_scene(),

            for (gi, group) in scene.groups.iter().enumerate() {
                g { key: "{group.name}", "data-object": group.name,
                    for (si, shape) in group.shapes.iter().enumerate() {
                        {render_shape(props.editor, &state, ShapeRef::new(gi, si), shape)}
                    }
                }
            }
        }
    }
}

/// Render one shape with its inline fill and pointer handlers.
fn render_shape(mut editor: Signal<Editor>, state: &Editor, at: ShapeRef, shape: &Shape) -> Element {
    let style = state
        .inline_fill(at)
        .map(|color| format!("fill: {}", color.to_hex()));
    let class = if state.selected().is(at) {
        "shape shape--selected"
    } else {
        "shape"
    };

    match shape.geometry {
        Geometry::Path { d, transform } => rsx! {
            path {
                "data-child": shape.child,
                class: class,
                d: d,
                transform: transform,
                style: style,
                onmouseenter: move |_| editor.write().pointer_enter(at),
                onclick: move |_| editor.write().click(at),
            }
        },
        Geometry::Polygon { points } => rsx! {
            polygon {
                "data-child": shape.child,
                class: class,
                points: points,
                style: style,
                onmouseenter: move |_| editor.write().pointer_enter(at),
                onclick: move |_| editor.write().click(at),
            }
        },
    }
}
