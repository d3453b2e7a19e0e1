//! SVG serializer for the live scene.
//!
//! Emits the scene the way the editor shows it: each group as a `<g>`
//! tagged with `data-object`, each shape tagged with `data-child`, and
//! every composited fill written inline as `style="fill: ..."`. Shapes
//! without an inline fill fall back to the root `fill` attribute.
//!
//! Uses the [`svg`] crate for document construction and attribute
//! escaping. Pure function, returns a `String`.

use svg::Document;
use svg::node::element::{Group as SvgGroup, Path, Polygon, Title};

use cheno_core::{Editor, Geometry, Shape, ShapeRef};

/// Optional metadata embedded in the document.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title, emitted as `<title>`.
    pub title: Option<&'a str>,
}

/// Serialize the editor's scene with its current fills.
#[must_use]
pub fn scene_to_svg(editor: &Editor, metadata: &SvgMetadata<'_>) -> String {
    let scene = editor.scene();
    let vb = scene.view_box;

    let mut doc = Document::new()
        .set("id", "object")
        .set("width", vb.width)
        .set("height", vb.height)
        .set("viewBox", vb.to_string())
        .set("fill", scene.default_fill.to_hex());

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    for (gi, group) in scene.groups.iter().enumerate() {
        let mut g = SvgGroup::new().set("data-object", group.name);
        for (si, shape) in group.shapes.iter().enumerate() {
            let at = ShapeRef::new(gi, si);
            let style = editor
                .inline_fill(at)
                .map(|color| format!("fill: {}", color.to_hex()));
            g = add_shape(g, shape, style);
        }
        doc = doc.add(g);
    }

    doc.to_string()
}

fn add_shape(group: SvgGroup, shape: &Shape, style: Option<String>) -> SvgGroup {
    match shape.geometry {
        Geometry::Path { d, transform } => {
            let mut path = Path::new().set("data-child", shape.child).set("d", d);
            if let Some(transform) = transform {
                path = path.set("transform", transform);
            }
            if let Some(style) = style {
                path = path.set("style", style);
            }
            group.add(path)
        }
        Geometry::Polygon { points } => {
            let mut polygon = Polygon::new()
                .set("data-child", shape.child)
                .set("points", points);
            if let Some(style) = style {
                polygon = polygon.set("style", style);
            }
            group.add(polygon)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cheno_core::Color;

    use super::*;

    fn no_meta() -> SvgMetadata<'static> {
        SvgMetadata::default()
    }

    #[test]
    fn untouched_scene_has_no_inline_fills() {
        let svg = scene_to_svg(&Editor::default(), &no_meta());
        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 200.08 46.78""#));
        assert!(svg.contains(r#"data-object="Logotype""#));
        assert!(svg.contains(r#"data-object="Pictogram""#));
        assert!(!svg.contains("style="));
        assert_eq!(svg.matches("data-child=").count(), 14);
        assert_eq!(svg.matches("<polygon").count(), 1);
    }

    #[test]
    fn hover_overlay_is_serialized() {
        let mut editor = Editor::default();
        let b = editor.scene().find("Logotype", "B").unwrap();
        editor.pointer_enter(b);
        let svg = scene_to_svg(&editor, &no_meta());
        assert_eq!(svg.matches("fill: #ffc0cb").count(), 1);
    }

    #[test]
    fn picked_fill_is_serialized_on_polygon() {
        let mut editor = Editor::default();
        let roof = editor.scene().find("Pictogram", "L").unwrap();
        editor.click(roof);
        editor.set_selected_color(Color::new(255, 0, 0));
        let svg = scene_to_svg(&editor, &no_meta());
        assert!(svg.contains("fill: #ff0000"));
    }

    #[test]
    fn title_is_emitted_when_present() {
        let svg = scene_to_svg(
            &Editor::default(),
            &SvgMetadata {
                title: Some("Best Lodger"),
            },
        );
        assert!(svg.contains("<title>"));
        assert!(svg.contains("Best Lodger"));
    }
}
