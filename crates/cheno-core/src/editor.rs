//! Hover/selection state machine of the logo editor.
//!
//! Hover and selection are each a [`Focus`] tagged union. Fills are
//! kept in two layers: the colors the user picked, and a hover overlay
//! derived from the hover focus. [`Editor::inline_fill`] composites
//! them, so a picked color can never be clobbered by the overlay and
//! leaving a shape needs no sentinel comparison to restore it.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::scene::{Scene, ShapeRef};

/// Either nothing, or one shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Focus {
    /// No shape.
    #[default]
    None,
    /// A single shape.
    Shape(ShapeRef),
}

impl Focus {
    /// The focused shape, if any.
    #[must_use]
    pub const fn shape(self) -> Option<ShapeRef> {
        match self {
            Self::None => None,
            Self::Shape(at) => Some(at),
        }
    }

    /// Whether `at` is the focused shape.
    #[must_use]
    pub fn is(self, at: ShapeRef) -> bool {
        self == Self::Shape(at)
    }
}

/// Combined view of the hover and selection focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Nothing hovered, nothing selected.
    Idle,
    /// Pointer over a shape, nothing selected.
    Hovering(ShapeRef),
    /// A shape is selected and the pointer is not over another one.
    Selected(ShapeRef),
    /// A shape is selected while the pointer is over a different one.
    SelectedAndHovering {
        /// The selected shape.
        selected: ShapeRef,
        /// The hovered shape.
        hovered: ShapeRef,
    },
}

/// Labels for the status bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    /// Hovered shape label, omitted when it is the selected shape.
    pub hovered: Option<String>,
    /// Selected shape label.
    pub selected: Option<String>,
}

/// Interactive editing state over a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    scene: Scene,
    hover: Focus,
    selection: Focus,
    hover_color: Color,
    user_fills: BTreeMap<ShapeRef, Color>,
    picker: Option<Color>,
}

impl Editor {
    /// Start editing `scene` with nothing hovered or selected.
    #[must_use]
    pub const fn new(scene: Scene) -> Self {
        Self {
            scene,
            hover: Focus::None,
            selection: Focus::None,
            hover_color: Color::HOVER,
            user_fills: BTreeMap::new(),
            picker: None,
        }
    }

    /// The scene being edited.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The transient hover-highlight color.
    #[must_use]
    pub const fn hover_color(&self) -> Color {
        self.hover_color
    }

    /// Current hover focus.
    #[must_use]
    pub const fn hovered(&self) -> Focus {
        self.hover
    }

    /// Current selection focus.
    #[must_use]
    pub const fn selected(&self) -> Focus {
        self.selection
    }

    /// Combined hover/selection state.
    #[must_use]
    pub const fn state(&self) -> EditorState {
        match (self.selection, self.hover) {
            (Focus::None, Focus::None) => EditorState::Idle,
            (Focus::None, Focus::Shape(hovered)) => EditorState::Hovering(hovered),
            (Focus::Shape(selected), Focus::None) => EditorState::Selected(selected),
            (Focus::Shape(selected), Focus::Shape(hovered)) => {
                if selected.group == hovered.group && selected.shape == hovered.shape {
                    EditorState::Selected(selected)
                } else {
                    EditorState::SelectedAndHovering { selected, hovered }
                }
            }
        }
    }

    /// The pointer entered shape `at`.
    ///
    /// Re-entering the hovered shape is a no-op. Hovering the selected
    /// shape is recorded but produces no highlight.
    pub fn pointer_enter(&mut self, at: ShapeRef) {
        if self.scene.shape(at).is_none() {
            log::warn!("pointer entered unknown shape {at:?}");
            return;
        }
        if self.hover.is(at) {
            return;
        }
        log::debug!("hover {:?} -> {at:?}", self.hover);
        self.hover = Focus::Shape(at);
    }

    /// The pointer left the whole scene.
    pub fn pointer_leave_scene(&mut self) {
        self.hover = Focus::None;
    }

    /// Shape `at` was clicked: it becomes the selection, the hover is
    /// cleared, and the picker shows the shape's computed fill.
    pub fn click(&mut self, at: ShapeRef) {
        if self.scene.shape(at).is_none() {
            log::warn!("clicked unknown shape {at:?}");
            return;
        }
        self.hover = Focus::None;
        self.selection = Focus::Shape(at);
        self.picker = Some(self.computed_fill(at));
        log::debug!("selected {at:?}");
    }

    /// The picker changed: record `color` as the selected shape's fill.
    ///
    /// Returns `false` (and changes nothing) when nothing is selected.
    pub fn set_selected_color(&mut self, color: Color) -> bool {
        let Some(at) = self.selection.shape() else {
            return false;
        };
        self.picker = Some(color);
        self.user_fills.insert(at, color);
        true
    }

    /// Hex value for the color picker, present once a shape is selected.
    #[must_use]
    pub fn picker_value(&self) -> Option<String> {
        self.picker.map(Color::to_hex)
    }

    /// Fill written on the shape itself, if any.
    ///
    /// A user-picked color always wins. Otherwise a hovered shape that
    /// is not selected shows the hover color. Otherwise the fill is
    /// unset and the shape falls back to the scene default.
    #[must_use]
    pub fn inline_fill(&self, at: ShapeRef) -> Option<Color> {
        if let Some(&color) = self.user_fills.get(&at) {
            return Some(color);
        }
        (self.hover.is(at) && !self.selection.is(at)).then_some(self.hover_color)
    }

    /// Resolved fill of a shape ignoring the hover overlay, as a browser
    /// would report it once the highlight is removed.
    #[must_use]
    pub fn computed_fill(&self, at: ShapeRef) -> Color {
        self.user_fills
            .get(&at)
            .copied()
            .unwrap_or(self.scene.default_fill)
    }

    /// Fill the shape is painted with right now.
    #[must_use]
    pub fn painted_fill(&self, at: ShapeRef) -> Color {
        self.inline_fill(at).unwrap_or(self.scene.default_fill)
    }

    /// Labels for the status bar.
    #[must_use]
    pub fn status(&self) -> Status {
        let hovered = match self.hover {
            Focus::Shape(at) if !self.selection.is(at) => self.scene.label(at),
            _ => None,
        };
        let selected = self.selection.shape().and_then(|at| self.scene.label(at));
        Status { hovered, selected }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Scene::logo())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn editor() -> Editor {
        Editor::default()
    }

    fn at(editor: &Editor, group: &str, child: &str) -> ShapeRef {
        editor.scene().find(group, child).unwrap()
    }

    #[test]
    fn starts_idle() {
        let e = editor();
        assert_eq!(e.state(), EditorState::Idle);
        assert_eq!(e.picker_value(), None);
        assert_eq!(e.status(), Status::default());
    }

    #[test]
    fn hovering_unset_shape_highlights_and_leaving_clears() {
        let mut e = editor();
        for (shape, _) in e.scene().clone().shapes() {
            e.pointer_enter(shape);
            assert_eq!(e.inline_fill(shape), Some(Color::HOVER));
            e.pointer_leave_scene();
            assert_eq!(e.inline_fill(shape), None);
        }
    }

    #[test]
    fn moving_between_shapes_moves_the_highlight() {
        let mut e = editor();
        let b = at(&e, "Logotype", "B");
        let s = at(&e, "Logotype", "s");
        e.pointer_enter(b);
        e.pointer_enter(s);
        assert_eq!(e.inline_fill(b), None);
        assert_eq!(e.inline_fill(s), Some(Color::HOVER));
        assert_eq!(e.state(), EditorState::Hovering(s));
    }

    #[test]
    fn custom_fill_survives_hover_and_leave() {
        let mut e = editor();
        let t = at(&e, "Logotype", "t");
        let custom = Color::new(0, 56, 101);
        e.click(t);
        assert!(e.set_selected_color(custom));

        let o = at(&e, "Logotype", "o");
        e.click(o);
        e.pointer_enter(t);
        assert_eq!(e.inline_fill(t), Some(custom));
        e.pointer_leave_scene();
        assert_eq!(e.inline_fill(t), Some(custom));
    }

    #[test]
    fn picked_hover_colored_fill_is_kept() {
        // A user may pick the highlight color itself; it must persist.
        let mut e = editor();
        let r = at(&e, "Logotype", "r");
        e.click(r);
        e.set_selected_color(Color::HOVER);
        e.click(at(&e, "Logotype", "g"));
        e.pointer_enter(r);
        e.pointer_leave_scene();
        assert_eq!(e.inline_fill(r), Some(Color::HOVER));
    }

    #[test]
    fn hovering_the_selected_shape_shows_no_highlight() {
        let mut e = editor();
        let d = at(&e, "Logotype", "d");
        e.click(d);
        e.pointer_enter(d);
        assert_eq!(e.inline_fill(d), None);
        assert_eq!(e.hovered(), Focus::Shape(d));
        assert_eq!(e.state(), EditorState::Selected(d));
        assert_eq!(e.status().hovered, None);
    }

    #[test]
    fn click_clears_hover_and_reads_computed_fill() {
        let mut e = editor();
        let b = at(&e, "Logotype", "B");
        let l = at(&e, "Pictogram", "L");
        e.pointer_enter(b);
        e.click(l);
        assert_eq!(e.hovered(), Focus::None);
        assert_eq!(e.inline_fill(b), None);
        assert_eq!(e.selected(), Focus::Shape(l));
        assert_eq!(e.picker_value().as_deref(), Some("#000000"));
    }

    #[test]
    fn selection_persists_across_hover_changes() {
        let mut e = editor();
        let eye = at(&e, "Pictogram", "left-eye");
        let other = at(&e, "Pictogram", "right-eye");
        e.click(eye);
        e.pointer_enter(other);
        assert_eq!(
            e.state(),
            EditorState::SelectedAndHovering {
                selected: eye,
                hovered: other
            }
        );
        e.pointer_leave_scene();
        assert_eq!(e.state(), EditorState::Selected(eye));
    }

    #[test]
    fn reselecting_a_colored_shape_shows_its_color() {
        let mut e = editor();
        let g = at(&e, "Logotype", "g");
        e.click(g);
        e.set_selected_color(Color::new(34, 56, 200));
        e.click(at(&e, "Logotype", "L"));
        e.click(g);
        assert_eq!(e.picker_value().as_deref(), Some("#2238c8"));
    }

    #[test]
    fn color_without_selection_is_ignored() {
        let mut e = editor();
        assert!(!e.set_selected_color(Color::new(1, 2, 3)));
        assert_eq!(e.picker_value(), None);
    }

    #[test]
    fn unknown_shapes_are_ignored() {
        let mut e = editor();
        e.pointer_enter(ShapeRef::new(9, 9));
        e.click(ShapeRef::new(0, 42));
        assert_eq!(e.state(), EditorState::Idle);
    }

    #[test]
    fn status_labels_follow_focus() {
        let mut e = editor();
        let b = at(&e, "Pictogram", "B");
        let l = at(&e, "Logotype", "L");
        e.click(b);
        e.pointer_enter(l);
        let status = e.status();
        assert_eq!(status.selected.as_deref(), Some("Pictogram : B"));
        assert_eq!(status.hovered.as_deref(), Some("Logotype : L"));
    }
}
