//! Integration test: a full hover → move → select → recolor session on the logo.

#![allow(clippy::unwrap_used)]

use cheno_core::{Color, Editor, EditorState, Focus, Scene};

#[test]
fn hover_move_select_and_recolor() {
    let mut editor = Editor::new(Scene::logo());
    let b = editor.scene().find("Logotype", "B").unwrap();
    let l = editor.scene().find("Pictogram", "L").unwrap();

    editor.pointer_enter(b);
    assert_eq!(editor.inline_fill(b), Some(editor.hover_color()));

    editor.pointer_enter(l);
    assert_eq!(editor.inline_fill(b), None);
    assert_eq!(editor.inline_fill(l), Some(Color::HOVER));

    editor.click(l);
    let selected = editor.selected().shape().unwrap();
    let scene = editor.scene();
    assert_eq!(scene.group(selected).unwrap().name, "Pictogram");
    assert_eq!(scene.shape(selected).unwrap().child, "L");
    assert_eq!(editor.hovered(), Focus::None);
    assert_eq!(editor.state(), EditorState::Selected(l));

    let red = Color::parse_css("#ff0000").unwrap();
    assert!(editor.set_selected_color(red));
    assert_eq!(editor.inline_fill(l).map(Color::to_hex).as_deref(), Some("#ff0000"));
    assert_eq!(editor.picker_value().as_deref(), Some("#ff0000"));
}

#[test]
fn selection_survives_a_tour_of_every_other_shape() {
    let mut editor = Editor::default();
    let eye = editor.scene().find("Pictogram", "right-eye").unwrap();
    editor.click(eye);

    let others: Vec<_> = editor
        .scene()
        .shapes()
        .map(|(at, _)| at)
        .filter(|&at| at != eye)
        .collect();
    for at in others {
        editor.pointer_enter(at);
        assert_eq!(editor.painted_fill(at), Color::HOVER);
        assert_eq!(editor.selected(), Focus::Shape(eye));
    }
    editor.pointer_leave_scene();
    assert_eq!(editor.state(), EditorState::Selected(eye));
    assert!(
        editor
            .scene()
            .shapes()
            .all(|(at, _)| editor.inline_fill(at).is_none())
    );
}
