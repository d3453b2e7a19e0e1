//! Integration test: export the edited logo and decode the resulting PNG.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cheno_core::{Color, Editor};
use cheno_export::{ExportOptions, export};

#[test]
fn recolored_logo_round_trips_through_png() {
    let mut editor = Editor::default();
    let shapes: Vec<_> = editor.scene().shapes().map(|(at, _)| at).collect();
    let red = Color::new(255, 0, 0);
    for at in shapes {
        editor.click(at);
        editor.set_selected_color(red);
    }

    let artifact = export(&editor, ExportOptions::default(), || 42).expect("export should succeed");
    assert_eq!(artifact.download_filename(), "best-lodger-42.png");

    let encoded = artifact
        .data_url
        .strip_prefix("data:image/png;base64,")
        .expect("data URL prefix");
    let png = STANDARD.decode(encoded).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (300, 150));
    assert_eq!(decoded.as_raw().as_slice(), artifact.raster.as_raw());

    // Every painted pixel is some shade of the picked red.
    let painted: Vec<_> = decoded.pixels().filter(|p| p.0[3] > 0).collect();
    assert!(!painted.is_empty(), "expected the logo to cover some pixels");
    assert!(painted.iter().all(|p| p.0[1] == 0 && p.0[2] == 0));
}

#[test]
fn back_to_back_exports_are_independent() {
    let mut editor = Editor::default();
    let first = export(&editor, ExportOptions::default(), || 1).unwrap();

    let eye = editor.scene().find("Pictogram", "left-eye").unwrap();
    editor.click(eye);
    editor.set_selected_color(Color::new(0, 0, 255));
    let second = export(&editor, ExportOptions::default(), || 2).unwrap();

    assert_ne!(first.download_filename(), second.download_filename());
    assert!(second.data_url.starts_with("data:image/png;base64,"));
    assert_ne!(first.raster, second.raster);
}
