use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("lessonobs_font_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_missing_explicit_font_is_an_error() {
    let path = make_temp_dir().join("missing.ttf");
    let err = enable_chart_text(Some(&path)).unwrap_err();
    match err {
        RenderError::Font { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_explicit_font_is_an_error() {
    let path = make_temp_dir().join("broken.ttf");
    fs::write(&path, b"definitely not a font").unwrap();
    let err = enable_chart_text(Some(&path)).unwrap_err();
    assert!(matches!(err, RenderError::Font { .. }));
    assert!(err.to_string().contains("broken.ttf"));
}

#[test]
fn test_system_font_loads_when_present() {
    let Some(path) = find_system_font() else {
        return;
    };
    assert!(enable_chart_text(Some(&path)).unwrap());
    assert!(enable_chart_text(None).unwrap());
}
