//! Unit tests for error.rs

use crate::error::{Error, Result};
use crate::layer::ContentKind;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_degenerate_camera_display() {
    let err = Error::DegenerateCamera("target coincides with position".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Degenerate camera"));
    assert!(display.contains("target coincides"));
}

#[test]
fn test_basis_not_ready_display() {
    assert_eq!(
        format!("{}", Error::BasisNotReady),
        "View basis not computed for this frame"
    );
}

#[test]
fn test_unknown_layer_display() {
    let display = format!("{}", Error::UnknownLayer("hud".to_string()));
    assert_eq!(display, "Unknown layer: 'hud'");
}

#[test]
fn test_content_kind_mismatch_display() {
    let err = Error::ContentKindMismatch {
        layer: "background".to_string(),
        expected: ContentKind::Mesh,
        found: ContentKind::Sprite,
    };
    let display = format!("{}", err);
    assert!(display.contains("'background'"));
    assert!(display.contains("Sprite"));
    assert!(display.contains("Mesh"));
}

#[test]
fn test_invalid_mesh_and_sink_display() {
    assert!(format!("{}", Error::InvalidMesh("bad stride".to_string())).starts_with("Invalid mesh"));
    assert!(format!("{}", Error::Sink("full".to_string())).starts_with("Draw sink error"));
    assert!(format!("{}", Error::InvalidConfig("zero light".to_string())).starts_with("Invalid config"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::BasisNotReady;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::UnknownLayer("sky".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::BasisNotReady);
}

// ============================================================================
// MACROS
// ============================================================================

fn bail_when(fail: bool) -> Result<u32> {
    if fail {
        crate::engine_bail!("tessera::Test", Error::InvalidMesh("requested".to_string()));
    }
    Ok(3)
}

#[test]
fn test_engine_bail_returns_error() {
    assert_eq!(bail_when(false), Ok(3));
    assert_eq!(bail_when(true), Err(Error::InvalidMesh("requested".to_string())));
}

#[test]
fn test_engine_err_evaluates_to_error() {
    let err = crate::engine_err!("tessera::Test", Error::BasisNotReady);
    assert_eq!(err, Error::BasisNotReady);
}
