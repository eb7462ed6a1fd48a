//! Error types for the Tessera renderer
//!
//! Degenerate camera geometry is the one hard failure of a frame. Culls
//! (near-plane, back-face) are silent skips and never produce an error.

use std::fmt;
use crate::layer::ContentKind;

/// Result type for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Renderer errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Zero-length forward/right/up vector while building the view basis
    DegenerateCamera(String),

    /// A render entry point ran without a valid basis for the current frame
    BasisNotReady,

    /// Lookup of a layer name that was never registered
    UnknownLayer(String),

    /// Actor access or render call on a layer holding the other content kind
    ContentKindMismatch {
        layer: String,
        expected: ContentKind,
        found: ContentKind,
    },

    /// Malformed mesh buffers (vertex stride, index range, index count)
    InvalidMesh(String),

    /// Configuration rejected by `RendererConfig::validated`
    InvalidConfig(String),

    /// The host draw sink rejected a primitive
    Sink(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateCamera(msg) => write!(f, "Degenerate camera: {}", msg),
            Error::BasisNotReady => write!(f, "View basis not computed for this frame"),
            Error::UnknownLayer(name) => write!(f, "Unknown layer: '{}'", name),
            Error::ContentKindMismatch { layer, expected, found } => write!(
                f,
                "Layer '{}' holds {:?} actors, expected {:?}",
                layer, found, expected
            ),
            Error::InvalidMesh(msg) => write!(f, "Invalid mesh: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::Sink(msg) => write!(f, "Draw sink error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error (with file:line) and evaluate to it
///
/// ```ignore
/// return Err(engine_err!("tessera::LayerRegistry", Error::UnknownLayer(name.to_string())));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::tessera::Error = $error;
        $crate::engine_error!($source, "{}", error);
        error
    }};
}

/// Log an error (with file:line) and return it from the current function
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $error:expr) => {
        return Err($crate::engine_err!($source, $error))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
