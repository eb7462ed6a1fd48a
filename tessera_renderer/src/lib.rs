/*!
# Tessera Renderer

Camera, projection and layer-composition core of a real-time 2.5D renderer.

The crate sits between application actors (sprites and textured meshes) and
a host's drawing primitives. It rasterizes nothing: each frame it derives a
camera basis, walks z-sorted layers, projects actors, and emits sprite,
triangle and line calls into a host-provided `DrawSink`.

## Architecture

- **CameraModel**: camera record + per-frame orthonormal view basis
- **LayerRegistry**: named layers sorted by z, each owning its actors
- **SpritePipeline**: screen / orthographic / perspective sprite projection
- **MeshPipeline**: vertex transform, back-face culling, flat shading
- **FrameDriver**: `tick()` plus the designated-layer render path
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod camera;
pub mod layer;
pub mod pipeline;
pub mod sink;
pub mod frame;

// Main tessera namespace module
pub mod tessera {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{
        RendererConfig, RenderFlags,
        DEFAULT_VIEWPORT_HALF_WIDTH, DEFAULT_VIEWPORT_HALF_HEIGHT,
        DEFAULT_NEAR_EPSILON, DEFAULT_FOREGROUND_LAYER,
    };

    // Frame entry points
    pub use crate::frame::{FrameDriver, FrameHost, DrawPass, RendererState};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod layer {
        pub use crate::layer::*;
    }

    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    pub mod sink {
        pub use crate::sink::*;
    }
}

// Re-export math library at crate root
pub use glam;
