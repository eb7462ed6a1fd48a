/// Renderer configuration, fixed at initialization.
///
/// Covers the host viewport scale used by the mesh pipeline, the single
/// light direction, the wireframe overlay and the near-plane threshold of
/// the sprite perspective path.

use bitflags::bitflags;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::engine_bail;
use crate::sink::Rgba;

bitflags! {
    /// Per-renderer draw toggles
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u32 {
        /// Outline every surviving mesh triangle after filling it
        const WIREFRAME = 1 << 0;
    }
}

/// Host screen is 1280x720; projections are centred on it.
pub const DEFAULT_VIEWPORT_HALF_WIDTH: f32 = 640.0;
pub const DEFAULT_VIEWPORT_HALF_HEIGHT: f32 = 360.0;

/// Sprites at or closer than this depth are dropped by the perspective path.
pub const DEFAULT_NEAR_EPSILON: f32 = 1e-4;

/// Layer rendered by `FrameDriver::render_foreground`
pub const DEFAULT_FOREGROUND_LAYER: &str = "foreground_mesh";

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Horizontal scale applied to projected mesh vertices
    pub viewport_half_width: f32,
    /// Vertical scale applied to projected mesh vertices
    pub viewport_half_height: f32,
    /// Flat-shading light direction (normalized by `validated`)
    pub light_direction: Vec3,
    /// Draw toggles
    pub flags: RenderFlags,
    /// Wireframe overlay color
    pub wireframe_color: Rgba,
    /// Wireframe stroke width
    pub wireframe_width: f32,
    /// Sprite perspective cull threshold
    pub near_epsilon: f32,
    /// Mesh layer drawn by the dedicated foreground pass
    pub foreground_layer: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            viewport_half_width: DEFAULT_VIEWPORT_HALF_WIDTH,
            viewport_half_height: DEFAULT_VIEWPORT_HALF_HEIGHT,
            light_direction: Vec3::new(0.75, 0.0, 0.5).normalize(),
            flags: RenderFlags::WIREFRAME,
            wireframe_color: Rgba::new(255, 128, 255, 255),
            wireframe_width: 1.0,
            near_epsilon: DEFAULT_NEAR_EPSILON,
            foreground_layer: DEFAULT_FOREGROUND_LAYER.to_string(),
        }
    }
}

impl RendererConfig {
    /// Check the configuration and normalize the light direction.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the light direction has no length,
    /// a viewport scale is not strictly positive, or the near threshold is
    /// negative.
    pub fn validated(mut self) -> Result<Self> {
        self.light_direction = self.light_direction.try_normalize().ok_or_else(|| {
            Error::InvalidConfig(format!(
                "light direction {:?} cannot be normalized",
                self.light_direction
            ))
        })?;

        if !(self.viewport_half_width > 0.0 && self.viewport_half_height > 0.0) {
            engine_bail!(
                "tessera::RendererConfig",
                Error::InvalidConfig(format!(
                    "viewport scale must be positive, got {}x{}",
                    self.viewport_half_width, self.viewport_half_height
                ))
            );
        }

        if !(self.near_epsilon >= 0.0) {
            engine_bail!(
                "tessera::RendererConfig",
                Error::InvalidConfig(format!("near epsilon must be non-negative, got {}", self.near_epsilon))
            );
        }

        Ok(self)
    }

    /// Whether the wireframe overlay is drawn
    pub fn wireframe(&self) -> bool {
        self.flags.contains(RenderFlags::WIREFRAME)
    }

    /// Toggle the wireframe overlay
    pub fn set_wireframe(&mut self, enabled: bool) {
        self.flags.set(RenderFlags::WIREFRAME, enabled);
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
