/// Renderer state - everything a frame reads, in one owned object.

use crate::camera::{Camera, CameraModel};
use crate::config::RendererConfig;
use crate::error::Result;
use crate::engine_info;
use crate::layer::LayerRegistry;

/// Camera model, layer registry and configuration.
///
/// Constructed once and handed to a `FrameDriver`. There is no global
/// renderer state.
#[derive(Debug, Default)]
pub struct RendererState {
    pub camera: CameraModel,
    pub layers: LayerRegistry,
    config: RendererConfig,
}

impl RendererState {
    /// Create state from a camera and a configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn new(camera: Camera, config: RendererConfig) -> Result<Self> {
        let config = config.validated()?;
        engine_info!(
            "tessera::RendererState",
            "Renderer state created (viewport {}x{}, wireframe {})",
            config.viewport_half_width * 2.0,
            config.viewport_half_height * 2.0,
            if config.wireframe() { "on" } else { "off" }
        );

        Ok(Self {
            camera: CameraModel::new(camera),
            layers: LayerRegistry::new(),
            config,
        })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Toggle the wireframe overlay (between frames)
    pub fn set_wireframe(&mut self, enabled: bool) {
        self.config.set_wireframe(enabled);
    }
}
