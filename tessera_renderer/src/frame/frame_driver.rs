/// Frame driver - the host-facing per-frame entry points.
///
/// Two independent render paths exist and are never merged:
/// - `tick()` refreshes the camera basis and hands the driver to the host,
///   which runs the sorted walk over every layer (`render_layers`).
/// - `render_designated_layer()` draws one mesh layer directly, bypassing
///   the sorted walk. The host decides when, relative to its own draw order.
///
/// Both paths use the basis from the most recent successful `tick()`.

use crate::camera::{Camera, FrameView};
use crate::error::{Error, Result};
use crate::layer::{ContentKind, Layer, LayerDesc, LayerKey, LayerRegistry, ProjectionMode};
use crate::pipeline::{DrawStats, MeshPipeline, SpritePipeline};
use crate::sink::DrawSink;
use crate::{engine_err, engine_trace};
use super::renderer_state::RendererState;

// ============================================================================
// Host traits
// ============================================================================

/// Something that can emit a frame's draw calls into a sink
pub trait DrawPass {
    fn draw(&self, sink: &mut dyn DrawSink) -> Result<()>;
}

/// Host-side per-frame primitive collection.
///
/// `tick()` calls `present` once per successful frame; the host runs the
/// pass against its own sink whenever its draw order reaches it.
pub trait FrameHost {
    fn present(&mut self, pass: &dyn DrawPass) -> Result<()>;
}

// ============================================================================
// FrameDriver
// ============================================================================

/// Owns the renderer state and drives one frame at a time
#[derive(Debug, Default)]
pub struct FrameDriver {
    state: RendererState,
}

impl FrameDriver {
    pub fn new(state: RendererState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &RendererState {
        &self.state
    }

    /// Mutable state access, for use between frames
    pub fn state_mut(&mut self) -> &mut RendererState {
        &mut self.state
    }

    pub fn camera(&self) -> &Camera {
        self.state.camera.camera()
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        self.state.camera.camera_mut()
    }

    pub fn layers(&self) -> &LayerRegistry {
        &self.state.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerRegistry {
        &mut self.state.layers
    }

    /// Shorthand for `layers_mut().register_layer(desc)`
    pub fn register_layer(&mut self, desc: LayerDesc) -> LayerKey {
        self.state.layers.register_layer(desc)
    }

    // ===== FRAME ENTRY POINTS =====

    /// Start a frame: refresh the camera basis, then present to the host.
    ///
    /// # Errors
    ///
    /// A degenerate camera aborts the frame: the error is returned, nothing
    /// is presented, and both render paths refuse to draw until the next
    /// successful tick.
    pub fn tick(&mut self, host: &mut dyn FrameHost) -> Result<()> {
        self.state.camera.refresh_basis()?;
        host.present(&*self)
    }

    /// Basis snapshot for the current frame
    fn frame_view(&self) -> Result<&FrameView> {
        self.state
            .camera
            .frame_view()
            .ok_or(Error::BasisNotReady)
    }

    /// Sorted walk: every layer, low z first, dispatched on its content
    /// kind and projection mode.
    ///
    /// # Errors
    ///
    /// `Error::BasisNotReady` before the first successful tick (or after a
    /// failed one), or any error raised by the sink.
    pub fn render_layers(&self, sink: &mut dyn DrawSink) -> Result<DrawStats> {
        let view = self.frame_view()?;
        let config = self.state.config();
        let sprites = SpritePipeline::new(view, config.near_epsilon);
        let meshes = MeshPipeline::from_config(view, config);

        let mut stats = DrawStats::default();
        for layer in self.state.layers.sorted_layers() {
            stats.layers += 1;
            Self::dispatch(layer, &sprites, &meshes, sink, &mut stats)?;
        }

        engine_trace!(
            "tessera::FrameDriver",
            "Frame: {} layers, {} sprites ({} culled), {} triangles ({} culled), {} lines",
            stats.layers, stats.sprites_drawn, stats.sprites_culled,
            stats.triangles_drawn, stats.triangles_culled, stats.lines_drawn
        );
        Ok(stats)
    }

    fn dispatch(
        layer: &Layer,
        sprites: &SpritePipeline<'_>,
        meshes: &MeshPipeline<'_>,
        sink: &mut dyn DrawSink,
        stats: &mut DrawStats,
    ) -> Result<()> {
        match layer.content() {
            ContentKind::Sprite => {
                let actors = layer.actors().as_sprites().unwrap_or(&[]);
                match layer.projection() {
                    ProjectionMode::Screen => sprites.draw_layer_screen(actors, sink, stats),
                    ProjectionMode::Orthographic => sprites.draw_layer_orthographic(actors, sink, stats),
                    ProjectionMode::Perspective => sprites.draw_layer_perspective(actors, sink, stats),
                }
            }
            ContentKind::Mesh => {
                let actors = layer.actors().as_meshes().unwrap_or(&[]);
                match layer.projection() {
                    ProjectionMode::Screen => meshes.draw_layer_screen(actors, sink, stats),
                    ProjectionMode::Orthographic => meshes.draw_layer_orthographic(actors, sink, stats),
                    ProjectionMode::Perspective => meshes.draw_layer_perspective(actors, sink, stats),
                }
            }
        }
    }

    /// Draw one mesh layer through the perspective mesh path, regardless of
    /// its registered projection mode and outside the sorted walk.
    ///
    /// # Errors
    ///
    /// `Error::BasisNotReady`, `Error::UnknownLayer`,
    /// `Error::ContentKindMismatch` for a sprite layer, or a sink error.
    pub fn render_designated_layer(&self, name: &str, sink: &mut dyn DrawSink) -> Result<DrawStats> {
        let view = self.frame_view()?;
        let layer = self
            .state
            .layers
            .layer_by_name(name)
            .map_err(|e| engine_err!("tessera::FrameDriver", e))?;

        let actors = layer.actors().as_meshes().ok_or_else(|| {
            engine_err!(
                "tessera::FrameDriver",
                Error::ContentKindMismatch {
                    layer: name.to_string(),
                    expected: ContentKind::Mesh,
                    found: layer.content(),
                }
            )
        })?;

        let mut stats = DrawStats { layers: 1, ..DrawStats::default() };
        MeshPipeline::from_config(view, self.state.config())
            .draw_layer_perspective(actors, sink, &mut stats)?;
        Ok(stats)
    }

    /// `render_designated_layer` on the configured foreground layer.
    ///
    /// A foreground layer that was never registered is an empty layer: the
    /// pass draws nothing, returns zeroed stats and logs at trace, so hosts
    /// can call this every frame without flooding the error log.
    ///
    /// # Errors
    ///
    /// `Error::BasisNotReady`, `Error::ContentKindMismatch` if the layer
    /// holds sprites, or a sink error.
    pub fn render_foreground(&self, sink: &mut dyn DrawSink) -> Result<DrawStats> {
        let name = &self.state.config().foreground_layer;
        if self.state.layers.key(name).is_none() {
            self.frame_view()?;
            engine_trace!("tessera::FrameDriver", "Foreground layer '{}' not registered, nothing to draw", name);
            return Ok(DrawStats::default());
        }
        self.render_designated_layer(name, sink)
    }
}

impl DrawPass for FrameDriver {
    fn draw(&self, sink: &mut dyn DrawSink) -> Result<()> {
        self.render_layers(sink).map(|_| ())
    }
}

#[cfg(test)]
#[path = "frame_driver_tests.rs"]
mod tests;
