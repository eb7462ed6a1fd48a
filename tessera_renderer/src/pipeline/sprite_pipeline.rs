/// Sprite projection pipeline.
///
/// Maps sprite actors to center-anchored screen quads under one of the
/// three projection modes. Stateless apart from the borrowed frame view.

use glam::Vec2;
use crate::camera::FrameView;
use crate::error::Result;
use crate::layer::{ProjectionMode, SpriteActor};
use crate::sink::{DrawSink, SpriteDraw};
use super::draw_stats::DrawStats;

/// Screen placement of one sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteProjection {
    pub position: Vec2,
    pub size: Vec2,
}

/// Projects and draws sprite layers for one frame
#[derive(Debug, Clone, Copy)]
pub struct SpritePipeline<'a> {
    view: &'a FrameView,
    near_epsilon: f32,
}

impl<'a> SpritePipeline<'a> {
    pub fn new(view: &'a FrameView, near_epsilon: f32) -> Self {
        Self { view, near_epsilon }
    }

    // ===== PROJECTION =====

    /// Screen mode: position and size pass through untouched
    pub fn project_screen(&self, actor: &SpriteActor) -> SpriteProjection {
        SpriteProjection {
            position: actor.position.truncate(),
            size: actor.size,
        }
    }

    /// Orthographic mode: camera-plane offset scaled by zoom.
    ///
    /// The depth component is ignored, so every actor keeps the same scale.
    pub fn project_orthographic(&self, actor: &SpriteActor) -> SpriteProjection {
        let basis = &self.view.basis;
        let zoom = self.view.zoom;
        let cam_vec = self.view.camera_vector(actor.position);

        SpriteProjection {
            position: Vec2::new(-cam_vec.dot(basis.right) * zoom, cam_vec.dot(basis.up) * zoom),
            size: actor.size * zoom,
        }
    }

    /// Perspective mode: camera-plane offset divided by depth.
    ///
    /// Returns `None` for actors at or behind the near threshold.
    pub fn project_perspective(&self, actor: &SpriteActor) -> Option<SpriteProjection> {
        let basis = &self.view.basis;
        let cam_vec = self.view.camera_vector(actor.position);
        let depth = basis.depth(cam_vec);
        if !(depth > self.near_epsilon) {
            return None;
        }

        let divisor = 1.0 / (depth * basis.half_fov);
        Some(SpriteProjection {
            position: Vec2::new(-cam_vec.dot(basis.right) * divisor, cam_vec.dot(basis.up) * divisor),
            size: actor.size * divisor,
        })
    }

    /// Project under `mode`; `None` means the actor is culled
    pub fn project(&self, actor: &SpriteActor, mode: ProjectionMode) -> Option<SpriteProjection> {
        match mode {
            ProjectionMode::Screen => Some(self.project_screen(actor)),
            ProjectionMode::Orthographic => Some(self.project_orthographic(actor)),
            ProjectionMode::Perspective => self.project_perspective(actor),
        }
    }

    // ===== DRAWING =====

    pub fn draw_layer_screen(&self, actors: &[SpriteActor], sink: &mut dyn DrawSink, stats: &mut DrawStats) -> Result<()> {
        self.draw_layer(actors, ProjectionMode::Screen, sink, stats)
    }

    pub fn draw_layer_orthographic(&self, actors: &[SpriteActor], sink: &mut dyn DrawSink, stats: &mut DrawStats) -> Result<()> {
        self.draw_layer(actors, ProjectionMode::Orthographic, sink, stats)
    }

    pub fn draw_layer_perspective(&self, actors: &[SpriteActor], sink: &mut dyn DrawSink, stats: &mut DrawStats) -> Result<()> {
        self.draw_layer(actors, ProjectionMode::Perspective, sink, stats)
    }

    /// Draw every actor in sequence order
    pub fn draw_layer(
        &self,
        actors: &[SpriteActor],
        mode: ProjectionMode,
        sink: &mut dyn DrawSink,
        stats: &mut DrawStats,
    ) -> Result<()> {
        for actor in actors {
            let projection = match self.project(actor, mode) {
                Some(projection) => projection,
                None => {
                    stats.sprites_culled += 1;
                    continue;
                }
            };

            sink.draw_sprite(&SpriteDraw::centered(projection.position, projection.size, &actor.path))?;
            stats.sprites_drawn += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sprite_pipeline_tests.rs"]
mod tests;
