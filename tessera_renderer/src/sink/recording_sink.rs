/// Recording sink (no host required)
///
/// Captures every draw call in order so tests and debugging tools can
/// inspect what a frame would have drawn.

use glam::Vec2;
use crate::error::{Error, Result};
use super::draw_sink::{DrawSink, LineDraw, Rgba, SpriteDraw, TriangleDraw};

/// Owned copy of a sprite draw
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSprite {
    pub position: Vec2,
    pub size: Vec2,
    pub path: String,
    pub anchor: Vec2,
    /// True when every optional parameter was left unset
    pub defaults_only: bool,
}

/// Owned copy of a triangle draw
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTriangle {
    pub positions: [Vec2; 3],
    pub color: Rgba,
    pub path: String,
    pub uvs: [Vec2; 3],
}

/// One captured draw call
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedDraw {
    Sprite(RecordedSprite),
    Triangle(RecordedTriangle),
    Line(LineDraw),
}

/// Sink that stores draw calls instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub draws: Vec<RecordedDraw>,
    /// Reject the call once this many draws were accepted
    fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that accepts `count` calls, then errors
    pub fn failing_after(count: usize) -> Self {
        Self {
            draws: Vec::new(),
            fail_after: Some(count),
        }
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }

    pub fn sprites(&self) -> impl Iterator<Item = &RecordedSprite> {
        self.draws.iter().filter_map(|draw| match draw {
            RecordedDraw::Sprite(sprite) => Some(sprite),
            _ => None,
        })
    }

    pub fn triangles(&self) -> impl Iterator<Item = &RecordedTriangle> {
        self.draws.iter().filter_map(|draw| match draw {
            RecordedDraw::Triangle(triangle) => Some(triangle),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineDraw> {
        self.draws.iter().filter_map(|draw| match draw {
            RecordedDraw::Line(line) => Some(line),
            _ => None,
        })
    }

    fn record(&mut self, draw: RecordedDraw) -> Result<()> {
        if let Some(limit) = self.fail_after {
            if self.draws.len() >= limit {
                return Err(Error::Sink(format!("recording sink full after {} draws", limit)));
            }
        }
        self.draws.push(draw);
        Ok(())
    }
}

impl DrawSink for RecordingSink {
    fn draw_sprite(&mut self, sprite: &SpriteDraw<'_>) -> Result<()> {
        let defaults_only = sprite.angle.is_none()
            && sprite.alpha.is_none()
            && sprite.tint.is_none()
            && sprite.tile.is_none()
            && sprite.flip_horizontally.is_none()
            && sprite.flip_vertically.is_none()
            && sprite.angle_anchor.is_none()
            && sprite.source.is_none()
            && sprite.blend_mode.is_none();

        self.record(RecordedDraw::Sprite(RecordedSprite {
            position: sprite.position,
            size: sprite.size,
            path: sprite.path.to_string(),
            anchor: sprite.anchor,
            defaults_only,
        }))
    }

    fn draw_triangle(&mut self, triangle: &TriangleDraw<'_>) -> Result<()> {
        self.record(RecordedDraw::Triangle(RecordedTriangle {
            positions: triangle.positions,
            color: triangle.color,
            path: triangle.path.to_string(),
            uvs: triangle.uvs,
        }))
    }

    fn draw_line(&mut self, line: &LineDraw) -> Result<()> {
        self.record(RecordedDraw::Line(*line))
    }
}
