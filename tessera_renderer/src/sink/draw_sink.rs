/// Host draw-primitive interface.
///
/// The renderer never rasterizes. Every projected sprite, triangle and
/// wireframe edge is handed to a `DrawSink` implemented by the host.

use glam::Vec2;
use crate::error::Result;

// ============================================================================
// Color and rect types
// ============================================================================

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Axis-aligned rectangle in host pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Host blend modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    None,
    Alpha,
    Additive,
    Multiply,
}

// ============================================================================
// Draw calls
// ============================================================================

/// Anchor carried by every sprite this renderer emits (sprite center)
pub const SPRITE_CENTER_ANCHOR: Vec2 = Vec2::new(0.5, 0.5);

/// Textured quad draw.
///
/// Optional fields left at `None` mean "host default".
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw<'a> {
    pub position: Vec2,
    pub size: Vec2,
    pub path: &'a str,
    pub angle: Option<f32>,
    pub alpha: Option<u8>,
    pub tint: Option<Rgb>,
    pub tile: Option<Rect>,
    pub flip_horizontally: Option<bool>,
    pub flip_vertically: Option<bool>,
    pub angle_anchor: Option<Vec2>,
    pub source: Option<Rect>,
    pub blend_mode: Option<BlendMode>,
    pub anchor: Vec2,
}

impl<'a> SpriteDraw<'a> {
    /// Center-anchored sprite with every optional parameter unset
    pub fn centered(position: Vec2, size: Vec2, path: &'a str) -> Self {
        Self {
            position,
            size,
            path,
            angle: None,
            alpha: None,
            tint: None,
            tile: None,
            flip_horizontally: None,
            flip_vertically: None,
            angle_anchor: None,
            source: None,
            blend_mode: None,
            anchor: SPRITE_CENTER_ANCHOR,
        }
    }
}

/// Textured triangle draw
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleDraw<'a> {
    pub positions: [Vec2; 3],
    pub color: Rgba,
    pub path: &'a str,
    pub uvs: [Vec2; 3],
    pub blend_mode: Option<BlendMode>,
}

/// Line draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDraw {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgba,
    pub width: f32,
}

// ============================================================================
// DrawSink trait
// ============================================================================

/// Host primitive sink.
///
/// Calls arrive in painter's order; the sink must draw them in the order
/// received. An error aborts the pass that issued the call.
pub trait DrawSink {
    /// Draw a textured quad
    fn draw_sprite(&mut self, sprite: &SpriteDraw<'_>) -> Result<()>;

    /// Draw a textured triangle
    fn draw_triangle(&mut self, triangle: &TriangleDraw<'_>) -> Result<()>;

    /// Draw a line segment
    fn draw_line(&mut self, line: &LineDraw) -> Result<()>;
}
