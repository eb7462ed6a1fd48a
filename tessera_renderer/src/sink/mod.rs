//! Draw sink module
//!
//! The boundary between the renderer and the host rasterizer.

mod draw_sink;
mod recording_sink;

pub use draw_sink::{
    DrawSink, SpriteDraw, TriangleDraw, LineDraw,
    Rgb, Rgba, Rect, BlendMode, SPRITE_CENTER_ANCHOR,
};
pub use recording_sink::{RecordingSink, RecordedDraw, RecordedSprite, RecordedTriangle};
