//! Projection pipelines
//!
//! Stateless per-frame passes turning actors into draw calls.

mod draw_stats;
mod mesh_pipeline;
mod sprite_pipeline;

pub use draw_stats::DrawStats;
pub use sprite_pipeline::{SpritePipeline, SpriteProjection};
pub use mesh_pipeline::{
    MeshPipeline, ProjectedTriangle, ProjectedVertex, Wireframe,
    signed_area, is_back_facing, shade_intensity, shade_color, DEPTH_EPSILON,
};
