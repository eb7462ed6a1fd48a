/// Mesh pipeline.
///
/// Per actor: transform every vertex to screen space, then walk the index
/// buffer in order. Each triangle is back-face tested on its screen winding,
/// flat shaded from its projected-space normal, and emitted as one textured
/// triangle (plus three wireframe lines when enabled).
///
/// Winding: counter-clockwise on screen (positive signed area) faces the
/// camera. Degenerate triangles (zero area) are kept.

use glam::{Vec2, Vec3};
use crate::camera::FrameView;
use crate::config::RendererConfig;
use crate::error::Result;
use crate::engine_trace;
use crate::layer::{MeshActor, ProjectionMode};
use crate::sink::{DrawSink, LineDraw, Rgba, TriangleDraw};
use super::draw_stats::DrawStats;

/// Added to vertex depth before dividing, so a vertex on the camera plane
/// distorts instead of being dropped.
pub const DEPTH_EPSILON: f32 = f32::EPSILON;

// ============================================================================
// SHADING AND CULLING PRIMITIVES
// ============================================================================

/// Twice the signed area of a screen triangle (positive when counter-clockwise)
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// The single culling test: negative signed area faces away
pub fn is_back_facing(a: Vec2, b: Vec2, c: Vec2) -> bool {
    signed_area(a, b, c) < 0.0
}

/// Flat-shading intensity of a triangle given in projected space
/// `(screen_x, screen_y, inv_depth)`.
///
/// The normal comes from the projected edges rather than world-space
/// geometry. The result is clamped to `[0, 1]`; a zero-area triangle
/// shades to 0.
pub fn shade_intensity(p1: Vec3, p2: Vec3, p3: Vec3, light_direction: Vec3) -> f32 {
    let normal = (p2 - p1).cross(p3 - p1).normalize_or_zero();
    let intensity = normal.dot(light_direction);
    if intensity.is_finite() {
        intensity.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Map an intensity to the stylized blue-leaning triangle color.
///
/// `R = G = ⌊i × 128⌋`, `B = ⌊i × 255⌋`, fully opaque. Out-of-range input
/// is clamped first.
pub fn shade_color(intensity: f32) -> Rgba {
    let i = if intensity.is_finite() { intensity.clamp(0.0, 1.0) } else { 0.0 };
    let rg = (i * 128.0) as u8;
    let b = (i * 255.0) as u8;
    Rgba::new(rg, rg, b, 255)
}

// ============================================================================
// PROJECTED GEOMETRY
// ============================================================================

/// Vertex after the perspective transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    pub screen: Vec2,
    /// `zoom / (depth + ε)`; larger means closer
    pub inv_depth: f32,
}

impl ProjectedVertex {
    /// Position in the space the shading normal is computed in
    pub fn shading_point(&self) -> Vec3 {
        self.screen.extend(self.inv_depth)
    }
}

/// A triangle that survived culling, ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    /// Vertex indices into the actor's vertex buffer
    pub indices: [usize; 3],
    pub vertices: [ProjectedVertex; 3],
    pub color: Rgba,
}

impl ProjectedTriangle {
    /// Average inverse depth of the three vertices.
    ///
    /// Not used for ordering by this crate; exposed so callers can apply a
    /// painter's sort without touching the culling or shading math.
    pub fn depth(&self) -> f32 {
        (self.vertices[0].inv_depth + self.vertices[1].inv_depth + self.vertices[2].inv_depth) / 3.0
    }

    pub fn screen_positions(&self) -> [Vec2; 3] {
        [self.vertices[0].screen, self.vertices[1].screen, self.vertices[2].screen]
    }
}

// ============================================================================
// MESH PIPELINE
// ============================================================================

/// Wireframe overlay parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wireframe {
    pub color: Rgba,
    pub width: f32,
}

/// Projects and draws mesh layers for one frame
#[derive(Debug, Clone, Copy)]
pub struct MeshPipeline<'a> {
    view: &'a FrameView,
    viewport_half: Vec2,
    light_direction: Vec3,
    wireframe: Option<Wireframe>,
}

impl<'a> MeshPipeline<'a> {
    /// `light_direction` is expected to be unit length
    pub fn new(view: &'a FrameView, viewport_half: Vec2, light_direction: Vec3, wireframe: Option<Wireframe>) -> Self {
        Self {
            view,
            viewport_half,
            light_direction,
            wireframe,
        }
    }

    pub fn from_config(view: &'a FrameView, config: &RendererConfig) -> Self {
        let wireframe = config.wireframe().then_some(Wireframe {
            color: config.wireframe_color,
            width: config.wireframe_width,
        });
        Self::new(
            view,
            Vec2::new(config.viewport_half_width, config.viewport_half_height),
            config.light_direction,
            wireframe,
        )
    }

    /// Perspective-transform every vertex of `actor` into `out` (cleared first)
    pub fn transform_vertices(&self, actor: &MeshActor, out: &mut Vec<ProjectedVertex>) {
        let basis = &self.view.basis;
        let zoom = self.view.zoom;

        out.clear();
        out.extend(actor.vertices().iter().map(|vertex| {
            let cam_vec = self.view.camera_vector(vertex.position);
            let divisor = zoom / (basis.depth(cam_vec) + DEPTH_EPSILON);
            ProjectedVertex {
                screen: Vec2::new(
                    cam_vec.dot(basis.right) * divisor * self.viewport_half.x,
                    cam_vec.dot(basis.up) * divisor * self.viewport_half.y,
                ),
                inv_depth: divisor,
            }
        }));
    }

    /// Cull and shade one triangle; `None` if it faces away
    fn assemble(&self, indices: [usize; 3], projected: &[ProjectedVertex]) -> Option<ProjectedTriangle> {
        let vertices = [projected[indices[0]], projected[indices[1]], projected[indices[2]]];
        if is_back_facing(vertices[0].screen, vertices[1].screen, vertices[2].screen) {
            return None;
        }

        let intensity = shade_intensity(
            vertices[0].shading_point(),
            vertices[1].shading_point(),
            vertices[2].shading_point(),
            self.light_direction,
        );

        Some(ProjectedTriangle {
            indices,
            vertices,
            color: shade_color(intensity),
        })
    }

    /// Surviving triangles of `actor` in index-buffer order
    pub fn project_triangles(&self, actor: &MeshActor) -> Vec<ProjectedTriangle> {
        let mut projected = Vec::with_capacity(actor.vertex_count());
        self.transform_vertices(actor, &mut projected);
        actor
            .triangles()
            .filter_map(|indices| self.assemble(indices, &projected))
            .collect()
    }

    /// Draw one actor, reusing `scratch` for the transformed vertices
    pub fn draw_actor(
        &self,
        actor: &MeshActor,
        scratch: &mut Vec<ProjectedVertex>,
        sink: &mut dyn DrawSink,
        stats: &mut DrawStats,
    ) -> Result<()> {
        self.transform_vertices(actor, scratch);
        let vertices = actor.vertices();

        for indices in actor.triangles() {
            let triangle = match self.assemble(indices, scratch) {
                Some(triangle) => triangle,
                None => {
                    stats.triangles_culled += 1;
                    continue;
                }
            };

            let positions = triangle.screen_positions();
            sink.draw_triangle(&TriangleDraw {
                positions,
                color: triangle.color,
                path: actor.path(),
                uvs: [vertices[indices[0]].uv, vertices[indices[1]].uv, vertices[indices[2]].uv],
                blend_mode: None,
            })?;
            stats.triangles_drawn += 1;

            if let Some(wireframe) = self.wireframe {
                for (from, to) in [(0, 1), (1, 2), (2, 0)] {
                    sink.draw_line(&LineDraw {
                        from: positions[from],
                        to: positions[to],
                        color: wireframe.color,
                        width: wireframe.width,
                    })?;
                    stats.lines_drawn += 1;
                }
            }
        }
        Ok(())
    }

    /// Perspective mesh layer: actors in sequence order
    pub fn draw_layer_perspective(&self, actors: &[MeshActor], sink: &mut dyn DrawSink, stats: &mut DrawStats) -> Result<()> {
        let mut scratch = Vec::new();
        for actor in actors {
            self.draw_actor(actor, &mut scratch, sink, stats)?;
        }
        Ok(())
    }

    /// Reserved: orthographic meshes are not drawn
    pub fn draw_layer_orthographic(&self, actors: &[MeshActor], _sink: &mut dyn DrawSink, _stats: &mut DrawStats) -> Result<()> {
        if !actors.is_empty() {
            engine_trace!("tessera::MeshPipeline", "Orthographic mesh layer skipped ({} actors)", actors.len());
        }
        Ok(())
    }

    /// Reserved: screen-space meshes are not drawn
    pub fn draw_layer_screen(&self, actors: &[MeshActor], _sink: &mut dyn DrawSink, _stats: &mut DrawStats) -> Result<()> {
        if !actors.is_empty() {
            engine_trace!("tessera::MeshPipeline", "Screen mesh layer skipped ({} actors)", actors.len());
        }
        Ok(())
    }

    /// Dispatch on projection mode
    pub fn draw_layer(
        &self,
        actors: &[MeshActor],
        mode: ProjectionMode,
        sink: &mut dyn DrawSink,
        stats: &mut DrawStats,
    ) -> Result<()> {
        match mode {
            ProjectionMode::Perspective => self.draw_layer_perspective(actors, sink, stats),
            ProjectionMode::Orthographic => self.draw_layer_orthographic(actors, sink, stats),
            ProjectionMode::Screen => self.draw_layer_screen(actors, sink, stats),
        }
    }
}

#[cfg(test)]
#[path = "mesh_pipeline_tests.rs"]
mod tests;
