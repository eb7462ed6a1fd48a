/// Per-pass draw statistics

/// Counters accumulated while a pass emits draw calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Layers walked (including layers that emitted nothing)
    pub layers: u32,
    pub sprites_drawn: u32,
    /// Sprites dropped at or behind the near threshold
    pub sprites_culled: u32,
    pub triangles_drawn: u32,
    /// Back-facing triangles skipped
    pub triangles_culled: u32,
    /// Wireframe edges
    pub lines_drawn: u32,
}

impl DrawStats {
    /// Total primitive calls handed to the sink
    pub fn draw_calls(&self) -> u32 {
        self.sprites_drawn + self.triangles_drawn + self.lines_drawn
    }

    /// Fold another pass's counters into this one
    pub fn merge(&mut self, other: &DrawStats) {
        self.layers += other.layers;
        self.sprites_drawn += other.sprites_drawn;
        self.sprites_culled += other.sprites_culled;
        self.triangles_drawn += other.triangles_drawn;
        self.triangles_culled += other.triangles_culled;
        self.lines_drawn += other.lines_drawn;
    }
}
