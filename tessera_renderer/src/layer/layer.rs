/// Layer types for the layer registry.
///
/// A Layer is a named, z-ordered bucket of actors sharing one content kind
/// and one projection mode. Its identity (name, z, kind, mode) is fixed at
/// registration; only its actor sequence changes afterwards.

use slotmap::new_key_type;
use super::actor::ActorSequence;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable handle to a registered layer.
    ///
    /// Valid for the lifetime of the registry.
    pub struct LayerKey;
}

// ===== TAGS =====

/// What a layer holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Sprite,
    Mesh,
}

/// How a layer's actors are mapped to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionMode {
    /// Uniform scale by camera zoom, distance ignored
    Orthographic,
    /// Scale by inverse depth
    Perspective,
    /// Positions are already in screen space (HUD, UI)
    Screen,
}

/// Per-layer parallax factors. Stored but not read by any pipeline yet.
pub type ParallaxTable = Vec<f32>;

/// Per-layer depth overrides. Stored but not read by any pipeline yet.
pub type DepthTable = Vec<f32>;

// ===== DESCRIPTOR =====

/// Registration parameters for a layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDesc {
    pub name: String,
    /// Sort key; lower z draws first (further back)
    pub z: f32,
    pub projection: ProjectionMode,
    pub content: ContentKind,
    pub parallax_table: Option<ParallaxTable>,
    pub depth_table: Option<DepthTable>,
}

impl LayerDesc {
    pub fn new(name: impl Into<String>, z: f32, projection: ProjectionMode, content: ContentKind) -> Self {
        Self {
            name: name.into(),
            z,
            projection,
            content,
            parallax_table: None,
            depth_table: None,
        }
    }

    pub fn with_parallax_table(mut self, table: ParallaxTable) -> Self {
        self.parallax_table = Some(table);
        self
    }

    pub fn with_depth_table(mut self, table: DepthTable) -> Self {
        self.depth_table = Some(table);
        self
    }
}

// ===== LAYER =====

/// A registered layer
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    z: f32,
    projection: ProjectionMode,
    content: ContentKind,
    parallax_table: Option<ParallaxTable>,
    depth_table: Option<DepthTable>,
    /// Registration sequence number (tie-break for equal z)
    order: u64,
    actors: ActorSequence,
}

impl Layer {
    pub(crate) fn new(desc: LayerDesc, order: u64) -> Self {
        Self {
            actors: ActorSequence::empty(desc.content),
            name: desc.name,
            z: desc.z,
            projection: desc.projection,
            content: desc.content,
            parallax_table: desc.parallax_table,
            depth_table: desc.depth_table,
            order,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }

    pub fn content(&self) -> ContentKind {
        self.content
    }

    pub fn parallax_table(&self) -> Option<&[f32]> {
        self.parallax_table.as_deref()
    }

    pub fn depth_table(&self) -> Option<&[f32]> {
        self.depth_table.as_deref()
    }

    pub(crate) fn order(&self) -> u64 {
        self.order
    }

    pub fn actors(&self) -> &ActorSequence {
        &self.actors
    }

    /// Live actor sequence; its content kind cannot be changed through it
    pub fn actors_mut(&mut self) -> &mut ActorSequence {
        &mut self.actors
    }

    /// Whether `desc` describes this layer's fixed identity
    pub(crate) fn matches(&self, desc: &LayerDesc) -> bool {
        self.z == desc.z && self.projection == desc.projection && self.content == desc.content
    }
}
