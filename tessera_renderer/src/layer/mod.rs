//! Layer module
//!
//! Named, z-ordered layers and the actors they hold.

mod actor;
mod layer;
mod layer_registry;

pub use actor::{ActorSequence, SpriteActor, MeshActor, MeshVertex, FLOATS_PER_VERTEX};
pub use layer::{
    Layer, LayerKey, LayerDesc, ContentKind, ProjectionMode,
    ParallaxTable, DepthTable,
};
pub use layer_registry::LayerRegistry;
