/// Layer registry - named, z-sorted draw layers.
///
/// Uses a SlotMap for stable handles and an FxHashMap for name lookup.
/// The z-sorted draw order is rebuilt on registration only, never per frame.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::{engine_debug, engine_trace, engine_warn};
use super::actor::{ActorSequence, MeshActor, SpriteActor};
use super::layer::{ContentKind, Layer, LayerDesc, LayerKey};

/// Owns every layer and its actor sequence.
///
/// Draw order is z-ascending (painter's order: larger z is drawn later, on
/// top). Equal z values keep registration order.
///
/// Actor sequences must not be modified while a frame is being rendered;
/// the borrow checker enforces this for callers going through
/// `FrameDriver`.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: SlotMap<LayerKey, Layer>,
    by_name: FxHashMap<String, LayerKey>,
    /// Keys in draw order
    sorted: Vec<LayerKey>,
    next_order: u64,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a layer, or return the existing handle for its name.
    ///
    /// Re-registering an existing name never changes its z, projection or
    /// content kind; a conflicting descriptor is logged and ignored.
    pub fn register_layer(&mut self, desc: LayerDesc) -> LayerKey {
        if let Some(&key) = self.by_name.get(&desc.name) {
            let layer = &self.layers[key];
            if layer.matches(&desc) {
                engine_trace!("tessera::LayerRegistry", "Layer '{}' already registered", desc.name);
            } else {
                engine_warn!(
                    "tessera::LayerRegistry",
                    "Layer '{}' already registered as z={} {:?}/{:?}; ignoring z={} {:?}/{:?}",
                    desc.name, layer.z(), layer.content(), layer.projection(),
                    desc.z, desc.content, desc.projection
                );
            }
            return key;
        }

        let name = desc.name.clone();
        engine_debug!(
            "tessera::LayerRegistry",
            "Registering layer '{}' (z={}, {:?}, {:?})",
            name, desc.z, desc.content, desc.projection
        );

        let layer = Layer::new(desc, self.next_order);
        self.next_order += 1;

        let key = self.layers.insert(layer);
        self.by_name.insert(name, key);
        self.sorted.push(key);
        self.resort();
        key
    }

    /// Stable sort on z; `total_cmp` gives NaN a fixed place instead of panicking
    fn resort(&mut self) {
        let layers = &self.layers;
        self.sorted.sort_by(|&a, &b| {
            let (la, lb) = (&layers[a], &layers[b]);
            la.z().total_cmp(&lb.z()).then(la.order().cmp(&lb.order()))
        });
    }

    /// Handle for a registered name (never inserts)
    pub fn key(&self, name: &str) -> Option<LayerKey> {
        self.by_name.get(name).copied()
    }

    pub fn layer(&self, key: LayerKey) -> Option<&Layer> {
        self.layers.get(key)
    }

    pub fn layer_mut(&mut self, key: LayerKey) -> Option<&mut Layer> {
        self.layers.get_mut(key)
    }

    /// Layer by name
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownLayer` if the name was never registered.
    pub fn layer_by_name(&self, name: &str) -> Result<&Layer> {
        self.key(name)
            .and_then(|key| self.layers.get(key))
            .ok_or_else(|| Error::UnknownLayer(name.to_string()))
    }

    /// The live actor sequence of a layer; the same sequence on every call.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownLayer` if the name was never registered.
    pub fn actor_sequence(&mut self, name: &str) -> Result<&mut ActorSequence> {
        let key = self.key(name).ok_or_else(|| Error::UnknownLayer(name.to_string()))?;
        Ok(self.layers[key].actors_mut())
    }

    /// Typed sprite access for a sprite layer
    ///
    /// # Errors
    ///
    /// `Error::UnknownLayer`, or `Error::ContentKindMismatch` for a mesh layer.
    pub fn sprites_mut(&mut self, name: &str) -> Result<&mut Vec<SpriteActor>> {
        let actors = self.actor_sequence(name)?;
        let found = actors.kind();
        actors.as_sprites_mut().ok_or_else(|| Error::ContentKindMismatch {
            layer: name.to_string(),
            expected: ContentKind::Sprite,
            found,
        })
    }

    /// Typed mesh access for a mesh layer
    ///
    /// # Errors
    ///
    /// `Error::UnknownLayer`, or `Error::ContentKindMismatch` for a sprite layer.
    pub fn meshes_mut(&mut self, name: &str) -> Result<&mut Vec<MeshActor>> {
        let actors = self.actor_sequence(name)?;
        let found = actors.kind();
        actors.as_meshes_mut().ok_or_else(|| Error::ContentKindMismatch {
            layer: name.to_string(),
            expected: ContentKind::Mesh,
            found,
        })
    }

    /// Layers in draw order (z ascending, registration order on ties)
    pub fn sorted_layers(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.sorted.iter().map(move |&key| &self.layers[key])
    }

    /// Keys in draw order
    pub fn sorted_keys(&self) -> &[LayerKey] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
#[path = "layer_registry_tests.rs"]
mod tests;
