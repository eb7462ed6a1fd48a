/// Actor types drawn by the layer pipelines.
///
/// Actors are owned by their layer's `ActorSequence` and read-only to the
/// renderer. The application appends or replaces them between frames.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use crate::error::{Error, Result};
use super::layer::ContentKind;

// ============================================================================
// SPRITE ACTOR
// ============================================================================

/// Textured quad placed in the world (or on screen, for screen layers)
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteActor {
    pub position: Vec3,
    pub size: Vec2,
    pub path: String,
}

impl SpriteActor {
    pub fn new(position: Vec3, size: Vec2, path: impl Into<String>) -> Self {
        Self {
            position,
            size,
            path: path.into(),
        }
    }
}

// ============================================================================
// MESH ACTOR
// ============================================================================

/// Floats per interleaved vertex record: x, y, z, u, v
pub const FLOATS_PER_VERTEX: usize = 5;

/// One interleaved vertex record
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MeshVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl MeshVertex {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }
}

/// Indexed textured triangle mesh.
///
/// Buffers are validated at construction: the index count is a multiple
/// of three and every index references an existing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshActor {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    path: String,
}

impl MeshActor {
    /// Create a mesh from vertex records and a triangle index list.
    ///
    /// Counter-clockwise triangles (as seen on screen) face the camera.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidMesh` if `indices.len()` is not a multiple of
    /// three or an index is out of range.
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>, path: impl Into<String>) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }

        if let Some(&bad) = indices.iter().find(|&&index| index as usize >= vertices.len()) {
            return Err(Error::InvalidMesh(format!(
                "index {} out of range for {} vertices",
                bad,
                vertices.len()
            )));
        }

        Ok(Self {
            vertices,
            indices,
            path: path.into(),
        })
    }

    /// Create a mesh from a flat `[x, y, z, u, v, x, y, z, u, v, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidMesh` if the buffer length is not a multiple
    /// of five, plus every error of `MeshActor::new`.
    pub fn from_interleaved(data: &[f32], indices: Vec<u32>, path: impl Into<String>) -> Result<Self> {
        if data.len() % FLOATS_PER_VERTEX != 0 {
            return Err(Error::InvalidMesh(format!(
                "vertex buffer length {} is not a multiple of {}",
                data.len(),
                FLOATS_PER_VERTEX
            )));
        }

        let vertices: &[MeshVertex] = bytemuck::try_cast_slice(data)
            .map_err(|e| Error::InvalidMesh(format!("vertex buffer cast failed: {}", e)))?;

        Self::new(vertices.to_vec(), indices, path)
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Index triples in index-buffer order
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0] as usize, tri[1] as usize, tri[2] as usize])
    }
}

// ============================================================================
// ACTOR SEQUENCE
// ============================================================================

/// Ordered actors of one layer.
///
/// The content kind is fixed when the sequence is created. Mutable access
/// goes through the typed `Vec` accessors, so callers can edit the actors
/// but never swap a sprite sequence for a mesh sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorSequence {
    storage: ActorStorage,
}

#[derive(Debug, Clone, PartialEq)]
enum ActorStorage {
    Sprites(Vec<SpriteActor>),
    Meshes(Vec<MeshActor>),
}

impl ActorSequence {
    /// Empty sequence for a content kind
    pub fn empty(kind: ContentKind) -> Self {
        let storage = match kind {
            ContentKind::Sprite => ActorStorage::Sprites(Vec::new()),
            ContentKind::Mesh => ActorStorage::Meshes(Vec::new()),
        };
        Self { storage }
    }

    pub fn kind(&self) -> ContentKind {
        match self.storage {
            ActorStorage::Sprites(_) => ContentKind::Sprite,
            ActorStorage::Meshes(_) => ContentKind::Mesh,
        }
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            ActorStorage::Sprites(sprites) => sprites.len(),
            ActorStorage::Meshes(meshes) => meshes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        match &mut self.storage {
            ActorStorage::Sprites(sprites) => sprites.clear(),
            ActorStorage::Meshes(meshes) => meshes.clear(),
        }
    }

    pub fn as_sprites(&self) -> Option<&[SpriteActor]> {
        match &self.storage {
            ActorStorage::Sprites(sprites) => Some(sprites),
            ActorStorage::Meshes(_) => None,
        }
    }

    pub fn as_sprites_mut(&mut self) -> Option<&mut Vec<SpriteActor>> {
        match &mut self.storage {
            ActorStorage::Sprites(sprites) => Some(sprites),
            ActorStorage::Meshes(_) => None,
        }
    }

    pub fn as_meshes(&self) -> Option<&[MeshActor]> {
        match &self.storage {
            ActorStorage::Meshes(meshes) => Some(meshes),
            ActorStorage::Sprites(_) => None,
        }
    }

    pub fn as_meshes_mut(&mut self) -> Option<&mut Vec<MeshActor>> {
        match &mut self.storage {
            ActorStorage::Meshes(meshes) => Some(meshes),
            ActorStorage::Sprites(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
