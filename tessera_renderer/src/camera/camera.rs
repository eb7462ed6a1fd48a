/// Camera - passive parameter record.
///
/// The Camera computes nothing. The owning application moves it between
/// frames; `CameraModel` reads it once per frame to derive the view basis.

use glam::Vec3;

/// Look-at camera parameters.
///
/// Invariants checked at basis time (not here): `target != position`, and
/// `up` must not be parallel to the viewing direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fov_degrees: f32,
    zoom: f32,
}

impl Camera {
    /// Create a camera at `position` looking at `target`.
    ///
    /// The up hint defaults to +Y, FOV to 60 degrees and zoom to 1.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_degrees: 60.0,
            zoom: 1.0,
        }
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up hint (re-orthogonalized by the view basis)
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Full vertical field of view, in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Orthographic scale and mesh perspective scale
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov_degrees = fov_degrees;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    // ===== BUILDERS =====

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    pub fn with_fov_degrees(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }
}

impl Default for Camera {
    /// Camera 10 units back on +Z looking at the origin
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
