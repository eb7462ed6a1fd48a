/// View basis - the per-frame orthonormal camera frame.

use glam::Vec3;
use crate::error::{Error, Result};
use super::camera::Camera;

/// Vectors shorter than this are treated as zero.
pub const BASIS_EPSILON: f32 = 1e-6;

/// Right-handed orthonormal frame derived from a Camera.
///
/// `right × forward == up` and every vector has unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    /// `tan(fov / 2)`
    pub half_fov: f32,
}

impl ViewBasis {
    /// Derive the basis from camera parameters.
    ///
    /// 1. `forward = normalize(target - position)`
    /// 2. `right = normalize(forward × up_hint)`
    /// 3. `up = normalize(right × forward)`
    /// 4. `half_fov = tan(fov × π/180 × 0.5)`
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateCamera` if target and position coincide,
    /// if the up hint is parallel to the viewing direction, if the
    /// resulting up vector collapses, or if the field of view is outside
    /// the open range (0, 180) degrees.
    pub fn from_camera(camera: &Camera) -> Result<Self> {
        let forward = normalize_checked(camera.target() - camera.position()).ok_or_else(|| {
            Error::DegenerateCamera(format!(
                "target {:?} coincides with position {:?}",
                camera.target(),
                camera.position()
            ))
        })?;

        let right = normalize_checked(forward.cross(camera.up())).ok_or_else(|| {
            Error::DegenerateCamera(format!(
                "up hint {:?} is parallel to forward {:?}",
                camera.up(),
                forward
            ))
        })?;

        let up = normalize_checked(right.cross(forward)).ok_or_else(|| {
            Error::DegenerateCamera(format!(
                "up vector collapsed (right {:?}, forward {:?})",
                right, forward
            ))
        })?;

        let fov = camera.fov_degrees();
        let half_fov = (fov.to_radians() * 0.5).tan();
        if !(fov > 0.0 && fov < 180.0 && half_fov.is_finite() && half_fov > 0.0) {
            return Err(Error::DegenerateCamera(format!(
                "field of view {} degrees gives half_fov {}",
                fov, half_fov
            )));
        }

        Ok(Self { forward, right, up, half_fov })
    }

    /// Distance of a camera-relative vector along the view direction
    pub fn depth(&self, cam_vec: Vec3) -> f32 {
        cam_vec.dot(self.forward)
    }
}

/// Normalize, or `None` if the length is below `BASIS_EPSILON` or not finite
fn normalize_checked(v: Vec3) -> Option<Vec3> {
    let length = v.length();
    if length.is_finite() && length > BASIS_EPSILON {
        Some(v / length)
    } else {
        None
    }
}

/// Frame-scoped snapshot consumed by the pipelines.
///
/// Captures the eye position and zoom together with the basis so a camera
/// edited after `tick()` cannot desynchronize the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub basis: ViewBasis,
    pub eye: Vec3,
    pub zoom: f32,
}

impl FrameView {
    pub fn new(basis: ViewBasis, eye: Vec3, zoom: f32) -> Self {
        Self { basis, eye, zoom }
    }

    /// Build a snapshot straight from a camera
    pub fn from_camera(camera: &Camera) -> Result<Self> {
        Ok(Self::new(ViewBasis::from_camera(camera)?, camera.position(), camera.zoom()))
    }

    /// Vector from the eye to a world point
    pub fn camera_vector(&self, world: Vec3) -> Vec3 {
        world - self.eye
    }
}

#[cfg(test)]
#[path = "view_basis_tests.rs"]
mod tests;
