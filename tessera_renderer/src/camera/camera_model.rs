/// Camera model - owns the camera record and this frame's basis.

use crate::error::Result;
use crate::engine_err;
use super::camera::Camera;
use super::view_basis::{FrameView, ViewBasis};

/// Owns camera parameters and the basis derived from them.
///
/// The basis is only valid for the frame it was refreshed in. A failed
/// refresh clears it, so no render entry point can reuse last frame's
/// basis with this frame's actors.
#[derive(Debug, Clone, Default)]
pub struct CameraModel {
    camera: Camera,
    frame: Option<FrameView>,
}

impl CameraModel {
    pub fn new(camera: Camera) -> Self {
        Self { camera, frame: None }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access, for use between frames.
    ///
    /// Edits take effect at the next `refresh_basis`.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Recompute the view basis for the current frame.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateCamera` (logged) and clears the stored
    /// frame if the camera geometry is degenerate.
    pub fn refresh_basis(&mut self) -> Result<&ViewBasis> {
        match FrameView::from_camera(&self.camera) {
            Ok(frame) => {
                let frame = self.frame.insert(frame);
                Ok(&frame.basis)
            }
            Err(error) => {
                self.frame = None;
                Err(engine_err!("tessera::CameraModel", error))
            }
        }
    }

    /// Basis from the last successful refresh, if any
    pub fn basis(&self) -> Option<&ViewBasis> {
        self.frame.as_ref().map(|frame| &frame.basis)
    }

    /// Full frame snapshot from the last successful refresh, if any
    pub fn frame_view(&self) -> Option<&FrameView> {
        self.frame.as_ref()
    }

    /// Drop the stored basis
    pub fn invalidate(&mut self) {
        self.frame = None;
    }
}

#[cfg(test)]
#[path = "camera_model_tests.rs"]
mod tests;
