//! Camera module - camera record, view basis, and the per-frame camera model.

mod camera;
mod camera_model;
mod view_basis;

pub use camera::Camera;
pub use camera_model::CameraModel;
pub use view_basis::{ViewBasis, FrameView, BASIS_EPSILON};
