//! Frame module
//!
//! Renderer state and the per-frame driver the host calls into.

mod frame_driver;
mod renderer_state;

pub use frame_driver::{FrameDriver, FrameHost, DrawPass};
pub use renderer_state::RendererState;
