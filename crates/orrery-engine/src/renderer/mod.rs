pub mod camera;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{CameraState, Camera3D, CameraUniform};
pub use instance::{SphereInstance, StarVertex};
pub use traits::{RenderSurface, FrameView};
