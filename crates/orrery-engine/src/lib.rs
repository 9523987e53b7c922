pub mod api;
pub mod core;
pub mod components;
pub mod input;
pub mod renderer;
pub mod picking;
pub mod systems;
pub mod bridge;
pub mod ui;
pub mod driver;

pub use glam;

// Re-export key types at crate root for convenience
pub use crate::api::config::{OrreryConfig, CameraConfig, SimulationConfig, LayoutConfig, SceneConfig, BodyDesc};
pub use crate::api::error::OrreryError;
pub use crate::api::types::{EntityId, FrameEvent};
pub use crate::core::bodies::OrbitalBody;
pub use crate::core::scene::{SceneGraph, Planet, Sun};
pub use crate::core::simulation::{OrbitState, step_simulation};
pub use crate::core::time::FrameClock;
pub use crate::components::mesh::{MeshComponent, MeshColor};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::input::command::{Command, CommandQueue};
pub use crate::input::controller::{InputController, PointerDragState};
pub use crate::renderer::camera::{CameraState, Camera3D, CameraUniform};
pub use crate::renderer::instance::{SphereInstance, StarVertex};
pub use crate::renderer::traits::{RenderSurface, FrameView};
pub use crate::picking::{Ray, PickTarget, PickHit, hit_test, pointer_ray};
pub use crate::systems::lighting::{PointLight, LightState};
pub use crate::systems::starfield::Starfield;
pub use crate::bridge::protocol::ProtocolLayout;
pub use crate::bridge::surface::SharedBufferSurface;
pub use crate::ui::layout::SurfaceSize;
pub use crate::ui::widgets::{SliderSpec, Theme, pause_button_label};
pub use crate::ui::tooltip::Tooltip;
pub use crate::driver::{FrameDriver, RunState};
