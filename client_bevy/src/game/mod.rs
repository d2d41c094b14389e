mod bridge;
mod camera;
mod core;
mod hud;
mod input;
mod table;
mod visuals;

pub use camera::CameraPlugin;
pub use core::{load_config, CorePlugin};
pub(crate) use core::{FixedSet, UpdateSet};
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use table::TablePlugin;
pub use visuals::VisualsPlugin;
