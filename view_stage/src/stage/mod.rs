//! Stage module — writes presets into a program's named slots.

pub mod slots;
mod config;
mod view_setup;
mod stager;

pub use config::{StagerConfig, SlotPolicy};
pub use view_setup::ViewSetup;
pub use stager::ParameterStager;
