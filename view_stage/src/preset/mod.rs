//! Preset module — compiled-in camera, transform and projection tables.
//!
//! Every mode selector maps to exactly one preset through a static table
//! indexed by the enum. Tables are never mutated.

mod camera;
mod transform;
mod projection;

pub use camera::{CameraMode, CameraPreset};
pub use transform::{TransformMode, TransformPreset};
pub use projection::{ProjectionBounds, ProjectionMode};
