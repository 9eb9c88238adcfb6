/// Model transform presets — scale, rotation (degrees per axis) and translation.

use std::fmt;
use glam::Vec3;

/// Per-axis model transform sent to the vertex stage.
///
/// The order in which the vertex stage composes the three parts is owned by
/// the shader, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPreset {
    /// Scale factor per axis
    pub scale: Vec3,
    /// Rotation per axis, in degrees
    pub rotate: Vec3,
    /// Translation per axis
    pub translate: Vec3,
}

/// Transform selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformMode {
    /// Identity-like standard transform
    #[default]
    Off,
    /// Alternate transform
    On,
}

/// Indexed by `TransformMode as usize`.
static TRANSFORM_PRESETS: [TransformPreset; 2] = [
    // Off
    TransformPreset {
        scale: Vec3::new(1.0, 1.0, 1.0),
        rotate: Vec3::new(0.0, 0.0, 0.0),
        translate: Vec3::new(0.0, 0.0, 0.0),
    },
    // On
    TransformPreset {
        scale: Vec3::new(1.0, 2.0, 1.0),
        rotate: Vec3::new(0.0, 330.0, 305.0),
        translate: Vec3::new(-0.2, 0.2, 0.0),
    },
];

impl TransformMode {
    /// Every transform mode, in table order.
    pub const ALL: [TransformMode; 2] = [TransformMode::Off, TransformMode::On];

    /// Preset for this mode.
    pub fn preset(self) -> &'static TransformPreset {
        &TRANSFORM_PRESETS[self as usize]
    }

    /// The other transform mode.
    pub fn toggled(self) -> Self {
        match self {
            TransformMode::Off => TransformMode::On,
            TransformMode::On => TransformMode::Off,
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformMode::Off => write!(f, "standard transforms"),
            TransformMode::On => write!(f, "alternate transforms"),
        }
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
