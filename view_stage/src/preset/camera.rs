/// Camera presets — eye position, look-at point and up vector.

use std::fmt;
use glam::Vec3;

/// Viewing parameters sent to the vertex stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPreset {
    /// Camera position
    pub eye: Vec3,
    /// Point the camera looks at
    pub lookat: Vec3,
    /// Up direction
    pub up: Vec3,
}

/// Camera selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Camera at the origin looking down -Z
    #[default]
    Camera1,
    /// Raised camera looking down at the model
    Camera2,
}

/// Indexed by `CameraMode as usize`.
static CAMERA_PRESETS: [CameraPreset; 2] = [
    // Camera1
    CameraPreset {
        eye: Vec3::new(0.0, 0.0, 0.0),
        lookat: Vec3::new(0.0, 0.0, -1.0),
        up: Vec3::new(0.0, 1.0, 0.0),
    },
    // Camera2
    CameraPreset {
        eye: Vec3::new(0.0, 1.3, -0.5),
        lookat: Vec3::new(0.0, -0.4, -1.0),
        up: Vec3::new(0.0, 1.0, 0.0),
    },
];

impl CameraMode {
    /// Every camera mode, in table order.
    pub const ALL: [CameraMode; 2] = [CameraMode::Camera1, CameraMode::Camera2];

    /// Preset for this mode.
    pub fn preset(self) -> &'static CameraPreset {
        &CAMERA_PRESETS[self as usize]
    }

    /// The other camera.
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Camera1 => CameraMode::Camera2,
            CameraMode::Camera2 => CameraMode::Camera1,
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraMode::Camera1 => write!(f, "camera 1"),
            CameraMode::Camera2 => write!(f, "camera 2"),
        }
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
