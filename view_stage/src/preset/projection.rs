/// Projection bounds and projection mode.
///
/// Both projection modes share one view volume; only the flag written to the
/// shader's `type` slot differs.

use std::fmt;

/// Clipping volume boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionBounds {
    /// Bounds in slot order: left, right, top, bottom, near, far.
    pub fn to_array(&self) -> [f32; 6] {
        [self.left, self.right, self.top, self.bottom, self.near, self.far]
    }
}

/// Projection selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectionMode {
    /// Perspective projection
    #[default]
    Frustum,
    /// Parallel projection
    Orthographic,
}

static PROJECTION_BOUNDS: ProjectionBounds = ProjectionBounds {
    left: -1.0,
    right: 1.0,
    top: 1.0,
    bottom: -1.0,
    near: 0.9,
    far: 4.5,
};

/// Shader flag per mode, indexed by `ProjectionMode as usize`.
const PROJECTION_FLAGS: [i32; 2] = [0, 1];

impl ProjectionMode {
    /// Every projection mode, in table order.
    pub const ALL: [ProjectionMode; 2] = [ProjectionMode::Frustum, ProjectionMode::Orthographic];

    /// Integer written into the shader's `type` slot (0 = frustum, 1 = orthographic).
    pub fn flag(self) -> i32 {
        PROJECTION_FLAGS[self as usize]
    }

    /// View volume for this mode. Identical for every mode.
    pub fn bounds(self) -> &'static ProjectionBounds {
        &PROJECTION_BOUNDS
    }

    /// The other projection.
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Frustum => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Frustum,
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionMode::Frustum => write!(f, "frustum"),
            ProjectionMode::Orthographic => write!(f, "orthographic"),
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
