//! Slot names expected on the consuming vertex shader.
//!
//! These must match the uniform declarations of the shader source.

/// Projection flag: 0 = frustum, 1 = orthographic (int)
pub const TYPE: &str = "type";
/// Left clipping plane (float)
pub const LEFT: &str = "left";
/// Right clipping plane (float)
pub const RIGHT: &str = "right";
/// Top clipping plane (float)
pub const TOP: &str = "top";
/// Bottom clipping plane (float)
pub const BOTTOM: &str = "bottom";
/// Near clipping plane (float)
pub const NEAR: &str = "near";
/// Far clipping plane (float)
pub const FAR: &str = "far";

/// Per-axis scale (vec3)
pub const SCALE: &str = "scale";
/// Per-axis rotation in degrees (vec3)
pub const ROTATE: &str = "rotate";
/// Translation (vec3)
pub const TRANSLATE: &str = "translate";

/// Camera position (vec3)
pub const EYE: &str = "eye";
/// Look-at point (vec3)
pub const LOOKAT: &str = "lookat";
/// Up vector (vec3)
pub const UP: &str = "up";

/// Bounds slots, in `ProjectionBounds::to_array` order.
pub const PROJECTION_BOUND_SLOTS: [&str; 6] = [LEFT, RIGHT, TOP, BOTTOM, NEAR, FAR];

/// Slots written by `apply_projection`.
pub const PROJECTION_SLOTS: [&str; 7] = [TYPE, LEFT, RIGHT, TOP, BOTTOM, NEAR, FAR];

/// Slots written by `apply_transforms`.
pub const TRANSFORM_SLOTS: [&str; 3] = [SCALE, ROTATE, TRANSLATE];

/// Slots written by `apply_camera`.
pub const CAMERA_SLOTS: [&str; 3] = [EYE, LOOKAT, UP];

/// Every slot the stager writes.
pub const ALL_SLOTS: [&str; 13] = [
    TYPE, LEFT, RIGHT, TOP, BOTTOM, NEAR, FAR,
    SCALE, ROTATE, TRANSLATE,
    EYE, LOOKAT, UP,
];
