/// ViewSetup — one selector of each kind, staged together per draw.

use crate::preset::{CameraMode, ProjectionMode, TransformMode};

/// Complete per-draw selection of presets.
///
/// The default is frustum projection, standard transforms and camera 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewSetup {
    pub projection: ProjectionMode,
    pub transforms: TransformMode,
    pub camera: CameraMode,
}

impl ViewSetup {
    /// Create a setup from explicit selectors.
    pub fn new(projection: ProjectionMode, transforms: TransformMode, camera: CameraMode) -> Self {
        Self { projection, transforms, camera }
    }

    /// Flip the projection mode.
    pub fn toggle_projection(&mut self) {
        self.projection = self.projection.toggled();
    }

    /// Flip the transform mode.
    pub fn toggle_transforms(&mut self) {
        self.transforms = self.transforms.toggled();
    }

    /// Flip the camera.
    pub fn toggle_camera(&mut self) {
        self.camera = self.camera.toggled();
    }
}
