/// ParameterStager — selects a preset per mode and writes it into a program.
///
/// Each operation resolves every slot it needs before the first write, then
/// writes one complete preset. Operations are idempotent and touch only their
/// own slots.

use crate::binding::ParameterBinding;
use crate::error::{Error, Result};
use crate::preset::{CameraMode, ProjectionMode, TransformMode};
use crate::stage::config::{SlotPolicy, StagerConfig};
use crate::stage::slots;
use crate::stage::view_setup::ViewSetup;
use crate::{stage_bail, stage_trace, stage_warn};

/// Writes camera, transform and projection presets into shader slots.
///
/// # Example
///
/// ```
/// use view_stage::viewstage::{ParameterStager, ViewSetup};
/// use view_stage::viewstage::binding::MemoryBinding;
/// use view_stage::viewstage::slots::ALL_SLOTS;
///
/// let mut binding = MemoryBinding::new();
/// let program = binding.create_program(ALL_SLOTS);
///
/// let stager = ParameterStager::default();
/// stager.apply_view(&mut binding, &program, &ViewSetup::default())?;
///
/// assert_eq!(binding.int(program, "type"), Some(0));
/// # Ok::<(), view_stage::viewstage::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterStager {
    config: StagerConfig,
}

impl ParameterStager {
    /// Create a stager with the given configuration
    pub fn new(config: StagerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &StagerConfig {
        &self.config
    }

    /// Write the projection flag and the shared view-volume bounds
    ///
    /// Writes `mode.flag()` into `type` and the six bounds into
    /// `left`, `right`, `top`, `bottom`, `near`, `far`.
    ///
    /// # Errors
    ///
    /// Only under `SlotPolicy::Strict`: `Error::MissingSlot` if any of the
    /// seven slots is missing. Nothing is written in that case.
    pub fn apply_projection<B: ParameterBinding>(
        &self,
        binding: &mut B,
        program: &B::Program,
        mode: ProjectionMode,
    ) -> Result<()> {
        let [flag, bounds @ ..] =
            self.resolve(binding, program, "apply_projection", &slots::PROJECTION_SLOTS)?;

        binding.write_int(flag.as_ref(), mode.flag());
        for (slot, value) in bounds.iter().zip(mode.bounds().to_array()) {
            binding.write_scalar(slot.as_ref(), value);
        }

        if self.config.trace_writes {
            stage_trace!(&self.config.log_source, "Projection set to {}", mode);
        }
        Ok(())
    }

    /// Write the scale, rotate and translate vectors of the selected preset
    ///
    /// # Errors
    ///
    /// Only under `SlotPolicy::Strict`: `Error::MissingSlot` if any of the
    /// three slots is missing. Nothing is written in that case.
    pub fn apply_transforms<B: ParameterBinding>(
        &self,
        binding: &mut B,
        program: &B::Program,
        mode: TransformMode,
    ) -> Result<()> {
        let [scale, rotate, translate] =
            self.resolve(binding, program, "apply_transforms", &slots::TRANSFORM_SLOTS)?;
        let preset = mode.preset();

        binding.write_vec3(scale.as_ref(), preset.scale);
        binding.write_vec3(rotate.as_ref(), preset.rotate);
        binding.write_vec3(translate.as_ref(), preset.translate);

        if self.config.trace_writes {
            stage_trace!(&self.config.log_source, "Transforms set to {}", mode);
        }
        Ok(())
    }

    /// Write the eye, lookat and up vectors of the selected camera
    ///
    /// # Errors
    ///
    /// Only under `SlotPolicy::Strict`: `Error::MissingSlot` if any of the
    /// three slots is missing. Nothing is written in that case.
    pub fn apply_camera<B: ParameterBinding>(
        &self,
        binding: &mut B,
        program: &B::Program,
        mode: CameraMode,
    ) -> Result<()> {
        let [eye, lookat, up] =
            self.resolve(binding, program, "apply_camera", &slots::CAMERA_SLOTS)?;
        let preset = mode.preset();

        binding.write_vec3(eye.as_ref(), preset.eye);
        binding.write_vec3(lookat.as_ref(), preset.lookat);
        binding.write_vec3(up.as_ref(), preset.up);

        if self.config.trace_writes {
            stage_trace!(&self.config.log_source, "Camera set to {}", mode);
        }
        Ok(())
    }

    /// Apply projection, transforms and camera, in that order
    ///
    /// Under `SlotPolicy::Strict` the first failing operation stops the
    /// sequence; operations before it have already been applied.
    pub fn apply_view<B: ParameterBinding>(
        &self,
        binding: &mut B,
        program: &B::Program,
        setup: &ViewSetup,
    ) -> Result<()> {
        self.apply_projection(binding, program, setup.projection)?;
        self.apply_transforms(binding, program, setup.transforms)?;
        self.apply_camera(binding, program, setup.camera)?;
        Ok(())
    }

    /// Slot names the program does not expose, in `ALL_SLOTS` order
    pub fn missing_slots<B: ParameterBinding>(
        &self,
        binding: &B,
        program: &B::Program,
    ) -> Vec<&'static str> {
        slots::ALL_SLOTS
            .iter()
            .copied()
            .filter(|name| binding.resolve_slot(program, name).is_none())
            .collect()
    }

    /// Resolve every slot of an operation, applying the slot policy
    fn resolve<B: ParameterBinding, const N: usize>(
        &self,
        binding: &B,
        program: &B::Program,
        operation: &'static str,
        names: &[&'static str; N],
    ) -> Result<[Option<B::Slot>; N]> {
        let resolved: [Option<B::Slot>; N] =
            std::array::from_fn(|i| binding.resolve_slot(program, names[i]));

        match self.config.slot_policy {
            SlotPolicy::Silent => {}
            SlotPolicy::Warn => {
                for (name, slot) in names.iter().zip(&resolved) {
                    if slot.is_none() {
                        stage_warn!(
                            &self.config.log_source,
                            "Slot '{}' not found on program, {} skips it",
                            name,
                            operation
                        );
                    }
                }
            }
            SlotPolicy::Strict => {
                if let Some(index) = resolved.iter().position(Option::is_none) {
                    stage_bail!(
                        &self.config.log_source,
                        Error::MissingSlot { slot: names[index], operation }
                    );
                }
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
#[path = "stager_tests.rs"]
mod tests;
