/// GlBinding - ParameterBinding over a glow context

use glow::HasContext;
use view_stage::glam::Vec3;
use view_stage::viewstage::{ParameterBinding, ParameterStager, Result, ViewSetup};

/// Binding that writes uniforms through an OpenGL context
///
/// Must be used on the thread that owns the context, with the context
/// current.
pub struct GlBinding<'a, C: HasContext> {
    gl: &'a C,
}

impl<'a, C: HasContext> GlBinding<'a, C> {
    /// Wrap a context
    pub fn new(gl: &'a C) -> Self {
        Self { gl }
    }

    /// Make `program` current and stage a complete view setup into it
    ///
    /// # Arguments
    ///
    /// * `stager` - Stager carrying the slot policy
    /// * `program` - Linked shader program
    /// * `setup` - Projection, transform and camera selectors
    pub fn stage_view(
        &mut self,
        stager: &ParameterStager,
        program: C::Program,
        setup: &ViewSetup,
    ) -> Result<()> {
        // SAFETY: `program` is a linked program of this context, and the
        // context is current on the calling thread.
        unsafe {
            self.gl.use_program(Some(program));
        }
        stager.apply_view(self, &program, setup)
    }
}

impl<'a, C: HasContext> ParameterBinding for GlBinding<'a, C> {
    type Program = C::Program;
    type Slot = C::UniformLocation;

    fn resolve_slot(&self, program: &C::Program, name: &str) -> Option<C::UniformLocation> {
        // SAFETY: query only; an unknown name yields None (location -1).
        unsafe { self.gl.get_uniform_location(*program, name) }
    }

    fn write_scalar(&mut self, slot: Option<&C::UniformLocation>, value: f32) {
        // SAFETY: a None location is ignored by GL.
        unsafe { self.gl.uniform_1_f32(slot, value) }
    }

    fn write_vec3(&mut self, slot: Option<&C::UniformLocation>, value: Vec3) {
        // SAFETY: a None location is ignored by GL.
        unsafe { self.gl.uniform_3_f32(slot, value.x, value.y, value.z) }
    }

    fn write_int(&mut self, slot: Option<&C::UniformLocation>, value: i32) {
        // SAFETY: a None location is ignored by GL.
        unsafe { self.gl.uniform_1_i32(slot, value) }
    }
}

#[cfg(test)]
#[path = "gl_binding_tests.rs"]
mod tests;
