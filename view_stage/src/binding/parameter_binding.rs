/// ParameterBinding trait - slot lookup and writes on a linked shader program

use glam::Vec3;

/// Graphics binding layer consumed by the stager
///
/// Implemented by backend-specific bindings (e.g. `GlBinding` over an OpenGL
/// context) and by `MemoryBinding`.
///
/// A slot that cannot be resolved is reported as `None`. Every write method
/// accepts that `None` and must treat it as a no-op, the same way OpenGL
/// ignores writes to location -1.
pub trait ParameterBinding {
    /// Handle of an already-linked shader program (owned by the caller)
    type Program;

    /// Resolved location of a named slot within a program
    type Slot;

    /// Resolve a named slot on a program
    ///
    /// # Arguments
    ///
    /// * `program` - Linked shader program
    /// * `name` - Slot name as declared by the shader
    ///
    /// # Returns
    ///
    /// The slot location, or `None` if the program does not expose it
    fn resolve_slot(&self, program: &Self::Program, name: &str) -> Option<Self::Slot>;

    /// Write a float scalar
    fn write_scalar(&mut self, slot: Option<&Self::Slot>, value: f32);

    /// Write a 3-component float vector
    fn write_vec3(&mut self, slot: Option<&Self::Slot>, value: Vec3);

    /// Write a signed integer
    fn write_int(&mut self, slot: Option<&Self::Slot>, value: i32);
}
