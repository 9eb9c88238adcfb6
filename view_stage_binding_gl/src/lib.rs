/*!
# View Stage - OpenGL Binding

OpenGL implementation of the view stage `ParameterBinding` trait.

Slot lookups map to `glGetUniformLocation` and writes map to `glUniform*`
through the `glow` bindings. As with raw OpenGL, writes land in the program
currently in use; `GlBinding::stage_view` binds the program first.
*/

mod gl_binding;

pub use gl_binding::GlBinding;
