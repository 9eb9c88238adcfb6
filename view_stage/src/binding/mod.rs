/// Binding module — the graphics binding layer the stager writes through

// Module declarations
pub mod parameter_binding;
pub mod memory_binding;

// Re-exports
pub use parameter_binding::*;
pub use memory_binding::*;
