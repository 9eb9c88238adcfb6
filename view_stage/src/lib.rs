/*!
# View Stage

Parameter staging for the vertex stage of a rasterization pipeline.

This crate writes fixed camera, model-transform and projection presets into
the named parameter slots (uniforms) of an already-linked shader program.
It owns no window, no context and no geometry: the shader program and the
graphics binding are provided by the caller.

## Architecture

- **ParameterBinding**: Trait over the graphics binding layer (slot lookup and writes)
- **ParameterStager**: Selects a preset per mode and writes it into the program's slots
- **Presets**: Compiled-in camera, transform and projection tables
- **MemoryBinding**: In-memory binding for headless drivers and tests

Backend crates (e.g. `view_stage_binding_gl`) implement `ParameterBinding`
for a concrete graphics API.
*/

// Internal modules
mod error;
mod logging;
pub mod log;
pub mod binding;
pub mod preset;
pub mod stage;

// Main viewstage namespace module
pub mod viewstage {
    // Error types
    pub use crate::error::{Error, Result};

    // Global logger access
    pub use crate::logging::Logging;

    // Binding trait (consumed interface)
    pub use crate::binding::ParameterBinding;

    // Stager (exposed interface)
    pub use crate::stage::{ParameterStager, StagerConfig, SlotPolicy, ViewSetup};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Binding sub-module
    pub mod binding {
        pub use crate::binding::*;
    }

    // Preset sub-module
    pub mod preset {
        pub use crate::preset::*;
    }

    // Slot-name contract
    pub mod slots {
        pub use crate::stage::slots::*;
    }
}

// Re-export math library at crate root
pub use glam;
