/// In-memory binding
///
/// Keeps programs and their uniform values in process memory. Used by
/// headless drivers and by tests to read back what the stager wrote.
///
/// Programs are stored in a SlotMap so handles stay valid (and detectably
/// stale) across removals.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use glam::Vec3;
use crate::binding::ParameterBinding;
use crate::error::{Error, Result};
use crate::stage_bail;

const LOG_SOURCE: &str = "viewstage::MemoryBinding";

new_key_type! {
    /// Handle of a program stored in a MemoryBinding.
    ///
    /// Keys of removed programs never alias a newer program.
    pub struct ProgramKey;
}

/// Value held by a uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
}

/// Resolved uniform location within a MemoryBinding program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemorySlot {
    program: ProgramKey,
    index: usize,
}

/// A program: its declared uniforms and their current values
struct MemoryProgram {
    /// Uniform name -> index into `values`
    locations: FxHashMap<String, usize>,
    /// Declared names, in declaration order
    names: Vec<String>,
    /// Last value written per uniform (None until first write)
    values: Vec<Option<UniformValue>>,
}

/// Binding backed by process memory
pub struct MemoryBinding {
    programs: SlotMap<ProgramKey, MemoryProgram>,
    /// Writes that landed in a uniform
    write_count: usize,
    /// Writes dropped because the slot was unresolved or stale
    dropped_writes: usize,
}

impl MemoryBinding {
    /// Create an empty binding
    pub fn new() -> Self {
        Self {
            programs: SlotMap::with_key(),
            write_count: 0,
            dropped_writes: 0,
        }
    }

    /// Register a program exposing the given uniform names
    ///
    /// Duplicate names collapse into one uniform.
    pub fn create_program<I, S>(&mut self, uniforms: I) -> ProgramKey
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut program = MemoryProgram {
            locations: FxHashMap::default(),
            names: Vec::new(),
            values: Vec::new(),
        };

        for name in uniforms {
            let name = name.into();
            if program.locations.contains_key(&name) {
                continue;
            }
            program.locations.insert(name.clone(), program.names.len());
            program.names.push(name);
            program.values.push(None);
        }

        crate::stage_debug!(
            LOG_SOURCE,
            "Created program with {} uniform(s)",
            program.names.len()
        );

        self.programs.insert(program)
    }

    /// Remove a program
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProgram` if the program was already removed.
    pub fn remove_program(&mut self, program: ProgramKey) -> Result<()> {
        if self.programs.remove(program).is_none() {
            stage_bail!(LOG_SOURCE, Error::InvalidProgram(format!("{:?} is not registered", program)));
        }
        Ok(())
    }

    /// Whether the program is registered
    pub fn contains_program(&self, program: ProgramKey) -> bool {
        self.programs.contains_key(program)
    }

    /// Declared uniform names of a program, in declaration order
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProgram` if the program is not registered.
    pub fn uniform_names(&self, program: ProgramKey) -> Result<&[String]> {
        match self.programs.get(program) {
            Some(p) => Ok(&p.names),
            None => stage_bail!(LOG_SOURCE, Error::InvalidProgram(format!("{:?} is not registered", program))),
        }
    }

    /// Current value of a uniform, if declared and written
    pub fn value(&self, program: ProgramKey, name: &str) -> Option<UniformValue> {
        let p = self.programs.get(program)?;
        let index = *p.locations.get(name)?;
        p.values[index]
    }

    /// Current value of an integer uniform
    pub fn int(&self, program: ProgramKey, name: &str) -> Option<i32> {
        match self.value(program, name)? {
            UniformValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Current value of a float uniform
    pub fn float(&self, program: ProgramKey, name: &str) -> Option<f32> {
        match self.value(program, name)? {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Current value of a vec3 uniform
    pub fn vec3(&self, program: ProgramKey, name: &str) -> Option<Vec3> {
        match self.value(program, name)? {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    /// Number of writes that landed in a uniform
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Number of writes dropped on an unresolved or stale slot
    pub fn dropped_writes(&self) -> usize {
        self.dropped_writes
    }

    fn store(&mut self, slot: Option<&MemorySlot>, value: UniformValue) {
        let target = slot.and_then(|s| {
            self.programs
                .get_mut(s.program)
                .and_then(|p| p.values.get_mut(s.index))
        });

        match target {
            Some(entry) => {
                *entry = Some(value);
                self.write_count += 1;
            }
            None => self.dropped_writes += 1,
        }
    }
}

impl Default for MemoryBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterBinding for MemoryBinding {
    type Program = ProgramKey;
    type Slot = MemorySlot;

    fn resolve_slot(&self, program: &ProgramKey, name: &str) -> Option<MemorySlot> {
        let p = self.programs.get(*program)?;
        let index = *p.locations.get(name)?;
        Some(MemorySlot { program: *program, index })
    }

    fn write_scalar(&mut self, slot: Option<&MemorySlot>, value: f32) {
        self.store(slot, UniformValue::Float(value));
    }

    fn write_vec3(&mut self, slot: Option<&MemorySlot>, value: Vec3) {
        self.store(slot, UniformValue::Vec3(value));
    }

    fn write_int(&mut self, slot: Option<&MemorySlot>, value: i32) {
        self.store(slot, UniformValue::Int(value));
    }
}

#[cfg(test)]
#[path = "memory_binding_tests.rs"]
mod tests;
