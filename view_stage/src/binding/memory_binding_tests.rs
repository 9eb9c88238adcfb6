/// Unit tests for MemoryBinding

use glam::Vec3;
use crate::binding::{MemoryBinding, ParameterBinding, UniformValue};
use crate::error::Error;

// ============================================================================
// Program management
// ============================================================================

#[test]
fn test_create_program_declares_uniforms() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["eye", "lookat", "up"]);

    assert!(binding.contains_program(program));
    assert_eq!(binding.uniform_names(program).unwrap(), ["eye", "lookat", "up"]);
}

#[test]
fn test_duplicate_uniform_names_collapse() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(vec!["near".to_string(), "far".to_string(), "near".to_string()]);

    assert_eq!(binding.uniform_names(program).unwrap(), ["near", "far"]);
}

#[test]
fn test_remove_program() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["type"]);

    assert!(binding.remove_program(program).is_ok());
    assert!(!binding.contains_program(program));

    match binding.remove_program(program) {
        Err(Error::InvalidProgram(_)) => {}
        other => panic!("expected InvalidProgram, got {:?}", other),
    }
    assert!(matches!(binding.uniform_names(program), Err(Error::InvalidProgram(_))));
}

#[test]
fn test_stale_key_does_not_alias_new_program() {
    let mut binding = MemoryBinding::new();
    let old = binding.create_program(["left"]);
    binding.remove_program(old).unwrap();
    let new = binding.create_program(["left"]);

    assert_ne!(old, new);
    assert!(binding.resolve_slot(&old, "left").is_none());
    assert!(binding.resolve_slot(&new, "left").is_some());
}

// ============================================================================
// Slot resolution
// ============================================================================

#[test]
fn test_resolve_declared_and_undeclared() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["scale", "rotate"]);

    assert!(binding.resolve_slot(&program, "scale").is_some());
    assert!(binding.resolve_slot(&program, "rotate").is_some());
    assert!(binding.resolve_slot(&program, "translate").is_none());
}

#[test]
fn test_resolve_is_per_program() {
    let mut binding = MemoryBinding::new();
    let a = binding.create_program(["eye"]);
    let b = binding.create_program(["eye"]);

    assert_ne!(binding.resolve_slot(&a, "eye"), binding.resolve_slot(&b, "eye"));
}

// ============================================================================
// Writes and read-back
// ============================================================================

#[test]
fn test_typed_writes_and_read_back() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["type", "near", "eye"]);

    let ty = binding.resolve_slot(&program, "type");
    let near = binding.resolve_slot(&program, "near");
    let eye = binding.resolve_slot(&program, "eye");

    binding.write_int(ty.as_ref(), 1);
    binding.write_scalar(near.as_ref(), 0.9);
    binding.write_vec3(eye.as_ref(), Vec3::new(0.0, 1.3, -0.5));

    assert_eq!(binding.int(program, "type"), Some(1));
    assert_eq!(binding.float(program, "near"), Some(0.9));
    assert_eq!(binding.vec3(program, "eye"), Some(Vec3::new(0.0, 1.3, -0.5)));
    assert_eq!(binding.value(program, "type"), Some(UniformValue::Int(1)));
    assert_eq!(binding.write_count(), 3);
    assert_eq!(binding.dropped_writes(), 0);
}

#[test]
fn test_unwritten_uniform_has_no_value() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["far"]);

    assert!(binding.value(program, "far").is_none());
    assert!(binding.value(program, "missing").is_none());
}

#[test]
fn test_typed_getter_mismatch_returns_none() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["type"]);
    let slot = binding.resolve_slot(&program, "type");
    binding.write_int(slot.as_ref(), 0);

    assert_eq!(binding.float(program, "type"), None);
    assert_eq!(binding.vec3(program, "type"), None);
}

#[test]
fn test_write_overwrites_previous_value() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["scale"]);
    let slot = binding.resolve_slot(&program, "scale");

    binding.write_vec3(slot.as_ref(), Vec3::ONE);
    binding.write_vec3(slot.as_ref(), Vec3::new(1.0, 2.0, 1.0));

    assert_eq!(binding.vec3(program, "scale"), Some(Vec3::new(1.0, 2.0, 1.0)));
}

#[test]
fn test_write_to_unresolved_slot_is_noop() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["eye"]);
    let missing = binding.resolve_slot(&program, "lookat");

    binding.write_vec3(missing.as_ref(), Vec3::ONE);
    binding.write_scalar(None, 1.0);
    binding.write_int(None, 1);

    assert_eq!(binding.write_count(), 0);
    assert_eq!(binding.dropped_writes(), 3);
    assert!(binding.value(program, "eye").is_none());
}

#[test]
fn test_write_to_removed_program_is_dropped() {
    let mut binding = MemoryBinding::new();
    let program = binding.create_program(["up"]);
    let slot = binding.resolve_slot(&program, "up");
    binding.remove_program(program).unwrap();

    binding.write_vec3(slot.as_ref(), Vec3::Y);

    assert_eq!(binding.write_count(), 0);
    assert_eq!(binding.dropped_writes(), 1);
}
