use glam::Vec3;
use super::*;

// ============================================================================
// Preset lookup
// ============================================================================

#[test]
fn test_camera1_preset() {
    let preset = CameraMode::Camera1.preset();

    assert_eq!(preset.eye, Vec3::ZERO);
    assert_eq!(preset.lookat, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(preset.up, Vec3::Y);
}

#[test]
fn test_camera2_preset() {
    let preset = CameraMode::Camera2.preset();

    assert_eq!(preset.eye, Vec3::new(0.0, 1.3, -0.5));
    assert_eq!(preset.lookat, Vec3::new(0.0, -0.4, -1.0));
    assert_eq!(preset.up, Vec3::Y);
}

#[test]
fn test_presets_are_distinct() {
    assert_ne!(CameraMode::Camera1.preset(), CameraMode::Camera2.preset());
}

#[test]
fn test_preset_lookup_is_stable() {
    // Same static record on every lookup
    assert!(std::ptr::eq(CameraMode::Camera2.preset(), CameraMode::Camera2.preset()));
}

// ============================================================================
// Mode helpers
// ============================================================================

#[test]
fn test_all_in_table_order() {
    assert_eq!(CameraMode::ALL, [CameraMode::Camera1, CameraMode::Camera2]);
}

#[test]
fn test_default_is_camera1() {
    assert_eq!(CameraMode::default(), CameraMode::Camera1);
}

#[test]
fn test_toggled() {
    assert_eq!(CameraMode::Camera1.toggled(), CameraMode::Camera2);
    assert_eq!(CameraMode::Camera2.toggled(), CameraMode::Camera1);
    for mode in CameraMode::ALL {
        assert_eq!(mode.toggled().toggled(), mode);
    }
}

#[test]
fn test_display() {
    assert_eq!(CameraMode::Camera1.to_string(), "camera 1");
    assert_eq!(CameraMode::Camera2.to_string(), "camera 2");
}
