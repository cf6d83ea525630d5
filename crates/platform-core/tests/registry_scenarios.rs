use std::path::PathBuf;

use monreg_common::error::MonregError;
use monreg_platform_core::{
    AdapterOutput, DisplayLayout, Geometry, MonitorDetail, MonitorRegistry, Rotation,
};

fn load_fixture_layout(name: &str) -> DisplayLayout {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("layouts")
        .join(name);

    DisplayLayout::load(&path).expect("fixture layout should parse")
}

fn loaded_registry(name: &str) -> MonitorRegistry<DisplayLayout> {
    monreg_common::logging::init_default_logging();
    let mut registry = MonitorRegistry::new(load_fixture_layout(name));
    registry.reload();
    registry
}

#[test]
fn primary_matched_secondary_unresolved() {
    let registry = loaded_registry("dual-primary-matched.json");

    assert_eq!(registry.monitors().len(), 2);

    let primary = &registry.monitors()[0];
    assert!(primary.is_primary);
    assert_eq!(primary.geometry, Geometry::new(0, 0, 1920, 1080));
    assert_eq!(
        registry.adapter_output(0).unwrap(),
        AdapterOutput {
            adapter_index: 0,
            output_index: 0
        }
    );

    let secondary = &registry.monitors()[1];
    assert!(!secondary.is_primary);
    assert_eq!(secondary.friendly_name.as_deref(), Some("HP LP1965"));
    assert!(matches!(
        registry.adapter_output(1),
        Err(MonregError::AdapterOutputUnresolved { index: 1 })
    ));
    assert_eq!(
        registry.detail(1).unwrap(),
        MonitorDetail {
            width: 1280,
            height: 1024,
            offset_x: 1920,
            offset_y: 0,
            rotation_degrees: 90,
        }
    );
}

#[test]
fn adapter_factory_failure_still_lists_displays() {
    let registry = loaded_registry("adapter-factory-unavailable.json");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.monitors()[0].device_name, r"\\.\DISPLAY1");
    assert!(registry.monitors()[0].is_primary);
    assert!(registry.monitors()[0].friendly_name.is_none());
    assert!(registry.monitors()[0].rotation.is_none());

    for index in 0..registry.len() {
        let err = registry.adapter_output(index).unwrap_err();
        assert!(err.is_not_found());
    }
}

#[test]
fn display_config_failure_leaves_names_and_rotation_unset() {
    let registry = loaded_registry("display-config-unavailable.json");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.monitors()[0].device_name, r"\\.\DISPLAY1");
    assert!(registry.monitors()[0].is_primary);

    for (index, monitor) in registry.monitors().iter().enumerate() {
        assert!(monitor.friendly_name.is_none());
        assert!(monitor.rotation.is_none());
        assert!(monitor.target_id.is_none());
        assert_eq!(registry.detail(index).unwrap().rotation_degrees, 0);
        assert!(registry.adapter_output(index).is_ok());
    }
    assert_eq!(
        registry.adapter_output(1).unwrap(),
        AdapterOutput {
            adapter_index: 0,
            output_index: 1
        }
    );
}

#[test]
fn mirrored_displays_share_adapter_output() {
    let registry = loaded_registry("mirrored-projector.json");
    let monitors = registry.monitors();

    assert_eq!(monitors.len(), 3);
    assert_eq!(monitors[0].device_name, r"\\.\DISPLAY1");
    assert_eq!(monitors[1].device_name, r"\\.\DISPLAY3");
    assert_eq!(monitors[0].adapter_output, monitors[1].adapter_output);
    assert!(monitors[1].friendly_name.is_none());

    assert_eq!(
        registry.adapter_output(2).unwrap(),
        AdapterOutput {
            adapter_index: 1,
            output_index: 0
        }
    );
    assert_eq!(monitors[2].rotation, Some(Rotation::Rotate180));
}

#[test]
fn out_of_range_lookups_report_count() {
    let registry = loaded_registry("dual-primary-matched.json");

    for index in [2usize, 3, usize::MAX] {
        assert!(matches!(
            registry.adapter_output(index),
            Err(MonregError::MonitorIndexOutOfRange { count: 2, .. })
        ));
        assert!(registry.detail(index).is_err());
    }
}

#[test]
fn reload_is_idempotent() {
    let mut registry = loaded_registry("mirrored-projector.json");
    let first = registry.monitors().to_vec();
    let report = registry.reload();

    assert_eq!(registry.monitors(), first.as_slice());
    assert_eq!(report.monitors, 3);
    assert_eq!(report.matched, 3);
}

#[test]
fn registry_over_boxed_backend() {
    let backend: Box<dyn monreg_platform_core::DisplayBackend> =
        Box::new(load_fixture_layout("dual-primary-matched.json"));
    let mut registry = MonitorRegistry::new(backend);
    registry.reload();
    assert_eq!(registry.backend().name(), "layout");
    assert_eq!(registry.len(), 2);
}
