//! List monitors.

use monreg_platform_core::{virtual_desktop_bounds, Geometry, MonitorRecord};
use serde::Serialize;

use super::Registry;

#[derive(Serialize)]
struct ListOutput<'a> {
    backend: &'a str,
    reloaded_at: Option<String>,
    virtual_desktop: Option<Geometry>,
    monitors: &'a [MonitorRecord],
}

pub fn run(registry: &Registry, json: bool) -> anyhow::Result<()> {
    let monitors = registry.monitors();

    if json {
        let output = ListOutput {
            backend: registry.backend().name(),
            reloaded_at: registry.last_reload().map(|ts| ts.to_rfc3339()),
            virtual_desktop: virtual_desktop_bounds(monitors),
            monitors,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if monitors.is_empty() {
        println!("No monitors found.");
        return Ok(());
    }

    for (index, m) in monitors.iter().enumerate() {
        let ids = match m.adapter_output {
            Some(ao) => format!("adapter {} output {}", ao.adapter_index, ao.output_index),
            None => "unresolved".to_string(),
        };
        println!(
            "[{index}] {} {}x{} at ({}, {}) rot {} {} {}",
            m.display_name(),
            m.geometry.width,
            m.geometry.height,
            m.geometry.x,
            m.geometry.y,
            m.rotation_degrees(),
            ids,
            if m.is_primary { "(primary)" } else { "" }
        );
    }

    if let Some(bounds) = virtual_desktop_bounds(monitors) {
        println!(
            "Virtual desktop: {}x{} at ({}, {})",
            bounds.width, bounds.height, bounds.x, bounds.y
        );
    }

    Ok(())
}
