pub mod check;
pub mod detail;
pub mod list;
pub mod resolve;

use std::path::Path;

use monreg_common::config::AppConfig;
use monreg_platform_core::{DisplayBackend, DisplayLayout, MonitorRegistry, ReloadReport};
use monreg_platform_windows::Win32Backend;

pub type Registry = MonitorRegistry<Box<dyn DisplayBackend>>;

/// Pick a backend, build the registry and load it once.
pub fn open_registry(
    layout: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<(Registry, ReloadReport)> {
    let backend: Box<dyn DisplayBackend> = match layout {
        Some(path) => Box::new(
            DisplayLayout::load(path)
                .map_err(|e| anyhow::anyhow!("Failed to load layout {}: {e}", path.display()))?,
        ),
        None => Box::new(Win32Backend::new()),
    };

    tracing::debug!(backend = backend.name(), "Opening monitor registry");
    let mut registry = MonitorRegistry::with_config(backend, config.registry.clone());
    let report = registry.reload();
    Ok((registry, report))
}
