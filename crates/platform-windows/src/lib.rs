//! Windows display backend.
//!
//! Implements [`DisplayBackend`] on top of three Win32 facilities:
//! - **GDI:** `EnumDisplayMonitors` for geometry and the primary flag
//! - **DisplayConfig:** `QueryDisplayConfig` for friendly names and rotation
//! - **DXGI:** adapter/output enumeration for desktop-duplication identifiers
//!
//! On other targets the backend compiles but reports every call as
//! unsupported, so callers can depend on this crate unconditionally.

#[cfg(windows)]
mod display_config;
#[cfg(windows)]
mod dxgi;
#[cfg(windows)]
mod gdi;

use monreg_common::config::RegistryConfig;
use monreg_common::error::MonregResult;
use monreg_platform_core::{
    AdapterOutputDesc, DisplayBackend, DisplayConfigEntry, DisplayMonitor, MonitorRecord,
    MonitorRegistry,
};

/// Display backend backed by the Win32 APIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Backend;

impl Win32Backend {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
impl DisplayBackend for Win32Backend {
    fn name(&self) -> &str {
        "win32"
    }

    fn enumerate_displays(&self) -> MonregResult<Vec<DisplayMonitor>> {
        gdi::enumerate_displays()
    }

    fn query_display_config(&self) -> MonregResult<Vec<DisplayConfigEntry>> {
        display_config::query_display_config()
    }

    fn enumerate_adapter_outputs(&self) -> MonregResult<Vec<AdapterOutputDesc>> {
        dxgi::enumerate_adapter_outputs()
    }
}

#[cfg(not(windows))]
impl DisplayBackend for Win32Backend {
    fn name(&self) -> &str {
        "win32"
    }

    fn enumerate_displays(&self) -> MonregResult<Vec<DisplayMonitor>> {
        Err(unsupported())
    }

    fn query_display_config(&self) -> MonregResult<Vec<DisplayConfigEntry>> {
        Err(unsupported())
    }

    fn enumerate_adapter_outputs(&self) -> MonregResult<Vec<AdapterOutputDesc>> {
        Err(unsupported())
    }
}

#[cfg(not(windows))]
fn unsupported() -> monreg_common::error::MonregError {
    monreg_common::error::MonregError::unsupported("Win32 display APIs are only available on Windows")
}

/// Build a registry over the Win32 backend and populate it.
pub fn load_registry(config: RegistryConfig) -> MonitorRegistry<Win32Backend> {
    let mut registry = MonitorRegistry::with_config(Win32Backend::new(), config);
    registry.reload();
    registry
}

/// Detect monitors on Windows, primary first.
pub fn detect_monitors() -> MonregResult<Vec<MonitorRecord>> {
    if cfg!(not(windows)) {
        return Err(monreg_common::error::MonregError::unsupported(
            "Windows monitor detection requires a Windows host",
        ));
    }
    Ok(load_registry(RegistryConfig::default()).monitors().to_vec())
}

#[cfg(windows)]
pub(crate) fn utf16z_to_string(input: &[u16]) -> String {
    let len = input.iter().position(|&ch| ch == 0).unwrap_or(input.len());
    String::from_utf16_lossy(&input[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn detect_monitors_is_unsupported_off_windows() {
        let err = detect_monitors().unwrap_err();
        assert!(matches!(
            err,
            monreg_common::error::MonregError::Unsupported { .. }
        ));
    }

    #[cfg(not(windows))]
    #[test]
    fn registry_degrades_to_empty_off_windows() {
        let registry = load_registry(RegistryConfig::default());
        assert!(registry.is_empty());
        assert!(registry.adapter_output(0).is_err());
    }

    #[cfg(windows)]
    #[test]
    fn utf16z_stops_at_nul() {
        let mut buf = [0u16; 32];
        for (slot, ch) in buf.iter_mut().zip(r"\\.\DISPLAY1".encode_utf16()) {
            *slot = ch;
        }
        assert_eq!(utf16z_to_string(&buf), r"\\.\DISPLAY1");
    }

    #[cfg(windows)]
    #[test]
    fn live_registry_keeps_primary_first() {
        let registry = load_registry(RegistryConfig::default());
        if let Some(first) = registry.monitors().first() {
            assert!(first.is_primary);
        }
    }
}
