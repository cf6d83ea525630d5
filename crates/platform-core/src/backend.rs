//! Display backend contract.
//!
//! A backend exposes the three OS facilities the registry correlates: the
//! display-monitor API, the display-configuration API, and graphics-adapter
//! output enumeration. Each call is independent and may fail on its own; the
//! registry decides how to degrade.

use monreg_common::error::MonregResult;
use serde::{Deserialize, Serialize};

use crate::{Geometry, Rotation};

/// A display as reported by the display-monitor API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayMonitor {
    pub device_name: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub is_primary: bool,
}

/// Extended metadata for one active display path, keyed by the GDI device
/// name of its source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfigEntry {
    pub device_name: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub rotation: Option<Rotation>,
    #[serde(default)]
    pub target_id: Option<u32>,
}

/// An output attached to a graphics adapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdapterOutputDesc {
    pub adapter_index: u32,
    pub output_index: u32,
    pub geometry: Geometry,
    #[serde(default)]
    pub device_name: String,
    #[serde(default = "default_attached")]
    pub attached_to_desktop: bool,
}

fn default_attached() -> bool {
    true
}

/// Source of display enumeration data.
pub trait DisplayBackend {
    /// Short backend identifier for logs.
    fn name(&self) -> &str;

    /// Active display monitors in OS enumeration order.
    fn enumerate_displays(&self) -> MonregResult<Vec<DisplayMonitor>>;

    /// Display-configuration metadata for all active paths.
    fn query_display_config(&self) -> MonregResult<Vec<DisplayConfigEntry>>;

    /// Outputs of every graphics adapter, adapter by adapter.
    /// Fails when the adapter enumerator itself cannot be created.
    fn enumerate_adapter_outputs(&self) -> MonregResult<Vec<AdapterOutputDesc>>;
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn enumerate_displays(&self) -> MonregResult<Vec<DisplayMonitor>> {
        (**self).enumerate_displays()
    }

    fn query_display_config(&self) -> MonregResult<Vec<DisplayConfigEntry>> {
        (**self).query_display_config()
    }

    fn enumerate_adapter_outputs(&self) -> MonregResult<Vec<AdapterOutputDesc>> {
        (**self).enumerate_adapter_outputs()
    }
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for &B {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn enumerate_displays(&self) -> MonregResult<Vec<DisplayMonitor>> {
        (**self).enumerate_displays()
    }

    fn query_display_config(&self) -> MonregResult<Vec<DisplayConfigEntry>> {
        (**self).query_display_config()
    }

    fn enumerate_adapter_outputs(&self) -> MonregResult<Vec<AdapterOutputDesc>> {
        (**self).enumerate_adapter_outputs()
    }
}
