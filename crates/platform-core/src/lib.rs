//! monreg platform core contracts.
//!
//! This crate contains the cross-platform monitor data structures, the
//! [`DisplayBackend`] contract that OS-specific crates implement, and the
//! [`MonitorRegistry`] that merges display-monitor and adapter-output
//! enumeration into one ordered list.

pub mod backend;
pub mod layout;
pub mod registry;

pub use backend::{AdapterOutputDesc, DisplayBackend, DisplayConfigEntry, DisplayMonitor};
pub use layout::DisplayLayout;
pub use registry::{MonitorRegistry, ReloadReport};

use monreg_common::error::MonregError;
use serde::{Deserialize, Serialize};

/// Position and size of a display in virtual-desktop pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from rectangle edges as reported by GDI/DXGI (`RECT`).
    /// Inverted edges collapse to a zero extent.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: extent(left, right),
            height: extent(top, bottom),
        }
    }

    /// Right edge, clamped to `i32::MAX` for extents past the coordinate range.
    pub fn right(&self) -> i32 {
        far_edge(self.x, self.width)
    }

    pub fn bottom(&self) -> i32 {
        far_edge(self.y, self.height)
    }
}

fn far_edge(origin: i32, extent: u32) -> i32 {
    i32::try_from(i64::from(origin) + i64::from(extent)).unwrap_or(i32::MAX)
}

fn extent(near: i32, far: i32) -> u32 {
    u32::try_from(i64::from(far) - i64::from(near)).unwrap_or(0)
}

/// Display rotation, clockwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum Rotation {
    #[default]
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Self::Identity => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Self::Identity),
            90 => Some(Self::Rotate90),
            180 => Some(Self::Rotate180),
            270 => Some(Self::Rotate270),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Rotation {
    type Error = MonregError;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
            .ok_or_else(|| MonregError::config(format!("invalid rotation: {degrees} degrees")))
    }
}

impl From<Rotation> for u32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Graphics-adapter identifiers used to open a desktop-duplication capture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AdapterOutput {
    /// Index passed to `EnumAdapters1`.
    pub adapter_index: u32,
    /// Index passed to `EnumOutputs` on that adapter.
    pub output_index: u32,
}

/// One physical display as seen by the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitorRecord {
    /// GDI device name (for example `\\.\DISPLAY1`).
    pub device_name: String,
    pub geometry: Geometry,
    pub is_primary: bool,
    /// Human-readable monitor name, when the display configuration knows it.
    pub friendly_name: Option<String>,
    pub rotation: Option<Rotation>,
    /// Display-configuration target id of the path driving this display.
    pub target_id: Option<u32>,
    /// Set only when an adapter output has exactly this geometry.
    pub adapter_output: Option<AdapterOutput>,
}

impl MonitorRecord {
    /// Label for selection lists: friendly name if known, else device name.
    pub fn display_name(&self) -> &str {
        self.friendly_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.device_name)
    }

    pub fn rotation_degrees(&self) -> u32 {
        self.rotation.unwrap_or_default().degrees()
    }

    pub fn detail(&self) -> MonitorDetail {
        MonitorDetail {
            width: self.geometry.width,
            height: self.geometry.height,
            offset_x: self.geometry.x,
            offset_y: self.geometry.y,
            rotation_degrees: self.rotation_degrees(),
        }
    }
}

/// Flattened geometry and rotation of one monitor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitorDetail {
    pub width: u32,
    pub height: u32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub rotation_degrees: u32,
}

/// Compute the virtual desktop rectangle that covers all monitors.
/// Returns `None` for an empty list.
pub fn virtual_desktop_bounds(monitors: &[MonitorRecord]) -> Option<Geometry> {
    let min_x = monitors.iter().map(|m| m.geometry.x).min()?;
    let min_y = monitors.iter().map(|m| m.geometry.y).min()?;
    let max_x = monitors.iter().map(|m| m.geometry.right()).max()?;
    let max_y = monitors.iter().map(|m| m.geometry.bottom()).max()?;

    Some(Geometry::from_edges(min_x, min_y, max_x, max_y))
}
