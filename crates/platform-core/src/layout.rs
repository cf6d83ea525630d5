//! In-memory display layouts.
//!
//! A [`DisplayLayout`] is a serde-loadable snapshot of what the three OS
//! facilities would report. It backs the registry in tests, in fixtures, and
//! in the CLI on hosts without a native backend.

use std::path::Path;

use monreg_common::error::{MonregError, MonregResult};
use serde::{Deserialize, Serialize};

use crate::backend::{AdapterOutputDesc, DisplayBackend, DisplayConfigEntry, DisplayMonitor};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayLayout {
    pub displays: Vec<DisplayMonitor>,
    /// `None` simulates a display-configuration query that fails.
    pub display_config: Option<Vec<DisplayConfigEntry>>,
    /// `None` simulates an adapter enumerator that cannot be created.
    pub adapter_outputs: Option<Vec<AdapterOutputDesc>>,
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self {
            displays: Vec::new(),
            display_config: Some(Vec::new()),
            adapter_outputs: Some(Vec::new()),
        }
    }
}

impl DisplayLayout {
    pub fn from_json(json: &str) -> MonregResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> MonregResult<Self> {
        if !path.exists() {
            return Err(MonregError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl DisplayBackend for DisplayLayout {
    fn name(&self) -> &str {
        "layout"
    }

    fn enumerate_displays(&self) -> MonregResult<Vec<DisplayMonitor>> {
        Ok(self.displays.clone())
    }

    fn query_display_config(&self) -> MonregResult<Vec<DisplayConfigEntry>> {
        self.display_config
            .clone()
            .ok_or_else(|| MonregError::platform("display configuration query failed"))
    }

    fn enumerate_adapter_outputs(&self) -> MonregResult<Vec<AdapterOutputDesc>> {
        self.adapter_outputs
            .clone()
            .ok_or_else(|| MonregError::platform("adapter enumerator unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_adapter_outputs_defaults_to_empty() {
        let layout = DisplayLayout::from_json(r#"{ "displays": [] }"#).unwrap();
        assert!(layout.enumerate_adapter_outputs().unwrap().is_empty());
    }

    #[test]
    fn null_adapter_outputs_fails_enumeration() {
        let layout = DisplayLayout::from_json(r#"{ "adapter_outputs": null }"#).unwrap();
        assert!(layout.enumerate_adapter_outputs().is_err());
    }

    #[test]
    fn null_display_config_fails_query() {
        let layout = DisplayLayout::from_json(r#"{ "display_config": null }"#).unwrap();
        assert!(layout.query_display_config().is_err());
        assert!(layout.enumerate_displays().unwrap().is_empty());
    }

    #[test]
    fn parses_full_entry() {
        let layout = DisplayLayout::from_json(
            r#"{
                "displays": [
                    { "device_name": "\\\\.\\DISPLAY1",
                      "geometry": { "x": 0, "y": 0, "width": 1920, "height": 1080 },
                      "is_primary": true }
                ],
                "display_config": [
                    { "device_name": "\\\\.\\DISPLAY1", "friendly_name": "LG HDR 4K",
                      "rotation": 180, "target_id": 4352 }
                ],
                "adapter_outputs": [
                    { "adapter_index": 0, "output_index": 1,
                      "geometry": { "x": 0, "y": 0, "width": 1920, "height": 1080 } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(layout.displays[0].device_name, r"\\.\DISPLAY1");
        assert_eq!(
            layout.display_config.unwrap()[0].rotation,
            Some(crate::Rotation::Rotate180)
        );
        let outputs = layout.adapter_outputs.unwrap();
        assert!(outputs[0].attached_to_desktop);
        assert_eq!(outputs[0].output_index, 1);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let err = DisplayLayout::load(Path::new("/nonexistent/monreg/layout.json")).unwrap_err();
        assert!(matches!(err, MonregError::FileNotFound { .. }));
    }
}
