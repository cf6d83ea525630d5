//! Monitor registry.
//!
//! Merges the display-monitor list with graphics-adapter outputs. The two
//! APIs share no stable identifier, so outputs are correlated with monitors
//! by exact geometry. Mirrored displays share a geometry and therefore end up
//! with the same adapter/output pair.

use chrono::{DateTime, Utc};
use monreg_common::config::RegistryConfig;
use monreg_common::error::{MonregError, MonregResult};

use crate::backend::{AdapterOutputDesc, DisplayBackend, DisplayConfigEntry, DisplayMonitor};
use crate::{AdapterOutput, MonitorDetail, MonitorRecord};

/// Counts from the last [`MonitorRegistry::reload`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadReport {
    /// Records in the registry.
    pub monitors: usize,
    /// Adapter outputs used for matching (zero when enumeration failed).
    pub adapter_outputs: usize,
    /// Records that received adapter/output identifiers.
    pub matched: usize,
}

/// Ordered list of monitors, rebuilt in full on every reload.
///
/// The primary monitor is always at index 0 of a non-empty registry.
#[derive(Debug)]
pub struct MonitorRegistry<B> {
    backend: B,
    config: RegistryConfig,
    records: Vec<MonitorRecord>,
    last_reload: Option<DateTime<Utc>>,
}

impl<B: DisplayBackend> MonitorRegistry<B> {
    /// Create an empty registry. Call [`reload`](Self::reload) to populate it.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, RegistryConfig::default())
    }

    pub fn with_config(backend: B, config: RegistryConfig) -> Self {
        Self {
            backend,
            config,
            records: Vec::new(),
            last_reload: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Discard all records and enumerate again.
    ///
    /// Never fails: backend errors degrade to missing data and are logged.
    pub fn reload(&mut self) -> ReloadReport {
        self.records.clear();

        let displays = match self.backend.enumerate_displays() {
            Ok(displays) => displays,
            Err(e) => {
                tracing::warn!(backend = self.backend.name(), "Display enumeration failed: {}", e);
                Vec::new()
            }
        };

        let config_entries = match self.backend.query_display_config() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    backend = self.backend.name(),
                    "Display configuration unavailable, names and rotation left unset: {}",
                    e
                );
                Vec::new()
            }
        };

        let mut records = build_records(displays, &config_entries);
        let outputs = self.adapter_outputs();
        let matched = match_adapter_outputs(&mut records, &outputs);

        for (index, record) in records.iter().enumerate() {
            tracing::debug!(
                index,
                device = %record.device_name,
                name = record.friendly_name.as_deref().unwrap_or(""),
                x = record.geometry.x,
                y = record.geometry.y,
                width = record.geometry.width,
                height = record.geometry.height,
                primary = record.is_primary,
                adapter_output = ?record.adapter_output,
                "Monitor"
            );
        }

        self.records = records;
        self.last_reload = Some(Utc::now());

        let report = ReloadReport {
            monitors: self.records.len(),
            adapter_outputs: outputs.len(),
            matched,
        };
        tracing::info!(
            backend = self.backend.name(),
            monitors = report.monitors,
            adapter_outputs = report.adapter_outputs,
            matched = report.matched,
            "Monitor registry reloaded"
        );
        report
    }

    fn adapter_outputs(&self) -> Vec<AdapterOutputDesc> {
        if !self.config.match_adapter_outputs {
            tracing::debug!("Adapter output matching disabled");
            return Vec::new();
        }

        match self.backend.enumerate_adapter_outputs() {
            Ok(mut outputs) => {
                if self.config.attached_outputs_only {
                    outputs.retain(|output| output.attached_to_desktop);
                }
                if outputs.is_empty() {
                    tracing::debug!("No adapter outputs to match against");
                }
                outputs
            }
            Err(e) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    "Adapter output enumeration failed, monitors stay unresolved: {}",
                    e
                );
                Vec::new()
            }
        }
    }
}

impl<B> MonitorRegistry<B> {
    /// All records, primary first.
    pub fn monitors(&self) -> &[MonitorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MonitorRecord> {
        self.records.get(index)
    }

    pub fn primary(&self) -> Option<&MonitorRecord> {
        self.records.first().filter(|record| record.is_primary)
    }

    /// When the registry was last rebuilt.
    pub fn last_reload(&self) -> Option<DateTime<Utc>> {
        self.last_reload
    }

    /// Adapter/output pair for the monitor at `index`.
    pub fn adapter_output(&self, index: usize) -> MonregResult<AdapterOutput> {
        self.record(index)?
            .adapter_output
            .ok_or(MonregError::AdapterOutputUnresolved { index })
    }

    /// Geometry and rotation of the monitor at `index`.
    pub fn detail(&self, index: usize) -> MonregResult<MonitorDetail> {
        self.record(index).map(MonitorRecord::detail)
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.records.clear();
        self.last_reload = None;
    }

    fn record(&self, index: usize) -> MonregResult<&MonitorRecord> {
        self.records
            .get(index)
            .ok_or(MonregError::MonitorIndexOutOfRange {
                index,
                count: self.records.len(),
            })
    }
}

/// Turn display-monitor entries into records, primary first.
///
/// Metadata is looked up by device name; a monitor without a configuration
/// entry keeps `None` for name, rotation and target id. The first monitor
/// flagged primary goes to the front and any later one is demoted. When no
/// monitor is flagged, the first one is promoted so a non-empty list always
/// has exactly one primary at index 0.
pub fn build_records(
    displays: Vec<DisplayMonitor>,
    config_entries: &[DisplayConfigEntry],
) -> Vec<MonitorRecord> {
    let mut records: Vec<MonitorRecord> = Vec::with_capacity(displays.len());
    let mut has_primary = false;

    for monitor in displays {
        let entry = config_entries
            .iter()
            .find(|entry| entry.device_name == monitor.device_name);
        if entry.is_none() {
            let device = &monitor.device_name;
            tracing::debug!(device = %device, "No display configuration entry");
        }

        let mut record = MonitorRecord {
            device_name: monitor.device_name,
            geometry: monitor.geometry,
            is_primary: monitor.is_primary,
            friendly_name: entry
                .and_then(|e| e.friendly_name.clone())
                .filter(|name| !name.is_empty()),
            rotation: entry.and_then(|e| e.rotation),
            target_id: entry.and_then(|e| e.target_id),
            adapter_output: None,
        };

        if record.is_primary && !has_primary {
            has_primary = true;
            records.insert(0, record);
        } else {
            if record.is_primary {
                tracing::warn!(device = %record.device_name, "Second primary monitor reported, demoting");
                record.is_primary = false;
            }
            records.push(record);
        }
    }

    if !has_primary {
        if let Some(first) = records.first_mut() {
            tracing::warn!(device = %first.device_name, "No primary monitor reported, promoting first");
            first.is_primary = true;
        }
    }

    records
}

/// Copy adapter/output identifiers onto every record whose geometry equals
/// an output's. Outputs matching nothing are dropped. Returns the number of
/// records that ended up resolved.
pub fn match_adapter_outputs(records: &mut [MonitorRecord], outputs: &[AdapterOutputDesc]) -> usize {
    for output in outputs {
        let mut hits = 0usize;
        for record in records
            .iter_mut()
            .filter(|record| record.geometry == output.geometry)
        {
            record.adapter_output = Some(AdapterOutput {
                adapter_index: output.adapter_index,
                output_index: output.output_index,
            });
            hits += 1;
        }
        if hits == 0 {
            tracing::debug!(
                adapter = output.adapter_index,
                output = output.output_index,
                device = %output.device_name,
                "Adapter output matches no monitor"
            );
        }
    }

    records
        .iter()
        .filter(|record| record.adapter_output.is_some())
        .count()
}
