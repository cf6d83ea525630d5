//! DisplayConfig metadata: friendly names, rotation, target ids.

use std::mem;

use anyhow::Context;
use monreg_common::error::MonregResult;
use monreg_platform_core::{DisplayConfigEntry, Rotation};
use windows::Win32::Devices::Display::{
    DisplayConfigGetDeviceInfo, GetDisplayConfigBufferSizes, QueryDisplayConfig,
    DISPLAYCONFIG_DEVICE_INFO_GET_SOURCE_NAME, DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME,
    DISPLAYCONFIG_DEVICE_INFO_HEADER, DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_PATH_INFO,
    DISPLAYCONFIG_ROTATION, DISPLAYCONFIG_ROTATION_IDENTITY, DISPLAYCONFIG_ROTATION_ROTATE180,
    DISPLAYCONFIG_ROTATION_ROTATE270, DISPLAYCONFIG_ROTATION_ROTATE90,
    DISPLAYCONFIG_SOURCE_DEVICE_NAME, DISPLAYCONFIG_TARGET_DEVICE_NAME, QDC_ONLY_ACTIVE_PATHS,
};

use crate::utf16z_to_string;

/// One entry per active source, keyed by its GDI device name.
///
/// When several paths share a source (clone mode) the first path wins.
pub(crate) fn query_display_config() -> MonregResult<Vec<DisplayConfigEntry>> {
    let mut path_count = 0u32;
    let mut mode_count = 0u32;
    unsafe { GetDisplayConfigBufferSizes(QDC_ONLY_ACTIVE_PATHS, &mut path_count, &mut mode_count) }
        .ok()
        .context("GetDisplayConfigBufferSizes failed")?;

    if path_count == 0 {
        return Ok(Vec::new());
    }

    let mut paths = vec![DISPLAYCONFIG_PATH_INFO::default(); path_count as usize];
    let mut modes = vec![DISPLAYCONFIG_MODE_INFO::default(); mode_count as usize];
    unsafe {
        QueryDisplayConfig(
            QDC_ONLY_ACTIVE_PATHS,
            &mut path_count,
            paths.as_mut_ptr(),
            &mut mode_count,
            modes.as_mut_ptr(),
            None,
        )
    }
    .ok()
    .context("QueryDisplayConfig failed")?;

    let count = usize::min(path_count as usize, paths.len());
    let mut entries: Vec<DisplayConfigEntry> = Vec::with_capacity(count);
    for path in &paths[..count] {
        let Some(device_name) = source_device_name(path) else {
            continue;
        };
        if entries.iter().any(|entry| entry.device_name == device_name) {
            continue;
        }

        entries.push(DisplayConfigEntry {
            friendly_name: target_friendly_name(path),
            rotation: rotation_from_config(path.targetInfo.rotation),
            target_id: Some(path.targetInfo.id),
            device_name,
        });
    }

    Ok(entries)
}

fn source_device_name(path: &DISPLAYCONFIG_PATH_INFO) -> Option<String> {
    let mut source = DISPLAYCONFIG_SOURCE_DEVICE_NAME {
        header: DISPLAYCONFIG_DEVICE_INFO_HEADER {
            r#type: DISPLAYCONFIG_DEVICE_INFO_GET_SOURCE_NAME,
            size: mem::size_of::<DISPLAYCONFIG_SOURCE_DEVICE_NAME>() as u32,
            adapterId: path.sourceInfo.adapterId,
            id: path.sourceInfo.id,
        },
        ..Default::default()
    };
    if unsafe { DisplayConfigGetDeviceInfo(&mut source.header) } != 0 {
        return None;
    }
    Some(utf16z_to_string(&source.viewGdiDeviceName)).filter(|name| !name.is_empty())
}

fn target_friendly_name(path: &DISPLAYCONFIG_PATH_INFO) -> Option<String> {
    let mut target = DISPLAYCONFIG_TARGET_DEVICE_NAME {
        header: DISPLAYCONFIG_DEVICE_INFO_HEADER {
            r#type: DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME,
            size: mem::size_of::<DISPLAYCONFIG_TARGET_DEVICE_NAME>() as u32,
            adapterId: path.targetInfo.adapterId,
            id: path.targetInfo.id,
        },
        ..Default::default()
    };
    if unsafe { DisplayConfigGetDeviceInfo(&mut target.header) } != 0 {
        tracing::debug!(target_id = path.targetInfo.id, "Target name lookup failed");
        return None;
    }
    Some(utf16z_to_string(&target.monitorFriendlyDeviceName)).filter(|name| !name.is_empty())
}

fn rotation_from_config(rotation: DISPLAYCONFIG_ROTATION) -> Option<Rotation> {
    match rotation {
        DISPLAYCONFIG_ROTATION_IDENTITY => Some(Rotation::Identity),
        DISPLAYCONFIG_ROTATION_ROTATE90 => Some(Rotation::Rotate90),
        DISPLAYCONFIG_ROTATION_ROTATE180 => Some(Rotation::Rotate180),
        DISPLAYCONFIG_ROTATION_ROTATE270 => Some(Rotation::Rotate270),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_maps_every_displayconfig_value() {
        assert_eq!(
            rotation_from_config(DISPLAYCONFIG_ROTATION_IDENTITY),
            Some(Rotation::Identity)
        );
        assert_eq!(
            rotation_from_config(DISPLAYCONFIG_ROTATION_ROTATE90),
            Some(Rotation::Rotate90)
        );
        assert_eq!(
            rotation_from_config(DISPLAYCONFIG_ROTATION_ROTATE180),
            Some(Rotation::Rotate180)
        );
        assert_eq!(
            rotation_from_config(DISPLAYCONFIG_ROTATION_ROTATE270),
            Some(Rotation::Rotate270)
        );
        assert_eq!(rotation_from_config(DISPLAYCONFIG_ROTATION(0)), None);
    }
}
