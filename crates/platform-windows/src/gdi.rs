//! GDI display-monitor enumeration.

use monreg_common::error::{MonregError, MonregResult};
use monreg_platform_core::{DisplayMonitor, Geometry};
use windows::core::BOOL;
use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOEXW,
};

use crate::utf16z_to_string;

const MONITORINFOF_PRIMARY: u32 = 0x1;

/// Active display monitors in GDI enumeration order.
pub(crate) fn enumerate_displays() -> MonregResult<Vec<DisplayMonitor>> {
    let mut displays: Vec<DisplayMonitor> = Vec::new();

    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(monitor_enum_proc),
            LPARAM(&mut displays as *mut Vec<DisplayMonitor> as isize),
        )
    };
    if !ok.as_bool() {
        return Err(MonregError::platform("EnumDisplayMonitors failed"));
    }

    Ok(displays)
}

unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let displays = unsafe { &mut *(lparam.0 as *mut Vec<DisplayMonitor>) };

    let mut info = MONITORINFOEXW::default();
    info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

    // Skip monitors that vanish mid-enumeration; keep walking the rest.
    if unsafe { GetMonitorInfoW(hmonitor, &mut info as *mut MONITORINFOEXW as *mut MONITORINFO) }
        .as_bool()
    {
        let rc = info.monitorInfo.rcMonitor;
        displays.push(DisplayMonitor {
            device_name: utf16z_to_string(&info.szDevice),
            geometry: Geometry::from_edges(rc.left, rc.top, rc.right, rc.bottom),
            is_primary: (info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY) != 0,
        });
    } else {
        tracing::debug!("GetMonitorInfoW failed for {:?}", hmonitor);
    }

    true.into()
}
