//! DXGI adapter/output enumeration.

use anyhow::Context;
use monreg_common::error::MonregResult;
use monreg_platform_core::{AdapterOutputDesc, Geometry};
use windows::Win32::Graphics::Dxgi::{CreateDXGIFactory1, IDXGIFactory1, DXGI_ERROR_NOT_FOUND};

use crate::utf16z_to_string;

/// Outputs of every adapter, adapter by adapter.
///
/// Only factory creation is fatal. An adapter or output that fails to
/// enumerate ends the walk at that point and keeps what was collected.
pub(crate) fn enumerate_adapter_outputs() -> MonregResult<Vec<AdapterOutputDesc>> {
    let factory: IDXGIFactory1 = unsafe { CreateDXGIFactory1() }
        .context("CreateDXGIFactory1 failed")?;

    let mut outputs = Vec::new();
    let mut adapter_index = 0u32;

    loop {
        let adapter = match unsafe { factory.EnumAdapters1(adapter_index) } {
            Ok(adapter) => adapter,
            Err(e) if e.code() == DXGI_ERROR_NOT_FOUND => break,
            Err(e) => {
                tracing::warn!(adapter_index, "EnumAdapters1 failed: {}", e);
                break;
            }
        };

        let mut output_index = 0u32;
        loop {
            let output = match unsafe { adapter.EnumOutputs(output_index) } {
                Ok(output) => output,
                Err(e) if e.code() == DXGI_ERROR_NOT_FOUND => break,
                Err(e) => {
                    tracing::warn!(adapter_index, output_index, "EnumOutputs failed: {}", e);
                    break;
                }
            };

            match unsafe { output.GetDesc() } {
                Ok(desc) => {
                    let rc = desc.DesktopCoordinates;
                    outputs.push(AdapterOutputDesc {
                        adapter_index,
                        output_index,
                        geometry: Geometry::from_edges(rc.left, rc.top, rc.right, rc.bottom),
                        device_name: utf16z_to_string(&desc.DeviceName),
                        attached_to_desktop: desc.AttachedToDesktop.as_bool(),
                    });
                }
                Err(e) => {
                    tracing::debug!(adapter_index, output_index, "GetDesc failed: {}", e);
                }
            }

            output_index += 1;
        }

        adapter_index += 1;
    }

    tracing::debug!(count = outputs.len(), "Enumerated adapter outputs");
    Ok(outputs)
}
