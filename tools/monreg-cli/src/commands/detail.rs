//! Show geometry and rotation of one monitor.

use super::Registry;

pub fn run(registry: &Registry, index: usize) -> anyhow::Result<()> {
    let detail = registry
        .detail(index)
        .map_err(|e| anyhow::anyhow!("No detail for monitor {index}: {e}"))?;

    println!("width: {}", detail.width);
    println!("height: {}", detail.height);
    println!("offset_x: {}", detail.offset_x);
    println!("offset_y: {}", detail.offset_y);
    println!("rotation: {}", detail.rotation_degrees);
    Ok(())
}
