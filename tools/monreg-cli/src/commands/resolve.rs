//! Resolve a monitor index to adapter/output identifiers.

use super::Registry;

pub fn run(registry: &Registry, index: usize) -> anyhow::Result<()> {
    let ao = registry
        .adapter_output(index)
        .map_err(|e| anyhow::anyhow!("Cannot resolve monitor {index}: {e}"))?;

    println!("adapter_index: {}", ao.adapter_index);
    println!("output_index: {}", ao.output_index);
    Ok(())
}
