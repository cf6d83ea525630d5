//! Report enumeration health.

use monreg_platform_core::ReloadReport;

use super::Registry;

pub fn run(registry: &Registry, report: &ReloadReport) -> anyhow::Result<()> {
    println!("monreg System Check");
    println!("{}", "=".repeat(50));
    println!("Backend: {}", registry.backend().name());

    if report.monitors == 0 {
        println!("[FAIL] Monitors detected: 0");
    } else {
        println!("[OK] Monitors detected: {}", report.monitors);
    }

    if !registry.config().match_adapter_outputs {
        println!("[SKIP] Adapter output matching disabled in config");
    } else if report.adapter_outputs == 0 {
        println!("[WARN] No adapter outputs enumerated; duplication capture unavailable");
    } else {
        println!("[OK] Adapter outputs enumerated: {}", report.adapter_outputs);
    }

    let named = registry
        .monitors()
        .iter()
        .filter(|m| m.friendly_name.is_some())
        .count();
    println!("     Friendly names resolved: {named}/{}", report.monitors);

    println!();
    if report.monitors > 0 && report.matched == report.monitors {
        println!("All monitors resolved to adapter outputs.");
    } else {
        println!(
            "{} of {} monitor(s) resolved to adapter outputs.",
            report.matched, report.monitors
        );
    }

    Ok(())
}
