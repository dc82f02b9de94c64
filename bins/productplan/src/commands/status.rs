//! Status command - show API component status

use super::print_json;
use crate::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use productplan_api_client::ProductPlanClient;

/// Run status check
pub fn run(client: &ProductPlanClient, format: OutputFormat) -> Result<()> {
    let report = client.status().get()?.into_data();

    if format == OutputFormat::Json {
        return print_json(&report);
    }

    println!();
    println!(
        "  {} {}",
        report
            .metadata
            .application
            .as_deref()
            .unwrap_or("ProductPlan API")
            .bold(),
        report
            .metadata
            .version
            .map(|v| format!("(v{v})"))
            .unwrap_or_default()
            .dimmed()
    );

    for (component, state) in [
        ("Application", &report.status.application),
        ("Database", &report.status.database),
    ] {
        let state = state.as_deref().unwrap_or("unknown");
        if state == "up" {
            println!("  {component:<12} {}", "✓ up".green());
        } else {
            println!("  {component:<12} {}", format!("✗ {state}").red());
        }
    }

    println!();
    Ok(())
}
