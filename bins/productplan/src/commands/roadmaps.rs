//! Roadmaps commands

use super::bars::print_bars;
use super::print_json;
use crate::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use productplan_api_client::{ListOptions, ProductPlanClient, Roadmap, RoadmapListOptions};

/// List roadmaps
pub fn list(
    client: &ProductPlanClient,
    list: ListOptions,
    include_shared: bool,
    include_versions: bool,
    format: OutputFormat,
) -> Result<()> {
    let options = RoadmapListOptions {
        include_shared,
        include_versions,
        list,
    };
    let roadmaps = client.roadmaps().list(Some(&options))?.into_data();

    if format == OutputFormat::Json {
        return print_json(&roadmaps);
    }

    if roadmaps.is_empty() {
        println!("{}", "No roadmaps found".yellow());
        return Ok(());
    }

    for roadmap in &roadmaps {
        print_roadmap_line(roadmap);
    }
    Ok(())
}

/// Show a single roadmap
pub fn get(client: &ProductPlanClient, id: u64, format: OutputFormat) -> Result<()> {
    let roadmap = client.roadmaps().get(id)?.into_data();

    if format == OutputFormat::Json {
        return print_json(&roadmap);
    }

    print_roadmap_line(&roadmap);
    if let Some(ref description) = roadmap.description {
        println!("         {description}");
    }
    if let Some(ref copied_from) = roadmap.copied_from {
        println!("         copied from #{} {}", copied_from.id, copied_from.name);
    }
    if let Some(updated_at) = roadmap.timestamps.and_then(|ts| ts.updated_at) {
        println!(
            "         updated {}",
            updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }
    Ok(())
}

/// List the bars on a roadmap
pub fn bars(client: &ProductPlanClient, id: u64, format: OutputFormat) -> Result<()> {
    let bars = client.roadmaps().bars(id)?.into_data();

    if format == OutputFormat::Json {
        return print_json(&bars);
    }

    print_bars(&bars);
    Ok(())
}

fn print_roadmap_line(roadmap: &Roadmap) {
    let version = if roadmap.is_version { " (version)" } else { "" };
    println!(
        "{:>8}  {}{}  {}",
        roadmap.id.to_string().cyan(),
        roadmap.name.bold(),
        version.dimmed(),
        roadmap.owner_email.as_deref().unwrap_or("").dimmed()
    );
}
