//! Ideas commands

use super::print_json;
use crate::OutputFormat;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use productplan_api_client::{Idea, IdeasImport, ProductPlanClient};
use std::fs;
use std::path::Path;

/// Show a single idea
pub fn show(client: &ProductPlanClient, id: u64, format: OutputFormat) -> Result<()> {
    let idea = client.ideas().show(id)?.into_data();

    if format == OutputFormat::Json {
        return print_json(&idea);
    }

    println!("{} {}", idea.name.bold(), format!("#{id}").dimmed());
    if let Some(ref description) = idea.description {
        println!("  {description}");
    }
    if let Some(effort) = idea.effort {
        println!("  Effort:       {effort}");
    }
    if let Some(percent) = idea.percent_done {
        println!("  Done:         {percent}%");
    }
    if !idea.tags.is_empty() {
        println!("  Tags:         {}", idea.tags.join(", ").cyan());
    }
    for (key, value) in &idea.fields {
        println!("  {key:<13} {value}");
    }

    Ok(())
}

/// Import ideas from a JSON file
pub fn import(
    client: &ProductPlanClient,
    roadmap: u64,
    file: &Path,
    format: OutputFormat,
) -> Result<()> {
    let ideas = read_ideas(file)?;
    let count = ideas.len();

    let response = client.ideas().import(&IdeasImport::new(roadmap, ideas))?;

    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "roadmap": roadmap,
            "imported": count,
            "status": response.status.as_u16(),
        }));
    }

    println!(
        "{} Imported {} idea(s) into roadmap {}",
        "✓".green(),
        count,
        roadmap
    );
    Ok(())
}

/// Read a JSON array of ideas from disk
fn read_ideas(file: &Path) -> Result<Vec<Idea>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let ideas: Vec<Idea> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse ideas from {}", file.display()))?;

    anyhow::ensure!(!ideas.is_empty(), "{} contains no ideas", file.display());
    Ok(ideas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_ideas() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Product Research", "effort": 2, "tags": ["devops"]}}]"#
        )
        .unwrap();

        let ideas = read_ideas(file.path()).unwrap();
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].name, "Product Research");
        assert_eq!(ideas[0].effort, Some(2));
    }

    #[test]
    fn test_read_ideas_rejects_empty_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        assert!(read_ideas(file.path()).is_err());
    }
}
