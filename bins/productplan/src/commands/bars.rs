//! Bars commands

use super::print_json;
use crate::OutputFormat;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use productplan_api_client::{Bar, BarUpdate, ListOptions, ProductPlanClient};

/// Attributes accepted by `bars update`
#[derive(Args)]
pub struct UpdateArgs {
    /// Bar ID
    pub id: u64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// New end date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New strategic value
    #[arg(long)]
    pub strategic_value: Option<String>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Completion percentage
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub percent_done: Option<u32>,

    /// Effort estimate
    #[arg(long)]
    pub effort: Option<u32>,

    /// Replace tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl From<UpdateArgs> for BarUpdate {
    fn from(args: UpdateArgs) -> Self {
        Self {
            name: args.name,
            start_date: args.start_date,
            end_date: args.end_date,
            description: args.description,
            strategic_value: args.strategic_value,
            notes: args.notes,
            percent_done: args.percent_done,
            effort: args.effort,
            tags: (!args.tags.is_empty()).then_some(args.tags),
            fields: None,
        }
    }
}

/// List bars owned by the authenticated user
pub fn list(client: &ProductPlanClient, options: &ListOptions, format: OutputFormat) -> Result<()> {
    let bars = client.bars().list(Some(options))?.into_data();

    if format == OutputFormat::Json {
        return print_json(&bars);
    }

    print_bars(&bars);
    Ok(())
}

/// Update a bar
pub fn update(client: &ProductPlanClient, args: UpdateArgs, format: OutputFormat) -> Result<()> {
    let id = args.id;
    let update = BarUpdate::from(args);
    anyhow::ensure!(!update.is_empty(), "nothing to update for bar {id}");

    let response = client.bars().update(id, &update)?;

    if format == OutputFormat::Json {
        return match response.data {
            Some(bar) => print_json(&bar),
            None => print_json(&update),
        };
    }

    println!("{} Updated bar {}", "✓".green(), id);
    if let Some(bar) = response.data {
        print_bars(std::slice::from_ref(&bar));
    }
    Ok(())
}

/// Print bars one per line
pub fn print_bars(bars: &[Bar]) {
    if bars.is_empty() {
        println!("{}", "No bars found".yellow());
        return;
    }

    for bar in bars {
        println!(
            "{:>8}  {} {}  {}",
            bar.id.to_string().cyan(),
            format_date(bar.start_date),
            format_date(bar.end_date),
            bar.name.bold()
        );
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "----------".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(id: u64) -> UpdateArgs {
        UpdateArgs {
            id,
            name: None,
            start_date: None,
            end_date: None,
            description: None,
            strategic_value: None,
            notes: None,
            percent_done: None,
            effort: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_empty_args_give_empty_update() {
        assert!(BarUpdate::from(args(1)).is_empty());
    }

    #[test]
    fn test_tags_only_sent_when_given() {
        let mut with_tags = args(1);
        with_tags.tags = vec!["q3".to_string()];
        with_tags.effort = Some(3);

        let update = BarUpdate::from(with_tags);
        assert_eq!(update.tags, Some(vec!["q3".to_string()]));
        assert_eq!(update.effort, Some(3));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2018, 1, 7)), "2018-01-07");
        assert_eq!(format_date(None), "----------");
    }
}
