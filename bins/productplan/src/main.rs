//! ProductPlan CLI
//!
//! Inspect and update ProductPlan roadmaps, bars and ideas from the terminal.

use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use productplan_api_client::{ClientConfig, ListOptions, ProductPlanClient};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

mod commands;

use commands::{bars, ideas, roadmaps, status};

/// Command-line client for the ProductPlan API
#[derive(Parser)]
#[command(name = "productplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// API base URL
    #[arg(long, global = true, env = "PRODUCTPLAN_API_URL")]
    base_url: Option<String>,

    /// OAuth access token
    #[arg(long, global = true, env = "PRODUCTPLAN_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Extra user agent appended to the client's own
    #[arg(long, global = true, env = "PRODUCTPLAN_USER_AGENT")]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PRODUCTPLAN_TIMEOUT_SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// How results are printed
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API status
    Status,

    /// Work with ideas
    Ideas {
        #[command(subcommand)]
        action: IdeasAction,
    },

    /// Work with roadmaps
    Roadmaps {
        #[command(subcommand)]
        action: RoadmapsAction,
    },

    /// Work with bars
    Bars {
        #[command(subcommand)]
        action: BarsAction,
    },
}

#[derive(Subcommand)]
enum IdeasAction {
    /// Show a single idea
    Show {
        /// Idea ID
        id: u64,
    },

    /// Import ideas from a JSON file into a roadmap
    Import {
        /// Target roadmap ID
        #[arg(short, long)]
        roadmap: u64,

        /// JSON file containing an array of ideas
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum RoadmapsAction {
    /// List roadmaps
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Include roadmaps shared with you
        #[arg(long)]
        include_shared: bool,

        /// Include roadmap versions
        #[arg(long)]
        include_versions: bool,
    },

    /// Show a single roadmap
    Get {
        /// Roadmap ID
        id: u64,
    },

    /// List the bars on a roadmap
    Bars {
        /// Roadmap ID
        id: u64,
    },
}

#[derive(Subcommand)]
enum BarsAction {
    /// List your bars
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Update a bar
    Update(bars::UpdateArgs),
}

/// Paging, filtering and ordering shared by list commands
#[derive(Args)]
struct ListArgs {
    /// Filter expression, e.g. name=Launch
    #[arg(long)]
    filters: Option<String>,

    /// Page to return
    #[arg(long)]
    page: Option<u32>,

    /// Entries per page
    #[arg(long)]
    items: Option<u32>,

    /// Sort order, e.g. name:desc
    #[arg(long)]
    order: Option<String>,
}

impl From<ListArgs> for ListOptions {
    fn from(args: ListArgs) -> Self {
        Self {
            filters: args.filters,
            page: args.page,
            items: args.items,
            order: args.order,
        }
    }
}

impl Cli {
    /// Build an API client from the global flags
    fn client(&self) -> anyhow::Result<ProductPlanClient> {
        let token = self.token.clone().ok_or_else(|| {
            anyhow::anyhow!("missing OAuth token: pass --token or set PRODUCTPLAN_API_TOKEN")
        })?;

        let mut config = ClientConfig::default().with_token(token);
        if let Some(ref url) = self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(ref user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(ProductPlanClient::with_config(config)?)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("productplan=debug,productplan_api_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = cli.client().and_then(|client| {
        let format = cli.format;
        match cli.command {
            Commands::Status => status::run(&client, format),

            Commands::Ideas { action } => match action {
                IdeasAction::Show { id } => ideas::show(&client, id, format),
                IdeasAction::Import { roadmap, file } => {
                    ideas::import(&client, roadmap, &file, format)
                }
            },

            Commands::Roadmaps { action } => match action {
                RoadmapsAction::List { list, include_shared, include_versions } => {
                    roadmaps::list(&client, list.into(), include_shared, include_versions, format)
                }
                RoadmapsAction::Get { id } => roadmaps::get(&client, id, format),
                RoadmapsAction::Bars { id } => roadmaps::bars(&client, id, format),
            },

            Commands::Bars { action } => match action {
                BarsAction::List { list } => bars::list(&client, &ListOptions::from(list), format),
                BarsAction::Update(args) => bars::update(&client, args, format),
            },
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
