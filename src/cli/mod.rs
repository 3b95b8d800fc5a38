//! # Command Line Interface
//!
//! Smoke-check tooling for the Washboard public API: validate lead payloads
//! offline, push a lead through the submission state machine, and inspect
//! the plan catalog and add-on marketplace from a terminal.

pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use crate::client::{AddOnFilters, AddOnSort, ApiClient, ClientConfig};
use crate::config::AppConfig;
use crate::domain::{AddOnCategory, LeadSource};
use crate::submission::SubmissionDriver;
use crate::validation::validate_lead;
use output::print_output;

#[derive(Parser)]
#[command(name = "washboard")]
#[command(about = "Washboard public API tooling")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL for the Washboard API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose request/response logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json or yaml)
    #[arg(long, global = true, default_value = "json")]
    pub output: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a lead payload from a JSON file without submitting it
    Validate {
        /// Path to the JSON payload
        file: PathBuf,
    },

    /// Validate a lead payload and submit it to the collaborator
    Submit {
        /// Path to the JSON payload
        file: PathBuf,

        /// Override the lead source recorded with the submission
        #[arg(long)]
        source: Option<LeadSource>,
    },

    /// Fetch the public billing plan catalog
    Plans,

    /// Fetch marketplace add-ons
    Addons {
        /// Filter by category
        #[arg(long)]
        category: Option<AddOnCategory>,

        /// Full-text search term
        #[arg(long)]
        search: Option<String>,

        /// Sort order
        #[arg(long)]
        sort: Option<AddOnSort>,

        /// Only featured add-ons
        #[arg(long)]
        featured: bool,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Page number
        #[arg(long)]
        page: Option<u32>,
    },
}

impl Cli {
    /// Build the client configuration from flags layered over the
    /// environment-driven defaults
    fn client_config(&self, config: &AppConfig) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone().unwrap_or_else(|| config.api.base_url.clone()),
            timeout_seconds: self.timeout.unwrap_or(config.api.timeout_seconds),
            verbose: self.verbose,
        }
    }
}

/// Run the parsed CLI command
pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let client_config = cli.client_config(&config);

    match cli.command {
        Commands::Validate { ref file } => {
            let payload = read_payload(file)?;
            match validate_lead(&payload) {
                Ok(record) => {
                    print_output(&json!({ "valid": true, "record": record }), &cli.output)?;
                    Ok(())
                }
                Err(errors) => {
                    print_output(&json!({ "valid": false, "errors": &errors }), &cli.output)?;
                    anyhow::bail!("Payload failed validation with {} error(s)", errors.len());
                }
            }
        }

        Commands::Submit { ref file, source } => {
            let payload = read_payload(file)?;
            let mut record = match validate_lead(&payload) {
                Ok(record) => record,
                Err(errors) => {
                    print_output(&json!({ "valid": false, "errors": &errors }), &cli.output)?;
                    anyhow::bail!("Payload failed validation with {} error(s)", errors.len());
                }
            };
            if let Some(source) = source {
                record.source = Some(source);
            }

            let client = ApiClient::new(client_config).context("Failed to build API client")?;
            let driver = SubmissionDriver::new(client);
            let receipt = driver.submit(&record).await.with_context(|| {
                format!("Submission ended in state '{}'", driver.state())
            })?;
            print_output(&receipt, &cli.output)?;
            Ok(())
        }

        Commands::Plans => {
            let client = ApiClient::new(client_config).context("Failed to build API client")?;
            let plans = client.list_plans().await.context("Failed to fetch billing plans")?;
            print_output(&plans, &cli.output)
        }

        Commands::Addons { category, ref search, sort, featured, limit, page } => {
            let filters = AddOnFilters {
                category,
                search: search.clone(),
                sort_by: sort,
                limit,
                page,
                featured: if featured { Some(true) } else { None },
                ..AddOnFilters::default()
            };

            let client = ApiClient::new(client_config).context("Failed to build API client")?;
            let listing = client
                .marketplace_add_ons(&filters)
                .await
                .context("Failed to fetch marketplace add-ons")?;
            print_output(&listing.add_ons, &cli.output)
        }
    }
}

fn read_payload(file: &PathBuf) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", file.display()))
}
