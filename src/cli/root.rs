use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use super::{SchemaCommand, ShowCommand, SimulateCommand};
use crate::config::PaginatorConfig;
use crate::paginator::options::parse_page_size_options;

/// Page window calculator for table paginators
#[derive(Parser)]
#[command(
    name = "page-window",
    version,
    about = "Computes the page buttons a table paginator should show",
    long_about = r#"Computes which page-number buttons a paginator shows, where the skip
markers go and how activating a button moves the current page.

Examples:
  page-window show --total 1000 --page-index 5
  page-window simulate --total 1000 --page-index 5 skip:forward next
  page-window schema --pretty"#
)]
pub struct Cli {
    /// Configuration file (defaults to ./.page-window.json, ./page-window.json)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the page strip for a pagination state
    Show(ShowCommand),
    /// Apply a sequence of activations and print every step
    Simulate(SimulateCommand),
    /// Print the configuration JSON schema
    Schema(SchemaCommand),
}

/// Pagination values that override the configuration
#[derive(Debug, Default, Args)]
pub struct StateArgs {
    /// Total number of rows
    #[arg(short = 't', long = "total", allow_negative_numbers = true)]
    pub total_items: Option<i64>,

    /// Rows per page
    #[arg(short = 's', long = "page-size", allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Zero-based current page
    #[arg(short = 'i', long = "page-index", allow_negative_numbers = true)]
    pub page_index: Option<i64>,

    /// Page buttons around the current page
    #[arg(short = 'w', long = "window", allow_negative_numbers = true)]
    pub window_size: Option<i64>,

    /// Comma-separated page sizes offered to the user
    #[arg(long = "page-size-options")]
    pub page_size_options: Option<String>,

    /// Show first/last buttons
    #[arg(long = "first-last")]
    pub first_last: bool,
}

impl StateArgs {
    pub fn apply(&self, config: &mut PaginatorConfig) {
        if let Some(total_items) = self.total_items {
            config.total_items = total_items;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(page_index) = self.page_index {
            config.page_index = page_index;
        }
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if let Some(options) = &self.page_size_options {
            config.page_size_options = parse_page_size_options(options);
        }
        if self.first_last {
            config.show_first_last_buttons = true;
        }
    }
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        if let Commands::Schema(schema_cmd) = &self.command {
            return schema_cmd.execute();
        }

        let config = self.load_config()?;
        debug!(?config, "Configuration initialized");

        match self.command {
            Commands::Show(show_cmd) => show_cmd.execute(config),
            Commands::Simulate(simulate_cmd) => simulate_cmd.execute(config),
            Commands::Schema(_) => Ok(()),
        }
    }

    fn load_config(&self) -> Result<PaginatorConfig> {
        let config = match &self.config {
            Some(path) => {
                let mut config = PaginatorConfig::default();
                config.load_from_env();
                config.merge_with(
                    PaginatorConfig::read(path)
                        .with_context(|| format!("Failed to load config: {}", path.display()))?,
                );
                config
            }
            None => PaginatorConfig::init().context("Failed to load configuration")?,
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_arguments() {
        let cli = Cli::try_parse_from([
            "page-window", "show", "--total", "1000", "--page-index", "-3", "--window", "4",
        ])
        .unwrap();
        let Commands::Show(show) = cli.command else {
            panic!("expected show");
        };

        let mut config = PaginatorConfig::default();
        show.state.apply(&mut config);
        assert_eq!(config.total_items, 1000);
        assert_eq!(config.page_index, -3);
        assert_eq!(config.window_size, 4);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_parse_simulate_commands() {
        let cli = Cli::try_parse_from([
            "page-window", "simulate", "--total", "100", "next", "skip:forward", "page:3",
        ])
        .unwrap();
        let Commands::Simulate(simulate) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(simulate.commands.len(), 3);
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["page-window", "simulate", "sideways"]).is_err());
    }

    #[test]
    fn test_page_size_options_override() {
        let args = StateArgs {
            page_size_options: Some("20,40".to_string()),
            first_last: true,
            ..StateArgs::default()
        };
        let mut config = PaginatorConfig::default();
        args.apply(&mut config);
        assert_eq!(config.page_size_options, vec![20, 40]);
        assert!(config.show_first_last_buttons);
    }
}
