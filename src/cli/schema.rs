//! Schema command: JSON schema generation and config file checks

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use schemars::schema_for;
use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::config::PaginatorConfig;

/// Generate and validate configuration schemas
#[derive(Debug, Args)]
pub struct SchemaCommand {
    /// Output format for schema generation
    #[arg(short, long, default_value = "json")]
    pub format: SchemaFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty print the output
    #[arg(short, long)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Option<SchemaSubcommand>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

#[derive(Debug, Subcommand)]
pub enum SchemaSubcommand {
    /// Generate JSON schema for the configuration
    Generate,
    /// Check that a configuration file loads and validates
    Validate {
        /// Configuration file to validate
        config_file: PathBuf,
    },
}

impl SchemaCommand {
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Some(SchemaSubcommand::Validate { config_file }) => self.validate_config(config_file),
            Some(SchemaSubcommand::Generate) | None => self.generate_schema(),
        }
    }

    fn generate_schema(&self) -> Result<()> {
        let output = self.render_schema()?;

        if let Some(ref output_path) = self.output {
            fs::write(output_path, output)
                .with_context(|| format!("Failed to write schema to: {}", output_path.display()))?;
            println!("Schema written to: {}", output_path.display());
        } else {
            println!("{}", output);
        }

        Ok(())
    }

    fn render_schema(&self) -> Result<String> {
        let mut schema_value = serde_json::to_value(schema_for!(PaginatorConfig))
            .context("Failed to convert schema to JSON value")?;

        if let Some(obj) = schema_value.as_object_mut() {
            obj.insert(
                "title".to_string(),
                Value::String("Page Window Configuration".to_string()),
            );
        }

        let output = match self.format {
            SchemaFormat::Json if self.pretty => serde_json::to_string_pretty(&schema_value)?,
            SchemaFormat::Json => serde_json::to_string(&schema_value)?,
            SchemaFormat::Yaml => {
                serde_yaml::to_string(&schema_value).context("Failed to convert schema to YAML")?
            }
        };
        Ok(output)
    }

    fn validate_config(&self, config_file: &PathBuf) -> Result<()> {
        let config = PaginatorConfig::read(config_file)
            .with_context(|| format!("Failed to load config: {}", config_file.display()))?;
        config.validate()?;
        println!("✅ Configuration is valid!");
        Ok(())
    }
}
