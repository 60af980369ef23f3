use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-search")]
#[command(about = "Search a product catalog and report hits for important terms")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Read the catalog from a local .json or .csv file
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Read the catalog from an HTTP endpoint returning a JSON array (wins over --catalog)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print catalog items matching QUERY as JSON. Wrap it in double quotes for an exact match.
    Search { query: String },

    /// Print the important-term report as JSON
    Report {
        /// Comma separated terms replacing the configured list
        #[arg(long, value_delimiter = ',')]
        terms: Vec<String>,

        /// Directory the dated report files are written to
        #[arg(long)]
        output: Option<String>,

        /// Output formats for written reports (json, csv)
        #[arg(long, value_delimiter = ',')]
        format: Vec<String>,
    },
}

impl Cli {
    /// Loads the configuration file (or defaults) and applies command line overrides.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(path) = &self.catalog {
            config.use_catalog_file(path)?;
        }
        if let Some(endpoint) = &self.endpoint {
            config.use_endpoint(endpoint);
        }

        if let Command::Report {
            terms,
            output,
            format,
        } = &self.command
        {
            if !terms.is_empty() {
                config.report.important_terms = terms.clone();
            }
            if let Some(output) = output {
                config.report.output_path = Some(output.clone());
            }
            if !format.is_empty() {
                config.report.output_formats = format.clone();
            }
        }

        config.validate()?;
        Ok(config)
    }
}
