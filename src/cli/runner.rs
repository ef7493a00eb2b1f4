//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, AppConfig};
use crate::error::Result;
use crate::pagination::index_range;
use crate::server::PaginationServer;
use crate::source::CsvSource;
use crate::types::{PageNumber, PageSize};
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Range { page, page_size } => self.range(*page, *page_size),
            Commands::Page { page, page_size } => self.page(*page, *page_size),
            Commands::Hyper { page, page_size } => self.hyper(*page, *page_size),
            Commands::Info { page_size } => self.info(*page_size),
            Commands::Serve { port } => {
                let mut config = self.load_config()?;
                if let Some(port) = port {
                    config.port = *port;
                }
                crate::cli::serve(config).await
            }
        }
    }

    /// Load the config file (if any) and apply command-line overrides
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => AppConfig::default(),
        };

        if let Some(data) = &self.cli.data {
            config.data_file.clone_from(data);
        }
        if let Some(delimiter) = self.cli.delimiter {
            config.delimiter = delimiter;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a pagination server over the configured data file
    fn build_server(config: &AppConfig) -> PaginationServer<CsvSource> {
        PaginationServer::with_header(config.source(), config.has_header)
    }

    /// Use the given page size or fall back to the configured default
    fn page_size_or_default(page_size: Option<i64>, config: &AppConfig) -> Result<PageSize> {
        page_size.map_or(Ok(config.default_page_size), PageSize::try_from_i64)
    }

    /// Print page offsets (no dataset needed)
    fn range(&self, page: i64, page_size: i64) -> Result<()> {
        let page = PageNumber::try_from_i64(page)?;
        let page_size = PageSize::try_from_i64(page_size)?;
        let (start, end) = index_range(page, page_size);

        self.output_message(&json!({
            "type": "RANGE",
            "page": page,
            "page_size": page_size,
            "start": start,
            "end": end
        }));

        Ok(())
    }

    /// Print the records on a page
    fn page(&self, page: i64, page_size: Option<i64>) -> Result<()> {
        let config = self.load_config()?;
        let page = PageNumber::try_from_i64(page)?;
        let page_size = Self::page_size_or_default(page_size, &config)?;

        let server = Self::build_server(&config);
        let records = server.get_page(page, page_size)?;

        self.output_message(&json!({
            "type": "PAGE",
            "page": page,
            "records": records
        }));

        Ok(())
    }

    /// Print a page with hypermedia metadata
    fn hyper(&self, page: i64, page_size: Option<i64>) -> Result<()> {
        let config = self.load_config()?;
        let page = PageNumber::try_from_i64(page)?;
        let page_size = Self::page_size_or_default(page_size, &config)?;

        let server = Self::build_server(&config);
        let hyper = server.get_hyper(page, page_size)?;

        self.output_message(&json!({
            "type": "HYPER",
            "hyper": hyper
        }));

        Ok(())
    }

    /// Print dataset size and page count
    fn info(&self, page_size: Option<i64>) -> Result<()> {
        let config = self.load_config()?;
        let page_size = Self::page_size_or_default(page_size, &config)?;

        let server = Self::build_server(&config);
        let total_items = server.total_items()?;
        let total_pages = server.total_pages(page_size)?;

        self.output_message(&json!({
            "type": "INFO",
            "source": config.data_file.display().to_string(),
            "total_items": total_items,
            "page_size": page_size,
            "total_pages": total_pages
        }));

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
