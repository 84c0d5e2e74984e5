//! CLI for schema-fetch.

mod args;

use anyhow::Result;
use clap::Parser;
use schema_fetch_core::config::{self, FetchConfig};
use schema_fetch_core::duration::parse_duration;
use schema_fetch_core::fetcher::{self, FetchRequest, TransferOptions};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use args::normalize_args;

/// Fetch a schema file from a source-control raw-content host.
#[derive(Debug, Parser)]
#[command(name = "schema-fetch", version)]
#[command(
    about = "Fetch a schema file from GitHub, GitLab or any URL",
    long_about = None
)]
pub struct Cli {
    /// The name of provider (default: github). Available: github, gitlab and none.
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// The URL of the schema, e.g. first-debug/lk-graphql-schemas/master/schemas/user-provider/schema.graphql
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// The path to save the schema file (a directory keeps the remote file name).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// The timeout for the HTTP request, e.g. 10s or 1m (default: 30s).
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

impl Cli {
    /// Parses `args` (including the program name) after flag normalization.
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_args(args))
    }

    /// Fails when `-url` or `-output` is missing or empty. Runs before logging
    /// is set up so nothing is written to disk.
    pub fn check_required(&self) -> Result<()> {
        fetcher::require_options(
            self.url.as_deref().unwrap_or_default(),
            self.output.as_deref().unwrap_or(Path::new("")),
        )?;
        Ok(())
    }

    /// Builds the fetch request; flags win over config-file values.
    pub fn into_request(self, cfg: &FetchConfig) -> Result<FetchRequest> {
        let timeout = match self.timeout {
            Some(t) => t,
            None => cfg.timeout()?,
        };
        Ok(FetchRequest {
            provider: self
                .provider
                .unwrap_or_else(|| cfg.provider().to_string()),
            locator: self.url.unwrap_or_default(),
            output: self.output.unwrap_or_default(),
            transfer: TransferOptions {
                timeout,
                user_agent: cfg.user_agent(),
                max_redirects: cfg.max_redirects(),
            },
        })
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let request = self.into_request(&cfg)?;
        let outcome = fetcher::fetch(&request)?;
        println!(
            "Schema successfully fetched from {} and saved to {}",
            outcome.url,
            outcome.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
