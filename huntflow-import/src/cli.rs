//! Command-line interface

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::*;
use log::{debug, info};

use crate::api::HuntflowClient;
use crate::config::ImportConfig;
use crate::import::{BatchOptions, BatchRunner, MatchPolicy, ResumeMarker, records_from_rows};
use crate::report::write_import_report;
use crate::source::read_rows;

#[derive(Parser, Debug)]
#[command(
    name = "huntflow-import",
    about = "Import job applicants from a spreadsheet into Huntflow",
    version
)]
pub struct Cli {
    /// Huntflow API access token
    pub token: String,

    /// Spreadsheet (.xlsx or .csv) with one applicant per row
    pub path: PathBuf,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Folder with one résumé subfolder per position (defaults to the spreadsheet's folder)
    #[arg(long)]
    pub resume_dir: Option<PathBuf>,

    /// File receiving the index of a failed record
    #[arg(long)]
    pub marker_file: Option<PathBuf>,

    /// Skip data rows before index N (0-based, blank rows counted, as in the marker file)
    #[arg(long, default_value_t = 0)]
    pub start_at: usize,

    /// Write per-record outcomes to this .xlsx file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Huntflow API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// How to pick a résumé when several files match: first or last
    #[arg(long)]
    pub resume_match: Option<MatchPolicy>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    pub fn resolve_config(&self, mut config: ImportConfig) -> ImportConfig {
        if let Some(ref url) = self.api_url {
            config.api_url = url.clone();
        }
        if let Some(ref sheet) = self.sheet {
            config.sheet = Some(sheet.clone());
        }
        if let Some(ref marker) = self.marker_file {
            config.marker_file = marker.clone();
        }
        if let Some(policy) = self.resume_match {
            config.resume_match = policy;
        }
        config
    }

    pub fn resume_dir(&self) -> PathBuf {
        match self.resume_dir {
            Some(ref dir) => dir.clone(),
            None => self
                .path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Run an import as described by the command line
pub async fn handle_import_command(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.resolve_config(ImportConfig::from_env()?);
    debug!("Configuration: {:?}", config);

    if !cli.path.exists() {
        bail!("Input file does not exist: {}", cli.path.display());
    }

    println!(
        "Reading applicants from {}",
        cli.path.display().to_string().cyan()
    );
    let rows = read_rows(&cli.path, config.sheet.as_deref())?;
    let records = records_from_rows(&rows, &config.columns)?;
    info!("Read {} applicant records", records.len());

    let marker = ResumeMarker::new(config.marker_file.clone());
    match marker.read() {
        Ok(Some(index)) => info!(
            "Resume marker {} from an earlier run points at record {}",
            marker.path().display(),
            index
        ),
        Ok(None) => {}
        Err(err) => debug!("Ignoring unreadable resume marker: {}", err),
    }

    let options = BatchOptions {
        resume_dir: cli.resume_dir(),
        match_policy: config.resume_match,
        start_at: cli.start_at,
    };

    let client = HuntflowClient::new(config.api_context(cli.token.clone()))
        .context("Failed to build HTTP client")?;
    let runner = BatchRunner::new(&client, marker, options);
    let report = runner.run(records).await?;

    if let Some(ref path) = cli.report {
        write_import_report(&report, path)?;
        println!(
            "Report written to {}",
            path.display().to_string().bright_green()
        );
    }

    Ok(())
}
