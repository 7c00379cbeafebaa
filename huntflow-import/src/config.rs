//! Importer configuration
//!
//! Values come from the environment (a `.env` file is loaded first by the
//! binary) and fall back to sane defaults. Command-line flags override them.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::api::{ApiContext, DEFAULT_API_URL, DEFAULT_USER_AGENT};
use crate::import::{ColumnNames, DEFAULT_MARKER_FILE, MatchPolicy};

/// Environment variable names
pub mod vars {
    pub const API_URL: &str = "HUNTFLOW_API_URL";
    pub const USER_AGENT: &str = "HUNTFLOW_USER_AGENT";
    pub const TIMEOUT_SECS: &str = "HUNTFLOW_TIMEOUT_SECS";
    pub const MARKER_FILE: &str = "HUNTFLOW_MARKER_FILE";
    pub const SHEET: &str = "HUNTFLOW_SHEET";
    pub const RESUME_MATCH: &str = "HUNTFLOW_RESUME_MATCH";
    pub const COLUMN_FULL_NAME: &str = "HUNTFLOW_COLUMN_FULL_NAME";
    pub const COLUMN_POSITION: &str = "HUNTFLOW_COLUMN_POSITION";
    pub const COLUMN_SALARY: &str = "HUNTFLOW_COLUMN_SALARY";
    pub const COLUMN_STATUS: &str = "HUNTFLOW_COLUMN_STATUS";
    pub const COLUMN_COMMENT: &str = "HUNTFLOW_COLUMN_COMMENT";
}

#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub api_url: String,
    pub user_agent: String,
    /// HTTP timeout; `None` keeps the client default
    pub timeout: Option<Duration>,
    pub marker_file: PathBuf,
    /// Worksheet to read; the first sheet when unset
    pub sheet: Option<String>,
    pub resume_match: MatchPolicy,
    pub columns: ColumnNames,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            marker_file: PathBuf::from(DEFAULT_MARKER_FILE),
            sheet: None,
            resume_match: MatchPolicy::default(),
            columns: ColumnNames::default(),
        }
    }
}

impl ImportConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(vars::API_URL) {
            config.api_url = url;
        }
        if let Some(agent) = get(vars::USER_AGENT) {
            config.user_agent = agent;
        }
        if let Some(secs) = get(vars::TIMEOUT_SECS) {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", vars::TIMEOUT_SECS))?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(marker) = get(vars::MARKER_FILE) {
            config.marker_file = PathBuf::from(marker);
        }
        config.sheet = get(vars::SHEET);
        if let Some(policy) = get(vars::RESUME_MATCH) {
            config.resume_match = policy
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid {}", vars::RESUME_MATCH))?;
        }

        let columns = &mut config.columns;
        for (key, slot) in [
            (vars::COLUMN_FULL_NAME, &mut columns.full_name),
            (vars::COLUMN_POSITION, &mut columns.position),
            (vars::COLUMN_SALARY, &mut columns.salary),
            (vars::COLUMN_STATUS, &mut columns.status),
            (vars::COLUMN_COMMENT, &mut columns.comment),
        ] {
            if let Some(name) = get(key) {
                *slot = name;
            }
        }

        Ok(config)
    }

    /// Request context for a given access token
    pub fn api_context(&self, token: impl Into<String>) -> ApiContext {
        ApiContext {
            base_url: self.api_url.clone(),
            token: token.into(),
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
        }
    }
}
