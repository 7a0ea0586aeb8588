//! Table configuration.
//!
//! Defaults match the interactive table: 100 rows per page, a 300 ms search
//! debounce, and search starting on the first-name column. Values can come from
//! JSON or YAML documents and be overridden from the environment.

use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::athlete::Field;
use crate::error::{Result, RosterError};

/// Environment variable overriding [`TableConfig::page_size`].
pub const PAGE_SIZE_VAR: &str = "ROSTER_PAGE_SIZE";
/// Environment variable overriding [`TableConfig::debounce_ms`].
pub const DEBOUNCE_MS_VAR: &str = "ROSTER_DEBOUNCE_MS";
/// Environment variable overriding [`TableConfig::default_search_field`], as a column key.
pub const SEARCH_FIELD_VAR: &str = "ROSTER_SEARCH_FIELD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Quiet period before a typed search is applied, in milliseconds.
    pub debounce_ms: u64,
    /// Search column after construction and after a reset.
    pub default_search_field: Field,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            page_size: roster_seeker::DEFAULT_PAGE_SIZE,
            debounce_ms: 300,
            default_search_field: Field::FirstName,
        }
    }
}

impl TableConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: TableConfig = serde_json::from_str(text)?;
        config.validated()
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: TableConfig = serde_yaml::from_str(text)?;
        config.validated()
    }

    /// Applies `ROSTER_PAGE_SIZE`, `ROSTER_DEBOUNCE_MS` and
    /// `ROSTER_SEARCH_FIELD` overrides.
    pub fn with_env(mut self, env: &dyn EnvReader) -> Result<Self> {
        if let Some(raw) = env.var(PAGE_SIZE_VAR) {
            self.page_size = parse_var(PAGE_SIZE_VAR, &raw)?;
        }
        if let Some(raw) = env.var(DEBOUNCE_MS_VAR) {
            self.debounce_ms = parse_var(DEBOUNCE_MS_VAR, &raw)?;
        }
        if let Some(raw) = env.var(SEARCH_FIELD_VAR) {
            self.default_search_field = raw.trim().parse::<Field>()?;
        }
        debug!(
            "table config: page size {}, debounce {} ms, search on {}",
            self.page_size, self.debounce_ms, self.default_search_field
        );
        self.validated()
    }

    /// Rejects a zero page size.
    pub fn validated(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(RosterError::Config("page size must be at least 1".into()));
        }
        Ok(self)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| RosterError::Config(format!("{name} must be a whole number, got {raw:?}")))
}

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        MockEnv::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
