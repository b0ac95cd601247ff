//! Runtime configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `HELPDESK_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::UNASSIGNED;
use crate::error::{HelpdeskError, Result};

const DEFAULT_RECENT_ACTIVITY: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Agent given to newly created tickets
    pub default_agent: String,
    /// Number of tickets listed under recent activity on the dashboard
    pub recent_activity: usize,
    /// Ask before undoing the last action
    pub confirm_undo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_agent: UNASSIGNED.to_string(),
            recent_activity: 5,
            confirm_undo: true,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the user config file if none
    /// is given. An explicit path must exist; the user file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("default_agent", UNASSIGNED)?
            .set_default("recent_activity", DEFAULT_RECENT_ACTIVITY)?
            .set_default("confirm_undo", true)?;

        if let Some(path) = path {
            debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(File::from(path).required(true));
        } else if let Some(path) = Self::user_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix("HELPDESK"))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/helpdesk/config.toml` for the current user
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "helpdesk").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        if self.default_agent.trim().is_empty() {
            return Err(HelpdeskError::InvalidConfig(
                "default_agent cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
