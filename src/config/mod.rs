//! Configuration management for newsdesk.
//!
//! Configuration is read from `~/.config/newsdesk/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod api;
pub mod catalog;

pub use api::ApiConfig;
pub use catalog::SectionConfig;

use crate::domain::Podcast;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "NEWSDESK_API_KEY";

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub sections: Vec<SectionConfig>,
    pub podcasts: Vec<Podcast>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            sections: catalog::default_sections(),
            podcasts: catalog::default_podcasts(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default().with_env_overrides());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config.with_env_overrides())
    }

    /// Get the default config file path: `~/.config/newsdesk/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("newsdesk").join("config.toml"))
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api.api_key = key.trim().to_string();
            }
        }
        self
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> &'static str {
        r##"# newsdesk configuration

[api]
base_url = "https://content.guardianapis.com"
# Set NEWSDESK_API_KEY to override without editing this file
api_key = "test"
page_size = 20
fields = ["headline", "byline", "publication", "thumbnail", "trailText"]

# Sections aggregated by `newsdesk headlines`, in display order.
# layout is one of: list, carousel, grid
[[sections]]
path = "world"
label = "World"
layout = "carousel"

[[sections]]
path = "politics"
label = "Politics"
layout = "list"

[[sections]]
path = "business"
label = "Business"
layout = "list"

[[sections]]
path = "technology"
label = "Technology"
layout = "grid"

[[sections]]
path = "sport"
label = "Sport"
layout = "carousel"

[[sections]]
path = "culture"
label = "Culture"
layout = "grid"

# Podcast catalog. Each podcast may also carry a [podcasts.links] table
# with apple, google and spotify URLs.
[[podcasts]]
title = "Today in Focus"
description = "The day's biggest story, explained"
explicit = false
path = "news/series/todayinfocus"
thumbnail = "today_in_focus"

[[podcasts]]
title = "Science Weekly"
description = "The best science news from the week"
explicit = false
path = "science/series/science"
thumbnail = "science_weekly"

[[podcasts]]
title = "Football Weekly"
description = "Analysis of the week in football"
explicit = true
path = "football/series/footballweekly"
thumbnail = "football_weekly"

[[podcasts]]
title = "Politics Weekly"
description = "The week in Westminster"
explicit = false
path = "politics/series/politicsweekly"
thumbnail = "politics_weekly"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
