#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::resolver::DEFAULT_ARCHIVE_BASE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_location, validate_url, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_MAPPING_LOCATION: &str = "data/chapter_to_title.json";

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub mapping_location: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ARCHIVE_BASE.to_string(),
            mapping_location: DEFAULT_MAPPING_LOCATION.to_string(),
        }
    }
}

impl Settings {
    /// Flag values win over the file, the file wins over defaults.
    pub fn merge(
        file: Option<TomlConfig>,
        base_url: Option<String>,
        mapping_location: Option<String>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Settings::default();

        Self {
            base_url: base_url
                .or(file.archive.base_url)
                .unwrap_or(defaults.base_url),
            mapping_location: mapping_location
                .or(file.mapping.location)
                .unwrap_or(defaults.mapping_location),
        }
    }
}

impl ConfigProvider for Settings {
    fn archive_base_url(&self) -> &str {
        &self.base_url
    }

    fn mapping_location(&self) -> &str {
        &self.mapping_location
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("archive.base_url", &self.base_url)?;
        validate_location("mapping.location", &self.mapping_location)?;
        Ok(())
    }
}
