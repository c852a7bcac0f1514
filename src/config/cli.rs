use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rsa-link")]
#[command(about = "Resolve an RSA citation such as 'RSA 225-A:24' to its archive URL")]
pub struct CliConfig {
    /// Citation text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub citation: Vec<String>,

    /// Mapping JSON location, either an http(s) URL or a file path
    #[arg(long)]
    pub mapping: Option<String>,

    /// Archive root the document path is appended to
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the resolution as JSON instead of a bare URL
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn raw_citation(&self) -> String {
        self.citation.join(" ")
    }

    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        Ok(Settings::merge(
            file,
            self.base_url.clone(),
            self.mapping.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = CliConfig::parse_from([
            "rsa-link",
            "RSA",
            "225-A:24",
            "--mapping",
            "https://example.com/map.json",
        ]);

        assert_eq!(cli.raw_citation(), "RSA 225-A:24");
        let settings = cli.settings().unwrap();
        assert_eq!(settings.mapping_location, "https://example.com/map.json");
        assert_eq!(settings.base_url, "https://gc.nh.gov/rsa/html");
    }

    #[test]
    fn test_citation_is_required() {
        assert!(CliConfig::try_parse_from(["rsa-link"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from(["rsa-link", "225", "--config", "/nonexistent/rsa.toml"]);
        assert!(cli.settings().is_err());
    }
}
