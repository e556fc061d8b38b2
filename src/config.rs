use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.review-radar/config.toml`.
///
/// Every section is optional; missing sections and keys use the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which hosts count as a supported marketplace.
    pub marketplace: MarketplaceConfig,
    /// Recent-analysis list settings.
    pub history: HistoryConfig,
    /// Remote sentiment endpoint used by the `sentiment` command.
    pub sentiment: SentimentConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketplaceConfig {
    /// Substrings matched against the URL hostname.
    pub host_fragments: Vec<String>,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        MarketplaceConfig {
            host_fragments: vec!["amazon.".to_string(), "amzn.to".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of distinct products kept, newest first.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig { capacity: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        SentimentConfig {
            endpoint: "http://localhost:5000/sentiment".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`, the path passed via `--config`
/// 2. `<project_path>/.review-radar/config.toml`
/// 3. `~/.config/review-radar/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".review-radar").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("review-radar")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.marketplace.host_fragments, vec!["amazon.", "amzn.to"]);
        assert_eq!(cfg.history.capacity, 5);
        assert_eq!(cfg.sentiment.endpoint, "http://localhost:5000/sentiment");
        assert_eq!(cfg.sentiment.timeout_secs, 10);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[history]").unwrap();
        writeln!(f, "capacity = 3").unwrap();

        let cfg = load_config(Path::new("."), Some(f.path())).unwrap();
        assert_eq!(cfg.history.capacity, 3);
        assert_eq!(cfg.marketplace.host_fragments.len(), 2);
        assert_eq!(cfg.sentiment.timeout_secs, 10);
    }

    #[test]
    fn test_full_file() {
        let content = r#"
[marketplace]
host_fragments = ["amazon.", "amzn.to", "a.co"]

[history]
capacity = 8

[sentiment]
endpoint = "http://127.0.0.1:9000/sentiment"
timeout_secs = 2
"#;
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{}", content).unwrap();

        let cfg = load_config(Path::new("."), Some(f.path())).unwrap();
        assert_eq!(cfg.marketplace.host_fragments[2], "a.co");
        assert_eq!(cfg.history.capacity, 8);
        assert_eq!(cfg.sentiment.endpoint, "http://127.0.0.1:9000/sentiment");
        assert_eq!(cfg.sentiment.timeout_secs, 2);
    }

    #[test]
    fn test_project_config_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".review-radar");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[history]\ncapacity = 2\n").unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.history.capacity, 2);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[history").unwrap();
        assert!(load_config(Path::new("."), Some(f.path())).is_err());
    }
}
