// RiskMapper Configuration
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::error::RiskMapperError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Asset name used when a finding does not name one
pub const DEFAULT_ASSET: &str = "Unassigned";

/// Title used when a finding does not carry one
pub const DEFAULT_TITLE: &str = "Untitled Finding";

/// Tracked asset declared in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub name: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskMapperConfig {
    /// Asset name for findings without one
    pub default_asset: String,

    /// Title for findings without one
    pub default_title: String,

    /// Number of findings shown in the "latest" dashboard panel
    pub latest_limit: usize,

    /// Use the colorblind palette for severity labels
    pub colorblind: bool,

    /// Tracked assets (attack surface)
    pub assets: Vec<AssetConfig>,
}

impl Default for RiskMapperConfig {
    fn default() -> Self {
        Self {
            default_asset: DEFAULT_ASSET.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            latest_limit: 10,
            colorblind: false,
            assets: Vec::new(),
        }
    }
}

impl RiskMapperConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RiskMapperError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| RiskMapperError::FileSystemError {
                path: path.display().to_string(),
                source: e,
            })?;
        let config: RiskMapperConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write an example configuration with one sample asset
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<(), RiskMapperError> {
        let config = Self {
            assets: vec![AssetConfig {
                name: "web-portal-01".to_string(),
                tags: vec!["internet-facing".to_string(), "prod".to_string()],
                services: vec!["80/http".to_string(), "443/https".to_string()],
            }],
            ..Self::default()
        };
        let toml = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Reject values that would make the register misbehave
    pub fn validate(&self) -> Result<(), RiskMapperError> {
        if self.default_asset.trim().is_empty() {
            crate::invalid_input!("default_asset must not be empty");
        }
        if self.default_title.trim().is_empty() {
            crate::invalid_input!("default_title must not be empty");
        }
        if let Some(asset) = self.assets.iter().find(|a| a.name.trim().is_empty()) {
            crate::invalid_input!("asset with tags {:?} has an empty name", asset.tags);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RiskMapperConfig::default();
        assert_eq!(config.default_asset, "Unassigned");
        assert_eq!(config.default_title, "Untitled Finding");
        assert_eq!(config.latest_limit, 10);
        assert!(config.assets.is_empty());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("riskmapper.toml");
        std::fs::write(
            &path,
            r#"
latest_limit = 3

[[assets]]
name = "api.example.com"
tags = ["prod"]
"#,
        )
        .unwrap();

        let config = RiskMapperConfig::from_file(&path).unwrap();
        assert_eq!(config.latest_limit, 3);
        assert_eq!(config.default_asset, "Unassigned");
        assert_eq!(config.assets.len(), 1);
        assert_eq!(config.assets[0].name, "api.example.com");
        assert!(config.assets[0].services.is_empty());
    }

    #[test]
    fn test_example_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("example.toml");

        RiskMapperConfig::create_example(&path).unwrap();
        let config = RiskMapperConfig::from_file(&path).unwrap();
        assert_eq!(config.assets[0].name, "web-portal-01");
        assert_eq!(config.assets[0].services, vec!["80/http", "443/https"]);
    }

    #[test]
    fn test_empty_asset_name_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[[assets]]\nname = \"  \"\n").unwrap();

        let err = RiskMapperConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, RiskMapperError::InvalidInput { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = RiskMapperConfig::from_file("/nonexistent/riskmapper.toml").unwrap_err();
        assert!(matches!(err, RiskMapperError::FileSystemError { .. }));
    }
}
