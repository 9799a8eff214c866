use serde::{Deserialize, Serialize};

/// Sigcard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display settings
    #[serde(default)]
    pub display: Display,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Display {
    /// Attempt rich terminal rendering (plain stdout otherwise)
    pub rich: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: Display::default(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self { rich: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.display.rich);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert!(parsed.display.rich);
    }

    #[test]
    fn test_config_missing_display_table_uses_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(parsed.display.rich);
    }

    #[test]
    fn test_config_rich_disabled() {
        let parsed: Config = toml::from_str("[display]\nrich = false\n").unwrap();
        assert!(!parsed.display.rich);
    }
}
