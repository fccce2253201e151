//! UI configuration: preset tip percentages and the currency symbol.
//!
//! Loaded from an optional TOML file passed on the command line. With no
//! file, the built-in defaults apply.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading or validating the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// At least one preset is required for the quick-select grid.
    #[error("tip_presets must not be empty")]
    EmptyPresets,

    /// A negative tip percentage can never be selected.
    #[error("tip preset must not be negative, got {0}")]
    NegativePreset(Decimal),
}

/// Settings for the calculator window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Quick-select tip percentages, rendered as buttons in file order.
    pub tip_presets: Vec<Decimal>,

    /// Symbol shown before the bill input and the derived amounts.
    pub currency_symbol: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tip_presets: [5, 10, 15, 25, 50].map(Decimal::from).to_vec(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl UiConfig {
    /// Validates the loaded values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tip_presets.is_empty() {
            return Err(ConfigError::EmptyPresets);
        }
        if let Some(bad) = self.tip_presets.iter().find(|p| **p < Decimal::ZERO) {
            return Err(ConfigError::NegativePreset(*bad));
        }
        Ok(())
    }
}

/// Loads the config from `path`, or returns the defaults when no path is
/// given. A present-but-broken file is an error rather than a silent
/// fallback.
pub fn load(path: Option<&Path>) -> Result<UiConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(UiConfig::default());
    };

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: UiConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    config.validate()?;

    info!(path = %path.display(), presets = config.tip_presets.len(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_match_the_quick_select_grid() {
        let config = UiConfig::default();

        assert_eq!(
            config.tip_presets,
            vec![dec!(5), dec!(10), dec!(15), dec!(25), dec!(50)]
        );
        assert_eq!(config.currency_symbol, "$");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_partial_file_with_defaults_for_the_rest() {
        let config: UiConfig = toml::from_str(r#"currency_symbol = "€""#).unwrap();

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.tip_presets, UiConfig::default().tip_presets);
    }

    #[test]
    fn parses_preset_list() {
        let config: UiConfig = toml::from_str("tip_presets = [10, 18, 20]").unwrap();

        assert_eq!(config.tip_presets, vec![dec!(10), dec!(18), dec!(20)]);
    }

    #[test]
    fn validate_rejects_empty_presets() {
        let config: UiConfig = toml::from_str("tip_presets = []").unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::EmptyPresets)));
    }

    #[test]
    fn validate_rejects_negative_preset() {
        let config = UiConfig {
            tip_presets: vec![dec!(10), dec!(-5)],
            ..UiConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativePreset(v)) if v == dec!(-5)
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<UiConfig, _> = toml::from_str("tip_percent = [10]");

        assert!(result.is_err());
    }

    #[test]
    fn load_without_a_path_returns_defaults() {
        let config = load(None).unwrap();

        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = load(Some(Path::new("/this/path/does/not/exist.toml")));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
