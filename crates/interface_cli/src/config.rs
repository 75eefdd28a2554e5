//! CLI configuration

use serde::Deserialize;

use crate::error::CliError;

/// Prefix of the environment variables read by [`CliConfig::from_env`]
pub const ENV_PREFIX: &str = "DECISION";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            pretty: false,
            json_logs: false,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `DECISION_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, CliError> {
        Self::load(None)
    }

    /// Loads configuration from an explicit set of variables instead of the process environment
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, CliError> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<config::Map<String, String>>) -> Result<Self, CliError> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_FAILURE;

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_vars(config::Map::new()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_reads_prefixed_variables() {
        let mut vars = config::Map::new();
        vars.insert("DECISION_LOG_LEVEL".to_string(), "debug".to_string());
        vars.insert("DECISION_PRETTY".to_string(), "true".to_string());

        let config = CliConfig::from_vars(vars).unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.pretty);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_ignores_other_prefixes() {
        let mut vars = config::Map::new();
        vars.insert("API_LOG_LEVEL".to_string(), "trace".to_string());

        let config = CliConfig::from_vars(vars).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unparseable_flag_is_a_config_error() {
        let mut vars = config::Map::new();
        vars.insert("DECISION_PRETTY".to_string(), "sometimes".to_string());

        let error = CliConfig::from_vars(vars).unwrap_err();

        assert!(matches!(error, CliError::Config(_)));
        assert_eq!(error.kind(), "config_error");
        assert_eq!(error.exit_code(), EXIT_FAILURE);
    }
}
