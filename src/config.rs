//! Runtime configuration
//!
//! Read from the process environment after `.env` has been loaded.
//! With nothing set, the advisor behaves as a plain console tool.

use crate::error::AdvisorError;
use crate::Result;
use std::str::FromStr;

pub const LOG_ENV: &str = "ADVISOR_LOG";
pub const OUTPUT_ENV: &str = "ADVISOR_OUTPUT";

/// Default tracing filter, quiet enough not to interleave with the console
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AdvisorError::ConfigError(format!(
                "{} must be 'text' or 'json', got '{}'",
                OUTPUT_ENV, other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// tracing `EnvFilter` directive
    pub log_filter: String,
    pub output_format: OutputFormat,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_filter = get(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let output_format = match get(OUTPUT_ENV) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            log_filter,
            output_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[
            (LOG_ENV, "loan_invest_advisor=debug"),
            (OUTPUT_ENV, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "loan_invest_advisor=debug");
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            AdvisorConfig::from_lookup(lookup_from(&[(LOG_ENV, ""), (OUTPUT_ENV, "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_rejects_unknown_output() {
        let err = AdvisorConfig::from_lookup(lookup_from(&[(OUTPUT_ENV, "yaml")])).unwrap_err();
        assert!(matches!(err, AdvisorError::ConfigError(_)));
    }
}
