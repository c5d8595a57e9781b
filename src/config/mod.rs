//! Application configuration module
//!
//! Configuration is read from an optional file plus environment variables
//! with the `ASSESSMENT` prefix. Nested values use double underscores.
//!
//! # Example
//!
//! ```no_run
//! use assessment_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod analysis;
mod error;
mod logging;
mod pricing;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use pricing::PricingConfig;

use std::path::Path;

use serde::Deserialize;

use crate::domain::recommendation::RecommendationEngine;

const ENV_PREFIX: &str = "ASSESSMENT";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Unit costs applied by the analyzers
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Classification thresholds
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `ASSESSMENT__PRICING__HYBRID_BENEFIT_PER_CORE=12.5` -> `pricing.hybrid_benefit_per_core`
    /// - `ASSESSMENT__LOGGING__JSON=true` -> `logging.json`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top.
    ///
    /// The format is inferred from the file extension.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pricing.validate()?;
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Builds a recommendation engine from the pricing and analysis sections.
    pub fn recommendation_engine(&self) -> RecommendationEngine {
        RecommendationEngine::new(self.pricing.to_rate_card(), self.analysis.to_thresholds())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("ASSESSMENT__PRICING__HYBRID_BENEFIT_PER_CORE");
        env::remove_var("ASSESSMENT__ANALYSIS__RESERVED_MIN_GROUP");
        env::remove_var("ASSESSMENT__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ASSESSMENT__PRICING__HYBRID_BENEFIT_PER_CORE", "12.5");
        env::set_var("ASSESSMENT__ANALYSIS__RESERVED_MIN_GROUP", "5");
        env::set_var("ASSESSMENT__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.pricing.hybrid_benefit_per_core, 12.5);
        assert_eq!(config.analysis.reserved_min_group, 5);
        assert!(config.logging.json);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "analysis:\n  reserved_min_group: 4\n  archive_min_gb: 500\nlogging:\n  level: debug"
        )
        .unwrap();

        env::set_var("ASSESSMENT__ANALYSIS__RESERVED_MIN_GROUP", "6");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.reserved_min_group, 6);
        assert_eq!(config.analysis.archive_min_gb, 500.0);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.pricing, PricingConfig::default());
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let result = AppConfig::load_from_file(Path::new("/nonexistent/assessment.yaml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let mut config = AppConfig::default();
        config.analysis.reserved_min_group = 0;
        config.pricing.archive_savings_per_gb = -0.1;

        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidRate("archive_savings_per_gb"))
        );
    }
}
