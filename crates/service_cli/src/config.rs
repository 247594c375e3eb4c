//! CLI configuration management.
//!
//! Configuration is read from a TOML file with three sections:
//!
//! ```toml
//! [params]
//! spot = 100
//! strike = [95, 100, 105]
//! vol_time = 0.119
//! volatility = 0.2
//! rate = 0.05
//!
//! [strategy]
//! name = "iron_condor"
//! width = 10
//!
//! [engine]
//! steps = 50
//! grid_size = 40
//! log_level = "info"
//! ```
//!
//! Every key is optional. Environment overrides (`GREEKS_LOG_LEVEL`,
//! `GREEKS_STEPS`, `GREEKS_GRID_SIZE`) are applied after the file and
//! command-line flags after that.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pricer_models::instruments::{
    LegDefinition, OptionParams, Strategy, StrategySelector, DEFAULT_DAY_OFFSET, DEFAULT_WIDTH,
};
use pricer_risk::parallel::DEFAULT_PARALLEL_THRESHOLD;
use pricer_risk::scenarios::{DEFAULT_GRID_SIZE, DEFAULT_STEPS};
use pricer_risk::ParallelConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "greeks.toml";

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file or environment
    #[error("Parse error: {0}")]
    Parse(String),
    /// One or more values failed validation
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in `[engine] log_level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every span and event, including per-sample detail
    Trace,
    /// Sweep and surface summaries
    Debug,
    /// Command progress (default)
    #[default]
    Info,
    /// Ignored list fields, floored inputs, unrecognised strategies
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Parse(format!(
                "Invalid log_level '{}'. Valid values: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// `[strategy]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Strategy name, e.g. `straddle` or `custom`
    pub name: String,
    /// Primary width in strike units
    pub width: f64,
    /// Secondary width; defaults to `width`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width2: Option<f64>,
    /// Inter-expiry offset in calendar days
    pub day_offset: f64,
    /// Explicit legs for `custom`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<LegDefinition>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            name: StrategySelector::Single.name().to_string(),
            width: DEFAULT_WIDTH,
            width2: None,
            day_offset: DEFAULT_DAY_OFFSET,
            legs: Vec::new(),
        }
    }
}

impl StrategyConfig {
    /// The strategy this section describes. `custom` takes the configured legs.
    pub fn to_strategy(&self) -> Strategy {
        let selector = match StrategySelector::from_name(&self.name) {
            StrategySelector::Custom(_) => StrategySelector::Custom(self.legs.clone()),
            other => other,
        };
        let strategy = Strategy::new(selector)
            .with_width(self.width)
            .with_day_offset(self.day_offset);
        match self.width2 {
            Some(width2) => strategy.with_width2(width2),
            None => strategy,
        }
    }
}

/// `[engine]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Samples per sweep
    pub steps: usize,
    /// Nodes per surface axis
    pub grid_size: usize,
    /// Evaluations before sweeps and surfaces go parallel
    pub parallel_threshold: usize,
    /// Log level
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            grid_size: DEFAULT_GRID_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            log_level: LogLevel::default().to_string(),
        }
    }
}

impl EngineConfig {
    /// Parsed log level.
    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        self.log_level.parse()
    }

    /// Parallel configuration for the scenario generator.
    pub fn parallel(&self) -> ParallelConfig {
        ParallelConfig::new(self.parallel_threshold)
    }
}

/// Complete CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreeksConfig {
    /// Market and contract parameters
    pub params: OptionParams,
    /// Strategy selection
    pub strategy: StrategyConfig,
    /// Engine settings
    pub engine: EngineConfig,
}

impl GreeksConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment in production)
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(log_level) = lookup("GREEKS_LOG_LEVEL") {
            self.engine.log_level = log_level;
        }

        if let Some(steps) = lookup("GREEKS_STEPS") {
            self.engine.steps = parse_count("GREEKS_STEPS", &steps)?;
        }

        if let Some(grid_size) = lookup("GREEKS_GRID_SIZE") {
            self.engine.grid_size = parse_count("GREEKS_GRID_SIZE", &grid_size)?;
        }

        Ok(self)
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.engine.log_level() {
            errors.push(e.to_string());
        }

        if self.engine.steps == 0 {
            errors.push("steps must be greater than 0".to_string());
        }

        if self.engine.grid_size == 0 {
            errors.push("grid_size must be greater than 0".to_string());
        }

        let base = self.params.base();
        let base_values = [
            ("spot", base.spot),
            ("strike", base.strike),
            ("vol_time", base.vol_time),
            ("volatility", base.volatility),
            ("rate", base.rate),
            ("dividend", base.dividend),
        ];
        for (name, value) in base_values {
            if !value.is_finite() {
                errors.push(format!("params.{} must be a finite number", name));
            }
        }
        if let Some(discount_time) = base.discount_time {
            if !discount_time.is_finite() {
                errors.push("params.discount_time must be a finite number".to_string());
            }
        }

        for (name, value) in [
            ("width", Some(self.strategy.width)),
            ("width2", self.strategy.width2),
            ("day_offset", Some(self.strategy.day_offset)),
        ] {
            if value.is_some_and(|v| !v.is_finite()) {
                errors.push(format!("strategy.{} must be a finite number", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("{} must be a non-negative integer, got '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::ParamValue;
    use pricer_models::instruments::OptionKind;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GreeksConfig::default();
        assert_eq!(config.params, OptionParams::default());
        assert_eq!(config.strategy.name, "single");
        assert_eq!(config.strategy.width, 10.0);
        assert_eq!(config.strategy.day_offset, 30.0);
        assert_eq!(config.engine.steps, 50);
        assert_eq!(config.engine.grid_size, 40);
        assert_eq!(config.engine.parallel_threshold, 256);
        assert_eq!(config.engine.log_level().unwrap(), LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(GreeksConfig::from_toml("").unwrap(), GreeksConfig::default());
    }

    #[test]
    fn test_parse_scalar_and_list_params() {
        let config = GreeksConfig::from_toml(
            r#"
            [params]
            spot = 48.4
            strike = [40, 44.0, 48]
            vol_time = 0.2222
            discount_time = 0.3068
            kind = "put"
            textbook_mode = true

            [strategy]
            name = "Iron Condor"
            width = 5
            width2 = 7.5

            [engine]
            steps = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.params.spot, ParamValue::Scalar(48.4));
        assert_eq!(config.params.strike, ParamValue::Vector(vec![40.0, 44.0, 48.0]));
        assert_eq!(config.params.discount_time, Some(ParamValue::Scalar(0.3068)));
        assert_eq!(config.params.kind, OptionKind::Put);
        assert!(config.params.textbook_mode);
        assert_eq!(config.params.volatility, ParamValue::Scalar(0.2));

        let strategy = config.strategy.to_strategy();
        assert_eq!(strategy.selector, StrategySelector::IronCondor);
        assert_eq!(strategy.width, 5.0);
        assert_eq!(strategy.secondary_width(), 7.5);
        assert_eq!(config.engine.steps, 120);
        assert_eq!(config.engine.grid_size, 40);
    }

    #[test]
    fn test_custom_strategy_takes_configured_legs() {
        let config = GreeksConfig::from_toml(
            r#"
            [strategy]
            name = "custom"

            [[strategy.legs]]
            kind = "call"
            quantity = 1
            strike = 100
            vol_time = 0.25
            volatility = 0.2
            rate = 0.05

            [[strategy.legs]]
            kind = "put"
            quantity = -2
            strike = 90
            vol_time = 0.25
            discount_time = 0.3
            volatility = 0.25
            rate = 0.05
            "#,
        )
        .unwrap();

        match config.strategy.to_strategy().selector {
            StrategySelector::Custom(legs) => {
                assert_eq!(legs.len(), 2);
                assert_eq!(legs[1].kind, OptionKind::Put);
                assert_eq!(legs[1].quantity, -2.0);
                assert_eq!(legs[1].discount_time, Some(0.3));
                assert_eq!(legs[0].discount_time, None);
            }
            other => panic!("expected custom selector, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_strategy_name_is_kept() {
        let config = GreeksConfig::from_toml("[strategy]\nname = \"jade_lizard\"").unwrap();
        assert_eq!(
            config.strategy.to_strategy().selector,
            StrategySelector::Unrecognised("jade_lizard".to_string())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = GreeksConfig::from_toml("[params]\nspot = \"a lot\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config =
            GreeksConfig::load_or_default(Path::new("does/not/exist/greeks.toml")).unwrap();
        assert_eq!(config, GreeksConfig::default());
        assert!(matches!(
            GreeksConfig::load(Path::new("does/not/exist/greeks.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_env_override() {
        let config = GreeksConfig::default()
            .with_overrides_from(lookup(&[
                ("GREEKS_LOG_LEVEL", "debug"),
                ("GREEKS_STEPS", "75"),
                ("GREEKS_GRID_SIZE", " 12 "),
            ]))
            .unwrap();
        assert_eq!(config.engine.log_level().unwrap(), LogLevel::Debug);
        assert_eq!(config.engine.steps, 75);
        assert_eq!(config.engine.grid_size, 12);
    }

    #[test]
    fn test_env_override_rejects_bad_numbers() {
        let result = GreeksConfig::default().with_overrides_from(lookup(&[("GREEKS_STEPS", "many")]));
        match result {
            Err(ConfigError::Parse(msg)) => assert!(msg.contains("GREEKS_STEPS")),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = GreeksConfig::default();
        config.engine.log_level = "loud".to_string();
        config.engine.steps = 0;
        config.engine.grid_size = 0;
        config.params.volatility = ParamValue::Vector(Vec::new());
        config.strategy.width = f64::INFINITY;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 5);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("steps")));
                assert!(errors.iter().any(|e| e.contains("grid_size")));
                assert!(errors.iter().any(|e| e.contains("params.volatility")));
                assert!(errors.iter().any(|e| e.contains("strategy.width")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let mut config = GreeksConfig::default();
            config.engine.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_bundled_sample_config_validates() {
        let config = GreeksConfig::from_toml(include_str!("../../../greeks.toml")).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = GreeksConfig::from_toml(include_str!("../../../greeks.toml")).unwrap();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(GreeksConfig::from_toml(&text).unwrap(), config);
    }
}
