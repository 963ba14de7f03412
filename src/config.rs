use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use eatsoon_recipe::{RecommendOptions, Weights};
use serde::Deserialize;
use std::{env, path::PathBuf};
use validator::Validate;

#[derive(Debug, Deserialize, Clone, Default, Validate)]
pub struct Config {
    #[serde(default)]
    #[validate(nested)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct RecommendationConfig {
    #[serde(default = "default_top_k")]
    #[validate(range(min = 1, max = 500, message = "top_k must be between 1 and 500"))]
    pub top_k: usize,
    #[serde(default)]
    pub max_missing: Option<usize>,
    #[serde(default)]
    pub only_full_match: bool,
    #[serde(default = "default_min_expiring")]
    #[validate(range(min = 1, message = "min_expiring must be at least 1"))]
    pub min_expiring: usize,
    #[serde(default)]
    #[validate(nested)]
    pub weights: WeightsConfig,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            max_missing: None,
            only_full_match: false,
            min_expiring: default_min_expiring(),
            weights: WeightsConfig::default(),
        }
    }
}

impl RecommendationConfig {
    pub fn to_options(&self) -> RecommendOptions {
        RecommendOptions {
            top_k: self.top_k,
            max_missing: self.max_missing,
            only_full_match: self.only_full_match,
            min_expiring: self.min_expiring,
            weights: self.weights.to_weights(),
        }
    }
}

fn default_top_k() -> usize {
    20
}

fn default_min_expiring() -> usize {
    3
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct WeightsConfig {
    #[serde(default = "default_urgency_weight")]
    #[validate(range(min = 0.0, message = "urgency weight must not be negative"))]
    pub urgency: f64,
    #[serde(default = "default_match_weight", rename = "match")]
    #[validate(range(min = 0.0, message = "match weight must not be negative"))]
    pub coverage: f64,
    #[serde(default = "default_missing_weight")]
    #[validate(range(min = 0.0, message = "missing weight must not be negative"))]
    pub missing: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            urgency: default_urgency_weight(),
            coverage: default_match_weight(),
            missing: default_missing_weight(),
        }
    }
}

impl WeightsConfig {
    pub fn to_weights(&self) -> Weights {
        Weights {
            w_urgency: self.urgency,
            w_match: self.coverage,
            w_missing: self.missing,
        }
    }
}

fn default_urgency_weight() -> f64 {
    1.2
}

fn default_match_weight() -> f64 {
    2.0
}

fn default_missing_weight() -> f64 {
    1.0
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Default snapshot locations, used when a command is given no path.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    #[serde(default)]
    pub pantry_path: Option<PathBuf>,
    #[serde(default)]
    pub recipes_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (EATSOON__RECOMMENDATION__TOP_K, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("recommendation.top_k", 20)?
            .set_default("recommendation.only_full_match", false)?
            .set_default("recommendation.min_expiring", 3)?
            .set_default("recommendation.weights.urgency", 1.2)?
            .set_default("recommendation.weights.match", 2.0)?
            .set_default("recommendation.weights.missing", 1.0)?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("EATSOON")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
