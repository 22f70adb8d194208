use crate::models::{BookingPolicy, FieldWeights};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Library configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub policy: PolicySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            default_limit: None,
            max_limit: None,
        }
    }
}

fn default_threshold() -> f64 { 0.7 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_name_weight")]
    pub name: f64,
    #[serde(default = "default_category_weight")]
    pub category: f64,
    #[serde(default = "default_description_weight")]
    pub description: f64,
    #[serde(default = "default_amenities_weight")]
    pub amenities: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            name: default_name_weight(),
            category: default_category_weight(),
            description: default_description_weight(),
            amenities: default_amenities_weight(),
        }
    }
}

fn default_name_weight() -> f64 { 1.0 }
fn default_category_weight() -> f64 { 0.7 }
fn default_description_weight() -> f64 { 0.5 }
fn default_amenities_weight() -> f64 { 0.6 }

impl From<WeightsConfig> for FieldWeights {
    fn from(weights: WeightsConfig) -> Self {
        Self {
            name: weights.name,
            category: weights.category,
            description: weights.description,
            amenities: weights.amenities,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicySettings {
    #[serde(default = "default_max_stay_nights")]
    pub max_stay_nights: i64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            max_stay_nights: default_max_stay_nights(),
            tax_rate: default_tax_rate(),
        }
    }
}

fn default_max_stay_nights() -> i64 { 30 }
fn default_tax_rate() -> f64 { 0.10 }

impl From<PolicySettings> for BookingPolicy {
    fn from(policy: PolicySettings) -> Self {
        Self {
            max_stay_nights: policy.max_stay_nights,
            tax_rate: policy.tax_rate,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ROOMLY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ROOMLY_)
            // e.g., ROOMLY__POLICY__TAX_RATE -> policy.tax_rate
            .add_source(
                Environment::with_prefix("ROOMLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
