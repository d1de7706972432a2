//! Service configuration settings

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::trust::TrustScoreConfig;

/// Main service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub service: ServiceSettings,
    pub server: ServerSettings,
    pub reputation: ReputationSettings,
    pub trust: TrustSettings,
    pub query: QuerySettings,
    pub metrics: MetricsSettings,
}

/// Service identity settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    /// Unique instance identifier (UUID)
    pub instance_id: String,
    /// Service name reported by health checks
    #[serde(default = "default_service_name")]
    pub name: String,
}

fn default_service_name() -> String {
    "reputation-hub".to_string()
}

/// Server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    3001
}

fn default_workers() -> usize {
    num_cpus::get()
}

/// Reputation scoring settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReputationSettings {
    /// Score every dimension starts at on registration
    #[serde(default = "default_initial_score")]
    pub initial_score: u32,
    /// Reviews (exclusive) before the first trust bonus
    #[serde(default = "default_established_reviews")]
    pub established_reviews: u64,
    /// Reviews (exclusive) before the second trust bonus
    #[serde(default = "default_veteran_reviews")]
    pub veteran_reviews: u64,
    /// Trust bonus per review threshold crossed
    #[serde(default = "default_review_bonus")]
    pub review_bonus: u32,
    /// Trust score cap
    #[serde(default = "default_max_trust_score")]
    pub max_trust_score: u32,
}

fn default_initial_score() -> u32 {
    50
}

fn default_established_reviews() -> u64 {
    10
}

fn default_veteran_reviews() -> u64 {
    50
}

fn default_review_bonus() -> u32 {
    5
}

fn default_max_trust_score() -> u32 {
    100
}

impl Default for ReputationSettings {
    fn default() -> Self {
        ReputationSettings {
            initial_score: default_initial_score(),
            established_reviews: default_established_reviews(),
            veteran_reviews: default_veteran_reviews(),
            review_bonus: default_review_bonus(),
            max_trust_score: default_max_trust_score(),
        }
    }
}

impl From<&ReputationSettings> for TrustScoreConfig {
    fn from(settings: &ReputationSettings) -> Self {
        TrustScoreConfig {
            established_reviews: settings.established_reviews,
            veteran_reviews: settings.veteran_reviews,
            review_bonus: settings.review_bonus,
            max_score: settings.max_trust_score,
        }
    }
}

/// Trust graph settings
#[derive(Debug, Clone, Deserialize)]
pub struct TrustSettings {
    /// Traversal depth used when a request does not give one
    #[serde(default = "default_depth")]
    pub default_depth: u32,
    /// Largest traversal depth served
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

fn default_depth() -> u32 {
    1
}

fn default_max_depth() -> u32 {
    5
}

impl Default for TrustSettings {
    fn default() -> Self {
        TrustSettings {
            default_depth: default_depth(),
            max_depth: default_max_depth(),
        }
    }
}

/// Search and leaderboard settings
#[derive(Debug, Clone, Deserialize)]
pub struct QuerySettings {
    #[serde(default = "default_search_limit")]
    pub default_search_limit: usize,
    #[serde(default = "default_leaderboard_limit")]
    pub default_leaderboard_limit: usize,
    /// Hard cap on any requested limit
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_search_limit() -> usize {
    20
}

fn default_leaderboard_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

impl Default for QuerySettings {
    fn default() -> Self {
        QuerySettings {
            default_search_limit: default_search_limit(),
            default_leaderboard_limit: default_leaderboard_limit(),
            max_limit: default_max_limit(),
        }
    }
}

/// Metrics settings
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// Enable Prometheus metrics
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Metrics endpoint path
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

fn default_true() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Settings {
    /// Load settings from file and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load settings from a specific config file path (without extension)
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_path = path.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("service.instance_id", uuid::Uuid::new_v4().to_string())?
            .set_default("service.name", default_service_name())?
            .set_default("server.host", default_host())?
            .set_default("server.http_port", default_http_port() as i64)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("reputation.initial_score", default_initial_score() as i64)?
            .set_default("reputation.established_reviews", default_established_reviews() as i64)?
            .set_default("reputation.veteran_reviews", default_veteran_reviews() as i64)?
            .set_default("reputation.review_bonus", default_review_bonus() as i64)?
            .set_default("reputation.max_trust_score", default_max_trust_score() as i64)?
            .set_default("trust.default_depth", default_depth() as i64)?
            .set_default("trust.max_depth", default_max_depth() as i64)?
            .set_default("query.default_search_limit", default_search_limit() as i64)?
            .set_default("query.default_leaderboard_limit", default_leaderboard_limit() as i64)?
            .set_default("query.max_limit", default_max_limit() as i64)?
            .set_default("metrics.enabled", true)?
            .set_default("metrics.path", default_metrics_path())?
            // Add config file if it exists
            .add_source(File::with_name(config_path.to_str().unwrap_or("config")).required(false))
            // Add environment variables with prefix REPUTATION_HUB__
            .add_source(
                Environment::with_prefix("REPUTATION_HUB")
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }

    /// Trust score configuration derived from the reputation section
    pub fn trust_score_config(&self) -> TrustScoreConfig {
        TrustScoreConfig::from(&self.reputation)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            service: ServiceSettings {
                instance_id: uuid::Uuid::new_v4().to_string(),
                name: default_service_name(),
            },
            server: ServerSettings {
                host: default_host(),
                http_port: default_http_port(),
                workers: default_workers(),
            },
            reputation: ReputationSettings::default(),
            trust: TrustSettings::default(),
            query: QuerySettings::default(),
            metrics: MetricsSettings {
                enabled: true,
                path: default_metrics_path(),
            },
        }
    }
}
