use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_MAX_RESULTS;
use crate::models::{ScoringWeights, SoftBoost};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub remote: RemoteSettings,
    pub file: FileSettings,
    pub cache: CacheSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            workers: None,
        }
    }
}

/// Remote table store; disabled unless both `url` and `api_key` are set
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    pub url: String,
    pub api_key: String,
    pub tables: Vec<String>,
    pub row_limit: usize,
    pub timeout_secs: u64,
}

impl RemoteSettings {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            tables: ["companies", "Companies", "company", "Company", "CompaniesData"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            row_limit: 5000,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub path: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            path: "Companies.csv".to_string(),
        }
    }
}

/// Record cache; `None` or `0` disables caching
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MatchingSettings {
    pub max_results: Option<usize>,
}

impl MatchingSettings {
    pub fn max_results(&self) -> usize {
        self.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub query_base: u32,
    pub query_per_token: u32,
    pub filter_per_hit: u32,
    pub degree: u32,
    pub specialisation: u32,
    pub domain: u32,
    pub skill_per_term: u32,
    pub skill_cap: u32,
    pub language_per_term: u32,
    pub language_cap: u32,
    pub projects_per_point: u32,
    pub projects_cap: u32,
    pub experience_months_per_point: u32,
    pub experience_cap: u32,
    pub competitions_per_point: u32,
    pub competitions_cap: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        ScoringWeights::default().into()
    }
}

impl From<ScoringWeights> for WeightsConfig {
    fn from(w: ScoringWeights) -> Self {
        Self {
            query_base: w.query_base,
            query_per_token: w.query_per_token,
            filter_per_hit: w.filter_per_hit,
            degree: w.degree,
            specialisation: w.specialisation,
            domain: w.domain,
            skill_per_term: w.skill_per_term,
            skill_cap: w.skill_cap,
            language_per_term: w.language_per_term,
            language_cap: w.language_cap,
            projects_per_point: w.projects.per,
            projects_cap: w.projects.cap,
            experience_months_per_point: w.experience.per,
            experience_cap: w.experience.cap,
            competitions_per_point: w.competitions.per,
            competitions_cap: w.competitions.cap,
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(c: &WeightsConfig) -> Self {
        Self {
            query_base: c.query_base,
            query_per_token: c.query_per_token,
            filter_per_hit: c.filter_per_hit,
            degree: c.degree,
            specialisation: c.specialisation,
            domain: c.domain,
            skill_per_term: c.skill_per_term,
            skill_cap: c.skill_cap,
            language_per_term: c.language_per_term,
            language_cap: c.language_cap,
            projects: SoftBoost::new(c.projects_per_point, c.projects_cap),
            experience: SoftBoost::new(c.experience_months_per_point, c.experience_cap),
            competitions: SoftBoost::new(c.competitions_per_point, c.competitions_cap),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
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
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INTERN__)
    /// 5. Supabase-style variables (NEXT_PUBLIC_SUPABASE_URL, ...) and PORT
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INTERN__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("INTERN")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("remote.tables")
        .try_parsing(true)
}

/// Apply the variable names the hosting environment already provides
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("NEXT_PUBLIC_SUPABASE_URL") {
        builder = builder.set_override("remote.url", url)?;
    }
    if let Ok(key) = env::var("NEXT_PUBLIC_SUPABASE_ANON_KEY") {
        builder = builder.set_override("remote.api_key", key)?;
    }
    if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<i64>().ok()) {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
