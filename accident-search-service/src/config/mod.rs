use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_API_TOKEN: &str = "123";
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub common: core_config::Config,
    pub mode: SearchMode,
    pub security: SecurityConfig,
    pub dataset: DatasetConfig,
    pub inference: InferenceConfig,
}

/// Whether search endpoints ground their prompts on dataset counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Question only; responses carry no `dados`.
    Baseline,
    /// Question plus frequency counts from the loaded dataset.
    DatasetBacked,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Baseline => "baseline",
            SearchMode::DatasetBacked => "dataset",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "baseline" => Ok(SearchMode::Baseline),
            "dataset" | "dataset-backed" => Ok(SearchMode::DatasetBacked),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "SEARCH_MODE must be 'baseline' or 'dataset', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared secret expected in the `api_token` header.
    pub api_token: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub injury_degree_column: String,
    pub body_part_column: String,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Read once at startup; a missing key only fails when a call is made.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
}

impl SearchConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(SearchConfig {
            common: common_config,
            mode: get_env("SEARCH_MODE", Some("baseline"), false)?.parse()?,
            security: SecurityConfig {
                api_token: api_token_from(get_env("API_TOKEN", Some(DEFAULT_API_TOKEN), is_prod)?)?,
            },
            dataset: DatasetConfig {
                path: PathBuf::from(get_env("DATASET_PATH", Some("data/accidents.csv"), false)?),
                injury_degree_column: get_env(
                    "DATASET_INJURY_DEGREE_COLUMN",
                    Some("degree_of_injury"),
                    false,
                )?,
                body_part_column: get_env("DATASET_BODY_PART_COLUMN", Some("part_of_body"), false)?,
            },
            inference: InferenceConfig {
                api_key: env::var("GROQ_API_KEY")
                    .ok()
                    .filter(|key| !key.is_empty())
                    .map(Secret::new),
                model: get_env("GROQ_MODEL", Some(DEFAULT_MODEL), false)?,
                base_url: get_env("GROQ_BASE_URL", Some(DEFAULT_GROQ_BASE_URL), false)?,
            },
        })
    }
}

/// An empty token would let an empty `api_token` header through the gate.
fn api_token_from(value: String) -> Result<Secret<String>, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "API_TOKEN must not be empty"
        )));
    }
    Ok(Secret::new(value))
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
