use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_PUBLIC_DIR: &str = "public";
/// Default request body limit for `/analyze` (20MB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct PartAnalysisConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub assets: AssetsConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
    /// Client timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub public_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

impl PartAnalysisConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the service settings from an arbitrary key lookup.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = lookup("GEMINI_API_KEY")
            .ok_or_else(|| AppError::config("GEMINI_API_KEY is not set in environment variables."))?;

        Ok(PartAnalysisConfig {
            common,
            gemini: GeminiSettings {
                api_key: Secret::new(api_key),
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                api_base: lookup("GEMINI_API_BASE")
                    .map(|base| base.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
                timeout: parse_env(&lookup, "GEMINI_TIMEOUT_SECS")?.map(Duration::from_secs),
            },
            assets: AssetsConfig {
                public_dir: lookup("PUBLIC_DIR")
                    .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string())
                    .into(),
            },
            upload: UploadConfig {
                max_bytes: parse_env(&lookup, "MAX_UPLOAD_BYTES")?
                    .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            },
        })
    }
}

fn parse_env<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::config(format!("{} has an invalid value '{}': {}", key, raw, e)))
        })
        .transpose()
}
