use std::path::PathBuf;
use std::time::Duration;

use crate::domain::WhisperModel;

use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub engine: EngineSettings,
    pub staging: StagingSettings,
    pub embeddings: EmbeddingsSettings,
    pub index: IndexSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub binary_path: PathBuf,
    pub model_dir: PathBuf,
    pub default_model: WhisperModel,
    pub diarize: bool,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct StagingSettings {
    pub dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct EmbeddingsSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct IndexSettings {
    pub host: String,
    pub api_key: String,
    pub top_k: usize,
}

impl Settings {
    /// Builds settings from environment variables, every knob having a
    /// fixed default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = parsed_var("SERVER_PORT", 3000u16)?;
        let default_model = match std::env::var("WHISPER_DEFAULT_MODEL") {
            Ok(raw) => raw.parse::<WhisperModel>().map_err(|e| SettingsError {
                name: "WHISPER_DEFAULT_MODEL",
                detail: e.to_string(),
            })?,
            Err(_) => WhisperModel::Small,
        };
        let timeout = match std::env::var("WHISPER_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.parse().map_err(|_| SettingsError {
                name: "WHISPER_TIMEOUT_SECS",
                detail: format!("not a number of seconds: {}", raw),
            })?)),
            Err(_) => None,
        };
        let environment = match std::env::var("APP_ENV") {
            Ok(raw) => raw.parse::<Environment>().map_err(|e| SettingsError {
                name: "APP_ENV",
                detail: e.to_string(),
            })?,
            Err(_) => Environment::default(),
        };

        Ok(Self {
            server: ServerSettings {
                host: string_var("SERVER_HOST", "0.0.0.0"),
                port,
            },
            engine: EngineSettings {
                binary_path: path_var("WHISPER_BIN", "./whisper.cpp/main"),
                model_dir: path_var("WHISPER_MODEL_DIR", "./whisper.cpp/models"),
                default_model,
                diarize: bool_var("WHISPER_DIARIZE"),
                timeout,
            },
            staging: StagingSettings {
                dir: std::env::var("STAGING_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| std::env::temp_dir().join("sussurro-uploads")),
            },
            embeddings: EmbeddingsSettings {
                api_key: string_var("COHERE_API_KEY", ""),
                model: string_var("COHERE_EMBED_MODEL", "embed-english-v3.0"),
            },
            index: IndexSettings {
                host: string_var("PINECONE_INDEX_HOST", ""),
                api_key: string_var("PINECONE_API_KEY", ""),
                top_k: parsed_var("MOVIES_TOP_K", 10usize)?,
            },
            environment,
        })
    }
}

fn string_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn path_var(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn bool_var(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn parsed_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, SettingsError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| SettingsError {
            name,
            detail: format!("could not parse: {}", raw),
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid {name}: {detail}")]
pub struct SettingsError {
    pub name: &'static str,
    pub detail: String,
}
