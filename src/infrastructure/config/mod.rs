use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // External voice toolkit
    pub toolkit_bin: String,
    pub en_checkpoint_dir: PathBuf,
    pub zh_checkpoint_dir: PathBuf,
    pub converter_dir: PathBuf,
    // Reference audio used when the request carries none
    pub default_ref_audio: PathBuf,
    // Per-request scratch directories are created under this directory
    pub work_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "10060".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            toolkit_bin: env::var("TOOLKIT_BIN").unwrap_or_else(|_| "voice-toolkit".to_string()),
            en_checkpoint_dir: env::var("EN_CHECKPOINT_DIR")
                .unwrap_or_else(|_| "checkpoints/base_speakers/EN".to_string())
                .into(),
            zh_checkpoint_dir: env::var("ZH_CHECKPOINT_DIR")
                .unwrap_or_else(|_| "checkpoints/base_speakers/ZH".to_string())
                .into(),
            converter_dir: env::var("CONVERTER_DIR")
                .unwrap_or_else(|_| "checkpoints/converter".to_string())
                .into(),
            default_ref_audio: env::var("DEFAULT_REF_AUDIO")
                .unwrap_or_else(|_| "resources/jp2.mp3".to_string())
                .into(),
            work_dir: env::var("WORK_DIR")
                .unwrap_or_else(|_| "outputs".to_string())
                .into(),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
