use crate::log_level_wrapper::*;
use crate::rolling_appender_rotation::*;
use crate::secret_string::Secret;
use lazy_static::lazy_static;
use schematic::{Config, ConfigLoader};
use std::path::PathBuf;

const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";
const DEFAULT_CONFIG_FILEPATH: &str = "./config/config.yml";

lazy_static! {
  pub static ref APP_CONFIG: AppConfig = AppConfig::new().unwrap();
}

#[derive(Debug, Config, serde::Serialize, serde::Deserialize)]
pub struct AppConfig {
  log_level: Option<LoggingConfigLevel>,
  logging_dir: Option<PathBuf>,
  #[setting(default = "")]
  logging_filename_prefix: String,
  #[setting(default = "daily")]
  logging_roll_appender: RollingAppenderRotation,

  #[setting(env = "REPLICATE_API_TOKEN")]
  replicate_api_token: Option<Secret>,

  /// The model version published for TOK-style emoji generation.
  #[setting(default = "dee76b5afde21b0f01ed7925f0665b7e879c50ee718c5f78a9d38e04d523cc5e")]
  generation_model_version: String,
  #[setting(default = "https://api.replicate.com")]
  generation_api_url: String,

  /// The prediction API only exposes poll-based status. 30 attempts at
  /// 2000ms gives the generation roughly a minute to finish.
  #[setting(default = 30)]
  generation_poll_attempts: usize,
  #[setting(default = 2000)]
  generation_poll_interval_ms: u64,

  #[setting(env = "STORAGE_URL")]
  storage_url: Option<String>,
  #[setting(env = "STORAGE_SERVICE_ROLE_KEY")]
  storage_service_key: Option<Secret>,
  #[setting(default = "emojis")]
  storage_bucket: String,

  #[setting(default = "root", env = "DATABASE_USERNAME")]
  database_username: String,
  #[setting(default = "localhost:3306")]
  database_host_address: String,
  #[setting(default = "emoji_maker_db")]
  database: String,

  /// We're not dealing with sensitive data here. So configuring a default is fine.
  #[setting(default = "password", env = "DATABASE_PASSWORD")]
  sql_user_password: Secret,

  #[setting(default = 8080)]
  port: u16,
}

impl AppConfig {
  fn new() -> anyhow::Result<Self> {
    let config = ConfigLoader::<AppConfig>::new()
      .file_optional(get_config_path())
      .unwrap()
      .load()?
      .config;

    Ok(config)
  }

  pub fn log_level() -> Option<&'static LoggingConfigLevel> {
    APP_CONFIG.log_level.as_ref()
  }

  pub fn logging_dir() -> Option<&'static PathBuf> {
    APP_CONFIG.logging_dir.as_ref()
  }

  pub fn logging_filename_prefix() -> &'static str {
    &APP_CONFIG.logging_filename_prefix
  }

  pub fn logging_file_roll_appender() -> &'static RollingAppenderRotation {
    &APP_CONFIG.logging_roll_appender
  }

  pub fn replicate_api_token() -> Option<&'static Secret> {
    APP_CONFIG.replicate_api_token.as_ref()
  }

  pub fn generation_model_version() -> &'static str {
    &APP_CONFIG.generation_model_version
  }

  pub fn generation_api_url() -> &'static str {
    &APP_CONFIG.generation_api_url
  }

  pub fn generation_poll_attempts() -> usize {
    APP_CONFIG.generation_poll_attempts
  }

  pub fn generation_poll_interval_ms() -> u64 {
    APP_CONFIG.generation_poll_interval_ms
  }

  pub fn storage_url() -> Option<&'static str> {
    APP_CONFIG.storage_url.as_deref()
  }

  pub fn storage_service_key() -> Option<&'static Secret> {
    APP_CONFIG.storage_service_key.as_ref()
  }

  pub fn storage_bucket() -> &'static str {
    &APP_CONFIG.storage_bucket
  }

  pub fn database_username() -> &'static str {
    &APP_CONFIG.database_username
  }

  pub fn database_address() -> &'static str {
    &APP_CONFIG.database_host_address
  }

  pub fn database() -> &'static str {
    &APP_CONFIG.database
  }

  pub fn sql_user_password() -> &'static Secret {
    &APP_CONFIG.sql_user_password
  }

  pub fn port() -> u16 {
    APP_CONFIG.port
  }
}

fn get_config_path() -> PathBuf {
  let Some((_, config_path)) = std::env::vars().find(|(key, _)| key == CONFIG_PATH_ENV_VAR) else {
    return PathBuf::from(DEFAULT_CONFIG_FILEPATH);
  };

  PathBuf::from(config_path)
}
