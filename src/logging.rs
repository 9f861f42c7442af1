use app_config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn setup_logging_config() -> Result<(), Box<dyn std::error::Error>> {
  let Some(log_level) = AppConfig::log_level() else {
    println!("Logging is disabled.");

    return Ok(());
  };

  let subscriber_builder = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::new(log_level.to_string()))
    .with_ansi(false);

  if let Some(logging_dir) = AppConfig::logging_dir() {
    println!("Logging to file");

    let filename_prefix = PathBuf::from(AppConfig::logging_filename_prefix());

    subscriber_builder
      .with_writer(
        AppConfig::logging_file_roll_appender().to_file_appender(logging_dir, &filename_prefix)?,
      )
      .init();
  } else {
    println!("Logging to stdout.");

    subscriber_builder.init();
  }

  Ok(())
}
