use std::fmt;
use std::str::FromStr;

#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LoggingConfigLevel {
  Error,
  Warn,
  #[default]
  Info,
  Debug,
  Trace,
}

/// Renders as an [`EnvFilter`](tracing_subscriber::EnvFilter) directive.
impl fmt::Display for LoggingConfigLevel {
  fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    let directive = match self {
      LoggingConfigLevel::Error => "error",
      LoggingConfigLevel::Warn => "warn",
      LoggingConfigLevel::Info => "info",
      LoggingConfigLevel::Debug => "debug",
      LoggingConfigLevel::Trace => "trace",
    };

    formatter.write_str(directive)
  }
}

impl<S> From<S> for LoggingConfigLevel
where
  S: AsRef<str>,
{
  fn from(log_value: S) -> Self {
    match log_value.as_ref().to_lowercase().trim() {
      "error" => LoggingConfigLevel::Error,
      "warn" => LoggingConfigLevel::Warn,
      "debug" => LoggingConfigLevel::Debug,
      "trace" => LoggingConfigLevel::Trace,
      _ => LoggingConfigLevel::Info,
    }
  }
}

impl FromStr for LoggingConfigLevel {
  type Err = Box<dyn std::error::Error>;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::from(s))
  }
}
