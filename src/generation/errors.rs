#[derive(Debug, thiserror::Error)]
pub enum GenerationClientError {
  #[error("{}", .0)]
  ReqwestError(#[from] reqwest::Error),

  #[error("No generation API token is configured.")]
  MissingApiToken,

  #[error("Received a failed response from {}. Code: {}", location, code)]
  FailedResponse { location: &'static str, code: u16 },

  #[error(
    "Prediction {} did not reach a terminal state after {} polls.",
    prediction_id,
    attempts
  )]
  PredictionTimedOut {
    prediction_id: String,
    attempts: usize,
  },
}
