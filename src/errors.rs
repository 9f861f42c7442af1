use crate::generation::errors::GenerationClientError;
use axum::http::StatusCode;
use entity_extensions::errors::EntityExtensionError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("Prompt is required.")]
  MissingPrompt,

  #[error("User ID is required.")]
  MissingUserId,

  #[error("Emoji ID is required.")]
  MissingEmojiId,

  #[error("Prediction ID is required.")]
  MissingPredictionId,

  #[error("The generation job ended in a failed state. Reason: {:?}", detail)]
  GenerationFailed { detail: String },

  #[error("The generation job succeeded but produced no output.")]
  GenerationProducedNoOutput,

  #[error("{}", .0)]
  GenerationClientError(#[from] GenerationClientError),

  #[error("{}", .0)]
  EntityExtensionError(#[from] EntityExtensionError),
}

impl axum::response::IntoResponse for AppError {
  fn into_response(self) -> axum::response::Response {
    let message = self.to_string();
    let status = StatusCode::from(self);

    tracing::error!("An error occurred: `{}`", message);

    (status, axum::Json(message)).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(error: AppError) -> StatusCode {
    match error {
      AppError::MissingPrompt => StatusCode::BAD_REQUEST,
      AppError::MissingUserId => StatusCode::BAD_REQUEST,
      AppError::MissingEmojiId => StatusCode::BAD_REQUEST,
      AppError::MissingPredictionId => StatusCode::BAD_REQUEST,
      AppError::GenerationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::GenerationProducedNoOutput => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::GenerationClientError(_) => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::EntityExtensionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}
