use crate::app::AppState;
use crate::errors::AppError;
use crate::generation::prediction::PredictionStatus;
use app_config::AppConfig;
use entities::emoji;
use entity_extensions::prelude::EmojiExtensions;
use std::time::Duration;

/// Runs one generation request end to end: submit the prompt, wait for the
/// provider to finish, store the image, record the emoji.
///
/// There is no built-in retry. A transient failure anywhere in the pipeline
/// surfaces to the caller, who can resubmit.
pub async fn generate_emoji(
  prompt: &str,
  user_id: &str,
  app_state: &AppState,
) -> Result<emoji::Model, AppError> {
  let prompt = prompt.trim();

  if prompt.is_empty() {
    return Err(AppError::MissingPrompt);
  }

  if user_id.is_empty() {
    return Err(AppError::MissingUserId);
  }

  let generation_client = app_state.generation_client();
  let submitted_prediction = generation_client.submit(prompt).await?;

  tracing::info!(
    "Submitted prediction {} for user {}.",
    submitted_prediction.id,
    user_id
  );

  let finished_prediction = generation_client
    .await_completion(
      &submitted_prediction.id,
      AppConfig::generation_poll_attempts(),
      Duration::from_millis(AppConfig::generation_poll_interval_ms()),
    )
    .await?;

  if finished_prediction.status != PredictionStatus::Succeeded {
    return Err(AppError::GenerationFailed {
      detail: finished_prediction
        .error
        .unwrap_or_else(|| format!("{:?}", finished_prediction.status)),
    });
  }

  let Some(output_url) = finished_prediction.first_output_url() else {
    return Err(AppError::GenerationProducedNoOutput);
  };

  let emoji_model = emoji::Model::persist_generated_image(
    output_url,
    user_id,
    prompt,
    app_state.storage_client(),
    app_state.database_connection(),
  )
  .await?;

  tracing::info!(
    "Stored emoji {} from prediction {}.",
    emoji_model.id,
    finished_prediction.id
  );

  Ok(emoji_model)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generation::client::GenerationClient;
  use app_config::secret_string::Secret;
  use entity_extensions::prelude::EmojiStorageClient;
  use sea_orm::{DatabaseBackend, MockDatabase};

  fn test_app_state() -> AppState {
    let generation_client = GenerationClient::new(
      Secret::from("r8_test"),
      "test-version".to_string(),
      "https://api.replicate.test".to_string(),
    );
    let storage_client = EmojiStorageClient::new(
      "https://storage.test".to_string(),
      Secret::from("service-key"),
      "emojis".to_string(),
    );
    let mock_database = MockDatabase::new(DatabaseBackend::MySql).into_connection();

    AppState::with_clients(mock_database, generation_client, storage_client)
  }

  #[tokio::test]
  async fn an_empty_prompt_is_rejected_before_any_remote_call() {
    let generation_result = generate_emoji("   ", "u1", &test_app_state()).await;

    assert!(matches!(generation_result, Err(AppError::MissingPrompt)));
  }

  #[tokio::test]
  async fn a_missing_user_id_is_rejected_before_any_remote_call() {
    let generation_result = generate_emoji("a happy cat", "", &test_app_state()).await;

    assert!(matches!(generation_result, Err(AppError::MissingUserId)));
  }
}
