use crate::app::AppState;
use crate::data_transfer_objects::emoji::EmojiDto;
use crate::errors::*;
use crate::generation::workflow;
use axum::extract::State;

#[derive(Debug, serde::Deserialize)]
pub struct GenerateEmojiPayload {
  prompt: Option<String>,

  #[serde(rename = "userId")]
  user_id: Option<String>,
}

#[axum::debug_handler]
pub async fn generate_emoji(
  State(app_state): State<AppState>,
  axum::Json(request_payload): axum::Json<GenerateEmojiPayload>,
) -> Result<axum::Json<EmojiDto>, AppError> {
  tracing::info!("Got an emoji generation request: {request_payload:?}");

  let prompt = request_payload.prompt.unwrap_or_default();
  let user_id = request_payload.user_id.unwrap_or_default();

  let emoji_model = workflow::generate_emoji(&prompt, &user_id, &app_state).await?;

  Ok(axum::Json(EmojiDto::from_new_emoji(emoji_model)))
}
