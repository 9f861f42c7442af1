use crate::app::AppState;
use crate::data_transfer_objects::like_toggle::LikeToggleDto;
use crate::errors::*;
use axum::extract::State;
use entities::emoji;
use entity_extensions::prelude::EmojiExtensions;

#[derive(Debug, serde::Deserialize)]
pub struct ToggleLikePayload {
  #[serde(rename = "emojiId")]
  emoji_id: Option<i32>,

  #[serde(rename = "userId")]
  user_id: Option<String>,
}

#[axum::debug_handler]
pub async fn toggle_like(
  State(app_state): State<AppState>,
  axum::Json(request_payload): axum::Json<ToggleLikePayload>,
) -> Result<axum::Json<LikeToggleDto>, AppError> {
  tracing::info!("Got a like toggle request: {request_payload:?}");

  let Some(emoji_id) = request_payload.emoji_id else {
    return Err(AppError::MissingEmojiId);
  };
  let Some(user_id) = request_payload.user_id.filter(|user_id| !user_id.is_empty()) else {
    return Err(AppError::MissingUserId);
  };

  let toggle_result =
    emoji::Model::toggle_like(emoji_id, &user_id, app_state.database_connection()).await?;

  Ok(axum::Json(LikeToggleDto::from(toggle_result)))
}
