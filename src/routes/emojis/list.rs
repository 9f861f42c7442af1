use crate::app::AppState;
use crate::data_transfer_objects::emoji::EmojiDto;
use crate::errors::*;
use axum::extract::{Query, State};
use entities::emoji;
use entity_extensions::prelude::EmojiExtensions;

#[derive(Debug, serde::Deserialize)]
pub struct EmojiListQuery {
  user_id: Option<String>,
}

/// Returns every emoji newest first. Without a `user_id` the like annotations
/// are all false.
#[axum::debug_handler]
pub async fn get_emojis(
  Query(query_payload): Query<EmojiListQuery>,
  State(app_state): State<AppState>,
) -> Result<axum::Json<Vec<EmojiDto>>, AppError> {
  tracing::info!("Got an emoji list request: {query_payload:?}");

  let user_id = query_payload.user_id.unwrap_or_default();

  let annotated_emojis =
    emoji::Model::list_all_with_like_state(&user_id, app_state.database_connection()).await?;

  let emoji_dtos = annotated_emojis.into_iter().map(EmojiDto::from).collect();

  Ok(axum::Json(emoji_dtos))
}
