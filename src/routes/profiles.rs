use crate::app::AppState;
use crate::data_transfer_objects::user_profile::UserProfileDto;
use crate::errors::*;
use axum::extract::{Query, State};
use entities::user_profile;
use entity_extensions::prelude::UserProfileExtensions;

#[derive(Debug, serde::Deserialize)]
pub struct ProfileQuery {
  user_id: Option<String>,
}

/// Looks up the caller's profile, creating it with the default credits and
/// tier on first encounter.
#[axum::debug_handler]
pub async fn get_or_create_profile(
  Query(query_payload): Query<ProfileQuery>,
  State(app_state): State<AppState>,
) -> Result<axum::Json<UserProfileDto>, AppError> {
  tracing::info!("Got a profile request: {query_payload:?}");

  let Some(user_id) = query_payload.user_id.filter(|user_id| !user_id.is_empty()) else {
    return Err(AppError::MissingUserId);
  };

  let profile_model =
    user_profile::Model::get_or_create(&user_id, app_state.database_connection()).await?;

  Ok(axum::Json(UserProfileDto::from(profile_model)))
}
