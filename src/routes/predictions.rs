use crate::app::AppState;
use crate::errors::*;
use crate::generation::prediction::Prediction;
use axum::extract::{Query, State};

#[derive(Debug, serde::Deserialize)]
pub struct PredictionQuery {
  id: Option<String>,
}

/// Passes the provider's view of a prediction through to the caller, so the
/// web client can show progress for jobs it is tracking itself.
#[axum::debug_handler]
pub async fn check_prediction(
  Query(query_payload): Query<PredictionQuery>,
  State(app_state): State<AppState>,
) -> Result<axum::Json<Prediction>, AppError> {
  tracing::info!("Got a prediction status request: {query_payload:?}");

  let Some(prediction_id) = query_payload.id.filter(|id| !id.is_empty()) else {
    return Err(AppError::MissingPredictionId);
  };

  let prediction = app_state.generation_client().poll(&prediction_id).await?;

  Ok(axum::Json(prediction))
}
