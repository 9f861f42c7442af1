use crate::app::AppState;
use axum::routing::{get, post};

pub trait RouteBuilder {
  fn apply_routes(self) -> Self;
}

impl RouteBuilder for axum::Router<AppState> {
  fn apply_routes(self) -> Self {
    self
      .route("/emojis", get(crate::routes::emojis::list::get_emojis))
      .route(
        "/emojis/generate",
        post(crate::routes::emojis::generate::generate_emoji),
      )
      .route(
        "/emojis/toggle-like",
        post(crate::routes::emojis::toggle_like::toggle_like),
      )
      .route(
        "/predictions",
        get(crate::routes::predictions::check_prediction),
      )
      .route(
        "/profiles",
        get(crate::routes::profiles::get_or_create_profile),
      )
  }
}
