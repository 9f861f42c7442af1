use app_config::{AppConfig, CLAP_ARGS};
use axum::Router;
use emoji_maker_backend::app::AppState;
use emoji_maker_backend::routes::route_builder::RouteBuilder;
use http::{header::CONTENT_TYPE, Method};
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
  emoji_maker_backend::logging::setup_logging_config().unwrap();

  let database_connection = database_connection::connect().await.unwrap();

  let app_state = match AppState::from_app_config(database_connection) {
    Ok(app_state) => app_state,
    Err(error) => {
      tracing::error!("The server is misconfigured: {}. Exiting the program.", error);

      std::process::exit(1);
    }
  };

  let port = CLAP_ARGS.port().unwrap_or_else(AppConfig::port);
  let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
    .await
    .unwrap();

  let cors = CorsLayer::new()
    .allow_methods([Method::GET, Method::POST])
    .allow_origin(Any)
    .allow_headers([CONTENT_TYPE]);

  tracing::info!("listening on {}", listener.local_addr().unwrap());

  let app = Router::new()
    .apply_routes()
    .with_state(app_state)
    .layer(cors);

  axum::serve(listener, app).await.unwrap()
}
