use crate::errors::AppError;
use crate::generation::client::GenerationClient;
use database_connection::DatabaseConnection;
use entity_extensions::storage::EmojiStorageClient;
use std::sync::Arc;

/// Everything the request handlers depend on, constructed once at startup and
/// cloned per request. The remote clients are injected here rather than
/// reached for through process-wide handles, so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
  database_connection: Arc<DatabaseConnection>,
  generation_client: GenerationClient,
  storage_client: EmojiStorageClient,
}

impl AppState {
  /// Builds the state around an established database connection, validating
  /// that the remote service credentials are present.
  pub fn from_app_config(database_connection: DatabaseConnection) -> Result<Self, AppError> {
    let generation_client = GenerationClient::from_app_config()?;
    let storage_client = EmojiStorageClient::from_app_config()?;

    Ok(Self::with_clients(
      database_connection,
      generation_client,
      storage_client,
    ))
  }

  pub fn with_clients(
    database_connection: DatabaseConnection,
    generation_client: GenerationClient,
    storage_client: EmojiStorageClient,
  ) -> Self {
    Self {
      database_connection: Arc::new(database_connection),
      generation_client,
      storage_client,
    }
  }

  pub fn database_connection(&self) -> &DatabaseConnection {
    &self.database_connection
  }

  pub fn generation_client(&self) -> &GenerationClient {
    &self.generation_client
  }

  pub fn storage_client(&self) -> &EmojiStorageClient {
    &self.storage_client
  }
}
