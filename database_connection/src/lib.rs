use anyhow::anyhow;
use app_config::secret_string::Secret;
use app_config::AppConfig;
use migration::{Migrator, MigratorTrait, SchemaManager};
pub use sea_orm::DatabaseConnection;
use sea_orm::*;

/// Connects to the configured database, creating it and running migrations
/// when needed.
///
/// The connection is handed back for the caller to inject into whatever needs
/// it, rather than being cached in a process-wide static.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
  let bootstrap_connection = Database::connect(database_connection_string(None)).await?;

  match bootstrap_connection.get_database_backend() {
    DbBackend::MySql => {
      bootstrap_connection
        .execute(Statement::from_string(
          DbBackend::MySql,
          format!("CREATE DATABASE IF NOT EXISTS `{}`;", AppConfig::database()),
        ))
        .await?;
    }
    _ => return Err(anyhow!("Unsupported database backend.")),
  }

  drop(bootstrap_connection);

  let database_connection =
    Database::connect(database_connection_string(Some(AppConfig::database()))).await?;

  run_migration(&database_connection).await?;

  Ok(database_connection)
}

fn database_connection_string(database_name: Option<&str>) -> String {
  let password = AppConfig::sql_user_password();
  let username = AppConfig::database_username();
  let address = AppConfig::database_address();
  let database = database_name.unwrap_or_default();

  format!(
    "mysql://{username}:{}@{address}/{database}",
    Secret::read_secret_string(password.read_value())
  )
}

async fn run_migration(database_connection: &DatabaseConnection) -> anyhow::Result<()> {
  let schema_manager = SchemaManager::new(database_connection);

  Migrator::up(database_connection, None).await?;

  let check_tables = ["emoji", "emoji_like", "user_profile"];

  for table_name in check_tables {
    if !schema_manager.has_table(table_name).await? {
      return Err(anyhow!(
        "Failed to migrate the database due to a missing table: `{:?}`",
        table_name
      ));
    }
  }

  Ok(())
}
