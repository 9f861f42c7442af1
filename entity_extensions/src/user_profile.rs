use crate::errors::EntityExtensionError;
use entities::user_profile;
use sea_orm::*;

/// Every new profile starts with this many generation credits.
pub const DEFAULT_CREDITS: i32 = 3;
pub const DEFAULT_TIER: &str = "free";

pub trait UserProfileExtensions {
  async fn get_or_create(
    user_id: &str,
    database_connection: &DatabaseConnection,
  ) -> Result<user_profile::Model, EntityExtensionError>;
}

impl UserProfileExtensions for user_profile::Model {
  /// Retrieves the profile for the given user if it exists.
  /// Otherwise creates one with the default credits and tier.
  ///
  /// A lookup miss is the `None` branch of the find, not an error.
  async fn get_or_create(
    user_id: &str,
    database_connection: &DatabaseConnection,
  ) -> Result<user_profile::Model, EntityExtensionError> {
    let existing_profile = user_profile::Entity::find()
      .filter(user_profile::Column::UserId.eq(user_id))
      .one(database_connection)
      .await?;

    if let Some(profile_model) = existing_profile {
      return Ok(profile_model);
    }

    let new_profile = user_profile::ActiveModel {
      user_id: ActiveValue::Set(user_id.to_owned()),
      credits: ActiveValue::Set(DEFAULT_CREDITS),
      tier: ActiveValue::Set(DEFAULT_TIER.to_owned()),
      ..Default::default()
    };

    attempt_insert(new_profile, user_id, database_connection).await
  }
}

/// Attempts to insert the profile.
///
/// If there is a unique constraint violation, a concurrent first request for
/// the same user already created the row, so it is fetched and returned.
async fn attempt_insert(
  new_profile: user_profile::ActiveModel,
  user_id: &str,
  database_connection: &DatabaseConnection,
) -> Result<user_profile::Model, EntityExtensionError> {
  let result = new_profile.insert(database_connection).await;

  if let Err(error) = &result {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = error.sql_err() {
      let profile_model_result = user_profile::Entity::find()
        .filter(user_profile::Column::UserId.eq(user_id))
        .one(database_connection)
        .await?;

      if let Some(profile_model) = profile_model_result {
        return Ok(profile_model);
      } else {
        return Err(EntityExtensionError::FailedToQuery {
          value_name: "user profile",
          location: "attempt insert",
          value: user_id.to_owned(),
        });
      }
    }
  }

  result.map_err(Into::into)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn profile_model_template() -> user_profile::Model {
    user_profile::Model {
      id: 1,
      user_id: "u1".to_string(),
      credits: DEFAULT_CREDITS,
      tier: DEFAULT_TIER.to_string(),
    }
  }

  #[tokio::test]
  async fn get_or_create_returns_an_existing_profile_without_inserting() {
    let mock_database = MockDatabase::new(DatabaseBackend::MySql)
      .append_query_results([vec![profile_model_template()]])
      .into_connection();

    let profile_model = user_profile::Model::get_or_create("u1", &mock_database)
      .await
      .unwrap();

    assert_eq!(profile_model, profile_model_template());
  }

  #[tokio::test]
  async fn get_or_create_inserts_the_default_profile_on_a_miss() {
    let mock_database = MockDatabase::new(DatabaseBackend::MySql)
      .append_query_results([Vec::<user_profile::Model>::new()])
      .append_exec_results([MockExecResult {
        last_insert_id: 1,
        rows_affected: 1,
      }])
      .append_query_results([vec![profile_model_template()]])
      .into_connection();

    let profile_model = user_profile::Model::get_or_create("u1", &mock_database)
      .await
      .unwrap();

    assert_eq!(profile_model.credits, DEFAULT_CREDITS);
    assert_eq!(profile_model.tier, DEFAULT_TIER);
  }
}
