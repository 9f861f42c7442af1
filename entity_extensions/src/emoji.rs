use crate::errors::EntityExtensionError;
use crate::storage::EmojiStorageClient;
use entities::{emoji, emoji_like};
use sea_orm::*;
use std::collections::HashSet;
use uuid::Uuid;

const GENERATED_IMAGE_EXTENSION: &str = "png";

/// The outcome of flipping a user's like state on one emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
  pub like_count: i32,
  pub is_liked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiWithLikeState {
  pub emoji: emoji::Model,
  pub is_liked: bool,
}

pub trait EmojiExtensions {
  /// Downloads the generated image, uploads it into object storage under a
  /// fresh file name, and inserts the emoji record referencing the stored
  /// copy.
  async fn persist_generated_image(
    source_url: &str,
    creator_user_id: &str,
    prompt: &str,
    storage_client: &EmojiStorageClient,
    database_connection: &DatabaseConnection,
  ) -> Result<emoji::Model, EntityExtensionError>;

  /// Returns every emoji newest first, each annotated with whether the given
  /// user currently likes it.
  async fn list_all_with_like_state(
    user_id: &str,
    database_connection: &DatabaseConnection,
  ) -> Result<Vec<EmojiWithLikeState>, EntityExtensionError>;

  /// Flips the like relation for (emoji, user) and rewrites the denormalized
  /// like counter from the relation table.
  async fn toggle_like(
    emoji_id: i32,
    user_id: &str,
    database_connection: &DatabaseConnection,
  ) -> Result<LikeToggle, EntityExtensionError>;
}

impl EmojiExtensions for emoji::Model {
  async fn persist_generated_image(
    source_url: &str,
    creator_user_id: &str,
    prompt: &str,
    storage_client: &EmojiStorageClient,
    database_connection: &DatabaseConnection,
  ) -> Result<emoji::Model, EntityExtensionError> {
    let response = reqwest::get(source_url).await?;

    if !response.status().is_success() {
      return Err(EntityExtensionError::ImageDownloadFailed {
        source_url: source_url.to_owned(),
        code: response.status().as_u16(),
      });
    }

    let image_bytes = response.bytes().await?;
    let file_name = generated_file_name();

    let public_url = storage_client
      .upload(&file_name, image_bytes.to_vec())
      .await?;

    let new_emoji = emoji::ActiveModel {
      image_url: ActiveValue::Set(public_url),
      prompt: ActiveValue::Set(prompt.to_owned()),
      creator_user_id: ActiveValue::Set(creator_user_id.to_owned()),
      like_count: ActiveValue::Set(0),
      created_at: ActiveValue::Set(chrono::Utc::now()),
      ..Default::default()
    };

    // The blob is already uploaded at this point. A failed insert leaves it
    // orphaned in storage, which the error names rather than hiding.
    new_emoji
      .insert(database_connection)
      .await
      .map_err(|error| EntityExtensionError::RecordInsertAfterUpload {
        file_name,
        source: error,
      })
  }

  async fn list_all_with_like_state(
    user_id: &str,
    database_connection: &DatabaseConnection,
  ) -> Result<Vec<EmojiWithLikeState>, EntityExtensionError> {
    let all_emojis = emoji::Entity::find()
      .order_by_desc(emoji::Column::CreatedAt)
      .all(database_connection)
      .await?;

    let liked_emoji_ids: HashSet<i32> = emoji_like::Entity::find()
      .filter(emoji_like::Column::UserId.eq(user_id))
      .all(database_connection)
      .await?
      .into_iter()
      .map(|like_model| like_model.emoji_id)
      .collect();

    let annotated_emojis = all_emojis
      .into_iter()
      .map(|emoji_model| EmojiWithLikeState {
        is_liked: liked_emoji_ids.contains(&emoji_model.id),
        emoji: emoji_model,
      })
      .collect();

    Ok(annotated_emojis)
  }

  async fn toggle_like(
    emoji_id: i32,
    user_id: &str,
    database_connection: &DatabaseConnection,
  ) -> Result<LikeToggle, EntityExtensionError> {
    let existing_like = emoji_like::Entity::find()
      .filter(emoji_like::Column::EmojiId.eq(emoji_id))
      .filter(emoji_like::Column::UserId.eq(user_id))
      .one(database_connection)
      .await?;

    let is_liked = match existing_like {
      Some(like_model) => {
        like_model.delete(database_connection).await?;

        false
      }
      None => {
        let new_like = emoji_like::ActiveModel {
          emoji_id: ActiveValue::Set(emoji_id),
          user_id: ActiveValue::Set(user_id.to_owned()),
          ..Default::default()
        };

        attempt_like_insert(new_like, emoji_id, database_connection).await?;

        true
      }
    };

    let like_count = emoji_like::Entity::find()
      .filter(emoji_like::Column::EmojiId.eq(emoji_id))
      .count(database_connection)
      .await? as i32;

    let emoji_model = emoji::Entity::find_by_id(emoji_id)
      .one(database_connection)
      .await?;
    let Some(emoji_model) = emoji_model else {
      return Err(EntityExtensionError::FailedToQuery {
        value_name: "emoji",
        location: "toggle like",
        value: emoji_id.to_string(),
      });
    };

    let mut updated_emoji = emoji_model.into_active_model();
    updated_emoji.like_count = ActiveValue::Set(like_count);

    updated_emoji.update(database_connection).await?;

    Ok(LikeToggle {
      like_count,
      is_liked,
    })
  }
}

/// Attempts to insert the like relation.
///
/// A unique constraint violation means a concurrent toggle for the same pair
/// already inserted the row. The store is authoritative, so that counts as
/// liked.
async fn attempt_like_insert(
  new_like: emoji_like::ActiveModel,
  emoji_id: i32,
  database_connection: &DatabaseConnection,
) -> Result<(), EntityExtensionError> {
  if let Err(error) = new_like.insert(database_connection).await {
    if !matches!(error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
      return Err(error.into());
    }

    tracing::warn!(
      "A like for emoji {} was already recorded by a concurrent request.",
      emoji_id
    );
  }

  Ok(())
}

fn generated_file_name() -> String {
  format!("{}.{}", Uuid::new_v4(), GENERATED_IMAGE_EXTENSION)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{TimeZone, Utc};
  use std::collections::BTreeMap;

  fn emoji_model_template(id: i32, like_count: i32) -> emoji::Model {
    emoji::Model {
      id,
      image_url: format!("https://storage.test/emojis/{id}.png"),
      prompt: "a happy cat".to_string(),
      creator_user_id: "u1".to_string(),
      like_count,
      created_at: Utc.with_ymd_and_hms(2026, 8, 1, 10, 15, 0).unwrap(),
    }
  }

  fn relation_count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::Int(Some(count as i32)))])
  }

  #[tokio::test]
  async fn toggle_like_records_a_new_like_and_recounts() {
    let mock_database = MockDatabase::new(DatabaseBackend::MySql)
      .append_query_results([Vec::<emoji_like::Model>::new()])
      .append_exec_results([MockExecResult {
        last_insert_id: 7,
        rows_affected: 1,
      }])
      .append_query_results([vec![emoji_like::Model {
        id: 7,
        emoji_id: 1,
        user_id: "u1".to_string(),
      }]])
      .append_query_results([vec![relation_count_row(1)]])
      .append_query_results([vec![emoji_model_template(1, 0)]])
      .append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
      }])
      .append_query_results([vec![emoji_model_template(1, 1)]])
      .into_connection();

    let toggle_result = emoji::Model::toggle_like(1, "u1", &mock_database)
      .await
      .unwrap();

    assert_eq!(
      toggle_result,
      LikeToggle {
        like_count: 1,
        is_liked: true
      }
    );
  }

  #[tokio::test]
  async fn toggle_like_removes_an_existing_like_and_recounts() {
    let mock_database = MockDatabase::new(DatabaseBackend::MySql)
      .append_query_results([vec![emoji_like::Model {
        id: 7,
        emoji_id: 1,
        user_id: "u1".to_string(),
      }]])
      .append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
      }])
      .append_query_results([vec![relation_count_row(0)]])
      .append_query_results([vec![emoji_model_template(1, 1)]])
      .append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
      }])
      .append_query_results([vec![emoji_model_template(1, 0)]])
      .into_connection();

    let toggle_result = emoji::Model::toggle_like(1, "u1", &mock_database)
      .await
      .unwrap();

    assert_eq!(
      toggle_result,
      LikeToggle {
        like_count: 0,
        is_liked: false
      }
    );
  }

  #[tokio::test]
  async fn list_all_with_like_state_annotates_only_the_callers_likes() {
    let newest_emoji = emoji::Model {
      created_at: Utc.with_ymd_and_hms(2026, 8, 2, 9, 0, 0).unwrap(),
      ..emoji_model_template(2, 3)
    };
    let oldest_emoji = emoji_model_template(1, 1);

    let mock_database = MockDatabase::new(DatabaseBackend::MySql)
      .append_query_results([vec![newest_emoji.clone(), oldest_emoji.clone()]])
      .append_query_results([vec![emoji_like::Model {
        id: 4,
        emoji_id: 2,
        user_id: "u1".to_string(),
      }]])
      .into_connection();

    let annotated_emojis = emoji::Model::list_all_with_like_state("u1", &mock_database)
      .await
      .unwrap();

    assert_eq!(
      annotated_emojis,
      vec![
        EmojiWithLikeState {
          emoji: newest_emoji,
          is_liked: true
        },
        EmojiWithLikeState {
          emoji: oldest_emoji,
          is_liked: false
        },
      ]
    );
  }

  #[test]
  fn generated_file_names_are_unique_png_files() {
    let first_file_name = generated_file_name();
    let second_file_name = generated_file_name();

    assert!(first_file_name.ends_with(".png"));
    assert_ne!(first_file_name, second_file_name);
  }
}
