use entities::emoji;
use entity_extensions::prelude::EmojiWithLikeState;

#[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmojiDto {
  pub id: i32,

  #[serde(rename = "url")]
  pub image_url: String,

  pub prompt: String,

  #[serde(rename = "likes")]
  pub like_count: i32,

  #[serde(rename = "isLiked")]
  pub is_liked: bool,
}

impl EmojiDto {
  /// A freshly generated emoji has no likes yet, including from its creator.
  pub fn from_new_emoji(emoji_model: emoji::Model) -> Self {
    Self {
      id: emoji_model.id,
      image_url: emoji_model.image_url,
      prompt: emoji_model.prompt,
      like_count: emoji_model.like_count,
      is_liked: false,
    }
  }
}

impl From<EmojiWithLikeState> for EmojiDto {
  fn from(annotated_emoji: EmojiWithLikeState) -> Self {
    Self {
      id: annotated_emoji.emoji.id,
      image_url: annotated_emoji.emoji.image_url,
      prompt: annotated_emoji.emoji.prompt,
      like_count: annotated_emoji.emoji.like_count,
      is_liked: annotated_emoji.is_liked,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn emoji_dto_serializes_with_the_web_client_field_names() {
    let emoji_dto = EmojiDto {
      id: 1,
      image_url: "https://storage.test/emojis/cat.png".to_string(),
      prompt: "a happy cat".to_string(),
      like_count: 0,
      is_liked: false,
    };

    let serialized = serde_json::to_value(&emoji_dto).unwrap();

    assert_eq!(
      serialized,
      serde_json::json!({
        "id": 1,
        "url": "https://storage.test/emojis/cat.png",
        "prompt": "a happy cat",
        "likes": 0,
        "isLiked": false,
      })
    );
  }
}
