use entity_extensions::prelude::LikeToggle;

#[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LikeToggleDto {
  #[serde(rename = "likeCount")]
  pub like_count: i32,

  #[serde(rename = "isLiked")]
  pub is_liked: bool,
}

impl From<LikeToggle> for LikeToggleDto {
  fn from(toggle_result: LikeToggle) -> Self {
    Self {
      like_count: toggle_result.like_count,
      is_liked: toggle_result.is_liked,
    }
  }
}
