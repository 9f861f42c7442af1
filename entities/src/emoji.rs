use sea_orm::entity::prelude::*;

#[derive(
  Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize, serde::Deserialize,
)]
#[sea_orm(table_name = "emoji")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub image_url: String,
  pub prompt: String,
  pub creator_user_id: String,
  pub like_count: i32,
  pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::emoji_like::Entity")]
  EmojiLike,
}

impl Related<super::emoji_like::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::EmojiLike.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
