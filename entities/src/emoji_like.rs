use sea_orm::entity::prelude::*;

/// Row existence is the "liked" signal. At most one row exists per
/// (emoji_id, user_id) pair, enforced by a unique key in the database.
#[derive(
  Clone, Debug, PartialEq, Eq, DeriveEntityModel, serde::Serialize, serde::Deserialize,
)]
#[sea_orm(table_name = "emoji_like")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i32,
  pub emoji_id: i32,
  pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::emoji::Entity",
    from = "Column::EmojiId",
    to = "super::emoji::Column::Id",
    on_delete = "Cascade"
  )]
  Emoji,
}

impl Related<super::emoji::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Emoji.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
