use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(EmojiLike::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(EmojiLike::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(EmojiLike::EmojiId).integer().not_null())
          .col(ColumnDef::new(EmojiLike::UserId).string().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk-emoji_like-emoji_id")
              .from(EmojiLike::Table, EmojiLike::EmojiId)
              .to(Emoji::Table, Emoji::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          // One like per user per emoji. Concurrent duplicate inserts are
          // rejected here rather than guarded in application code.
          .index(
            Index::create()
              .name("idx-emoji_like-emoji_id-user_id")
              .col(EmojiLike::EmojiId)
              .col(EmojiLike::UserId)
              .unique(),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(EmojiLike::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
enum EmojiLike {
  Table,
  Id,
  EmojiId,
  UserId,
}

#[derive(Iden)]
enum Emoji {
  Table,
  Id,
  _ImageUrl,
  _Prompt,
  _CreatorUserId,
  _LikeCount,
  _CreatedAt,
}
