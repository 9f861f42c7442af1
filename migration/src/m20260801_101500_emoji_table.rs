use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Emoji::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Emoji::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(ColumnDef::new(Emoji::ImageUrl).string().not_null())
          .col(ColumnDef::new(Emoji::Prompt).string().not_null())
          .col(ColumnDef::new(Emoji::CreatorUserId).string().not_null())
          .col(
            ColumnDef::new(Emoji::LikeCount)
              .integer()
              .not_null()
              .default(0),
          )
          .col(ColumnDef::new(Emoji::CreatedAt).timestamp().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Emoji::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Emoji {
  Table,
  Id,
  ImageUrl,
  Prompt,
  CreatorUserId,
  LikeCount,
  CreatedAt,
}
