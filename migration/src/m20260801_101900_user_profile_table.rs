use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(UserProfile::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(UserProfile::Id)
              .integer()
              .not_null()
              .primary_key()
              .auto_increment(),
          )
          .col(
            ColumnDef::new(UserProfile::UserId)
              .string()
              .not_null()
              .unique_key(),
          )
          .col(
            ColumnDef::new(UserProfile::Credits)
              .integer()
              .not_null()
              .default(3),
          )
          .col(
            ColumnDef::new(UserProfile::Tier)
              .string()
              .not_null()
              .default("free"),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(UserProfile::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum UserProfile {
  Table,
  Id,
  UserId,
  Credits,
  Tier,
}
