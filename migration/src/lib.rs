pub use sea_orm_migration::prelude::*;

mod m20260801_101500_emoji_table;
mod m20260801_101900_user_profile_table;
mod m20260801_102200_emoji_like_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260801_101500_emoji_table::Migration),
      Box::new(m20260801_101900_user_profile_table::Migration),
      Box::new(m20260801_102200_emoji_like_table::Migration),
    ]
  }
}
