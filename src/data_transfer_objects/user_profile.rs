use entities::user_profile;

#[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserProfileDto {
  #[serde(rename = "userId")]
  pub user_id: String,

  pub credits: i32,
  pub tier: String,
}

impl From<user_profile::Model> for UserProfileDto {
  fn from(profile_model: user_profile::Model) -> Self {
    Self {
      user_id: profile_model.user_id,
      credits: profile_model.credits,
      tier: profile_model.tier,
    }
  }
}
