use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct User {
  /// Self-description, as HTML.
  #[serde(deserialize_with = "deserialize_nullable")]
  pub about: String,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub created: i64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub delay: i64,
  /// The username, which doubles as the user's id.
  #[serde(deserialize_with = "deserialize_nullable")]
  pub id: String,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub karma: i64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub submitted: Vec<u64>,
}

impl User {
  pub(crate) fn path(username: &str) -> String {
    format!("/v0/user/{username}.json")
  }
}
