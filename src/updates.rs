use super::*;

/// Items and profiles that changed recently.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Updates {
  #[serde(deserialize_with = "deserialize_nullable")]
  pub items: Vec<u64>,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub profiles: Vec<String>,
}

impl Updates {
  pub(crate) const PATH: &str = "/v0/updates.json";
}
