use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PollOpt {
  pub by: String,
  pub id: u64,
  pub poll: u64,
  pub score: i64,
  pub text: String,
  pub time: i64,
  pub r#type: ItemKind,
}

impl From<Item> for PollOpt {
  fn from(item: Item) -> Self {
    Self {
      by: item.by,
      id: item.id,
      poll: item.poll,
      score: item.score,
      text: item.text,
      time: item.time,
      r#type: item.r#type,
    }
  }
}
