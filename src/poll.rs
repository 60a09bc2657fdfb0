use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Poll {
  pub by: String,
  pub descendants: u64,
  pub id: u64,
  pub kids: Vec<u64>,
  /// Ids of the poll's options, in display order.
  pub parts: Vec<u64>,
  pub score: i64,
  pub text: String,
  pub time: i64,
  pub title: String,
  pub r#type: ItemKind,
}

impl From<Item> for Poll {
  fn from(item: Item) -> Self {
    Self {
      by: item.by,
      descendants: item.descendants,
      id: item.id,
      kids: item.kids,
      parts: item.parts,
      score: item.score,
      text: item.text,
      time: item.time,
      title: item.title,
      r#type: item.r#type,
    }
  }
}
