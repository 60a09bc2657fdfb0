use super::*;

/// An Ask HN post: a story with a text body and no link.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Ask {
  pub by: String,
  pub descendants: u64,
  pub id: u64,
  pub kids: Vec<u64>,
  pub score: i64,
  pub text: String,
  pub time: i64,
  pub title: String,
  pub r#type: ItemKind,
}

impl From<Item> for Ask {
  fn from(item: Item) -> Self {
    Self {
      by: item.by,
      descendants: item.descendants,
      id: item.id,
      kids: item.kids,
      score: item.score,
      text: item.text,
      time: item.time,
      title: item.title,
      r#type: item.r#type,
    }
  }
}

impl Ask {
  #[must_use]
  pub fn plain_text(&self) -> String {
    html_to_text(&self.text)
  }
}
