use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Story {
  pub by: String,
  pub descendants: u64,
  pub id: u64,
  pub kids: Vec<u64>,
  pub score: i64,
  pub time: i64,
  pub title: String,
  pub r#type: ItemKind,
  pub url: String,
}

impl From<Item> for Story {
  fn from(item: Item) -> Self {
    Self {
      by: item.by,
      descendants: item.descendants,
      id: item.id,
      kids: item.kids,
      score: item.score,
      time: item.time,
      title: item.title,
      r#type: item.r#type,
      url: item.url,
    }
  }
}

impl Story {
  /// The linked URL, or the discussion page for text-only stories.
  #[must_use]
  pub fn resolved_url(&self) -> String {
    if self.url.is_empty() {
      format!("{PERMALINK_URL}{}", self.id)
    } else {
      self.url.clone()
    }
  }
}
