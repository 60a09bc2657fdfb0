use super::*;

/// The generic record behind every `/v0/item/{id}.json` response.
///
/// Fields that do not apply to an item's kind are absent upstream and decode
/// to their zero value, so a comment has an empty `title` and a job has
/// `descendants == 0`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Item {
  #[serde(deserialize_with = "deserialize_nullable")]
  pub by: String,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub dead: bool,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub deleted: bool,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub descendants: u64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub id: u64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub kids: Vec<u64>,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub parent: u64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub parts: Vec<u64>,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub poll: u64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub score: i64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub text: String,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub time: i64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub title: String,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub r#type: ItemKind,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub url: String,
}

impl Item {
  /// Ask HN posts are stories that carry a body instead of a link.
  #[must_use]
  pub fn is_ask(&self) -> bool {
    self.r#type == ItemKind::Story && self.url.is_empty() && !self.text.is_empty()
  }

  #[must_use]
  pub fn kind(&self) -> ItemKind {
    self.r#type
  }

  pub(crate) fn path(id: u64) -> String {
    format!("/v0/item/{id}.json")
  }

  #[must_use]
  pub fn permalink(&self) -> String {
    format!("{PERMALINK_URL}{}", self.id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_fields_decode_to_zero_values() {
    let item = serde_json::from_str::<Item>(r#"{"id":8863,"type":"comment"}"#)
      .unwrap();

    assert_eq!(item.id, 8863);
    assert_eq!(item.kind(), ItemKind::Comment);
    assert!(item.by.is_empty());
    assert!(item.kids.is_empty());
    assert_eq!(item.descendants, 0);
    assert!(!item.deleted);
  }

  #[test]
  fn explicit_nulls_decode_to_zero_values() {
    let item = serde_json::from_str::<Item>(
      r#"{"id":2,"type":"story","title":null,"kids":null,"score":null,"dead":null}"#,
    )
    .unwrap();

    assert_eq!(item.id, 2);
    assert_eq!(item.kind(), ItemKind::Story);
    assert_eq!(item.title, "");
    assert!(item.kids.is_empty());
    assert_eq!(item.score, 0);
    assert!(!item.dead);
  }

  #[test]
  fn null_type_tag_decodes_as_unknown() {
    let item =
      serde_json::from_str::<Item>(r#"{"id":3,"type":null}"#).unwrap();

    assert_eq!(item.kind(), ItemKind::Unknown);
  }

  #[test]
  fn unrecognised_type_tags_decode_as_unknown() {
    let item =
      serde_json::from_str::<Item>(r#"{"id":1,"type":"storyline"}"#).unwrap();

    assert_eq!(item.kind(), ItemKind::Unknown);
  }

  #[test]
  fn pollopt_tag_decodes() {
    let item = serde_json::from_str::<Item>(
      r#"{"id":160705,"type":"pollopt","poll":160704,"score":335}"#,
    )
    .unwrap();

    assert_eq!(item.kind(), ItemKind::PollOpt);
    assert_eq!(item.poll, 160_704);
  }

  #[test]
  fn ask_detection_requires_text_without_url() {
    let ask = Item {
      r#type: ItemKind::Story,
      text: "What are you working on?".into(),
      ..Item::default()
    };

    let link = Item {
      url: "https://example.com".into(),
      ..ask.clone()
    };

    assert!(ask.is_ask());
    assert!(!link.is_ask());
  }

  #[test]
  fn path_and_permalink_use_id() {
    let item = Item {
      id: 42,
      ..Item::default()
    };

    assert_eq!(Item::path(42), "/v0/item/42.json");
    assert_eq!(item.permalink(), "https://news.ycombinator.com/item?id=42");
  }
}
