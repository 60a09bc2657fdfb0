use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Comment {
  pub by: String,
  pub id: u64,
  pub kids: Vec<u64>,
  pub parent: u64,
  pub text: String,
  pub time: i64,
  pub r#type: ItemKind,
}

impl From<Item> for Comment {
  fn from(item: Item) -> Self {
    Self {
      by: item.by,
      id: item.id,
      kids: item.kids,
      parent: item.parent,
      text: item.text,
      time: item.time,
      r#type: item.r#type,
    }
  }
}

impl Comment {
  #[must_use]
  pub fn permalink(&self) -> String {
    format!("{PERMALINK_URL}{}", self.id)
  }

  /// The HTML body rendered as plain text.
  #[must_use]
  pub fn plain_text(&self) -> String {
    html_to_text(&self.text)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keeps_parent_and_drops_story_fields() {
    let item = Item {
      by: "norvig".into(),
      id: 2_921_983,
      kids: vec![2_922_097, 2_922_429],
      parent: 2_921_506,
      r#type: ItemKind::Comment,
      text: "Aw shucks, guys ...".into(),
      time: 1_314_211_127,
      title: "ignored".into(),
      ..Item::default()
    };

    let comment = Comment::from(item);

    assert_eq!(comment.parent, 2_921_506);
    assert_eq!(comment.kids, vec![2_922_097, 2_922_429]);
    assert_eq!(
      comment.permalink(),
      "https://news.ycombinator.com/item?id=2921983"
    );
  }

  #[test]
  fn plain_text_strips_markup() {
    let comment = Comment {
      text: "<p>Hello &amp; goodbye</p>".into(),
      ..Comment::default()
    };

    assert_eq!(comment.plain_text(), "Hello & goodbye");
  }
}
