use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Job {
  pub by: String,
  pub id: u64,
  pub score: i64,
  pub text: String,
  pub time: i64,
  pub title: String,
  pub r#type: ItemKind,
  pub url: String,
}

impl From<Item> for Job {
  fn from(item: Item) -> Self {
    Self {
      by: item.by,
      id: item.id,
      score: item.score,
      text: item.text,
      time: item.time,
      title: item.title,
      r#type: item.r#type,
      url: item.url,
    }
  }
}

impl Job {
  #[must_use]
  pub fn resolved_url(&self) -> String {
    if self.url.is_empty() {
      format!("{PERMALINK_URL}{}", self.id)
    } else {
      self.url.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_only_job_links_to_discussion() {
    let job = Job::from(Item {
      id: 192_327,
      r#type: ItemKind::Job,
      text: "Justin.tv is looking for a Lead Flash Engineer!".into(),
      title: "Justin.tv is looking for a Lead Flash Engineer!".into(),
      ..Item::default()
    });

    assert_eq!(job.r#type, ItemKind::Job);
    assert_eq!(
      job.resolved_url(),
      "https://news.ycombinator.com/item?id=192327"
    );
  }
}
