use super::*;

/// An item projected onto the shape its `type` tag calls for.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
  Ask(Ask),
  Comment(Comment),
  Job(Job),
  Poll(Poll),
  PollOpt(PollOpt),
  Story(Story),
  Unknown(Item),
}

impl Default for Record {
  fn default() -> Self {
    Self::Unknown(Item::default())
  }
}

impl From<Item> for Record {
  fn from(item: Item) -> Self {
    match item.kind() {
      ItemKind::Comment => Self::Comment(item.into()),
      ItemKind::Job => Self::Job(item.into()),
      ItemKind::Poll => Self::Poll(item.into()),
      ItemKind::PollOpt => Self::PollOpt(item.into()),
      ItemKind::Story if item.is_ask() => Self::Ask(item.into()),
      ItemKind::Story => Self::Story(item.into()),
      ItemKind::Unknown => Self::Unknown(item),
    }
  }
}

impl Record {
  #[must_use]
  pub fn id(&self) -> u64 {
    match self {
      Self::Ask(ask) => ask.id,
      Self::Comment(comment) => comment.id,
      Self::Job(job) => job.id,
      Self::Poll(poll) => poll.id,
      Self::PollOpt(opt) => opt.id,
      Self::Story(story) => story.id,
      Self::Unknown(item) => item.id,
    }
  }

  #[must_use]
  pub fn title(&self) -> Option<&str> {
    match self {
      Self::Ask(Ask { title, .. })
      | Self::Job(Job { title, .. })
      | Self::Poll(Poll { title, .. })
      | Self::Story(Story { title, .. }) => Some(title.as_str()),
      Self::Unknown(item) if !item.title.is_empty() => Some(item.title.as_str()),
      Self::Comment(_) | Self::PollOpt(_) | Self::Unknown(_) => None,
    }
  }
}
