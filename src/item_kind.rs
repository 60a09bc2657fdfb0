use super::*;

/// The `type` tag the API attaches to every item.
#[derive(
  Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
  Comment,
  Job,
  Poll,
  #[serde(rename = "pollopt")]
  PollOpt,
  Story,
  #[default]
  #[serde(other)]
  Unknown,
}

impl ItemKind {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Comment => "comment",
      Self::Job => "job",
      Self::Poll => "poll",
      Self::PollOpt => "pollopt",
      Self::Story => "story",
      Self::Unknown => "unknown",
    }
  }
}

impl Display for ItemKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
