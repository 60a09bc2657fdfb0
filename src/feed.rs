use super::*;

/// A named, ordered list of story ids published by the API.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Feed {
  Ask,
  Best,
  Job,
  New,
  Show,
  Top,
}

impl Feed {
  pub const ALL: [Feed; 6] = [
    Feed::Top,
    Feed::New,
    Feed::Best,
    Feed::Ask,
    Feed::Show,
    Feed::Job,
  ];

  #[must_use]
  pub fn endpoint(self) -> &'static str {
    match self {
      Self::Ask => "/v0/askstories.json",
      Self::Best => "/v0/beststories.json",
      Self::Job => "/v0/jobstories.json",
      Self::New => "/v0/newstories.json",
      Self::Show => "/v0/showstories.json",
      Self::Top => "/v0/topstories.json",
    }
  }

  #[must_use]
  pub fn label(self) -> &'static str {
    match self {
      Self::Ask => "ask",
      Self::Best => "best",
      Self::Job => "job",
      Self::New => "new",
      Self::Show => "show",
      Self::Top => "top",
    }
  }

  /// Largest number of ids the API publishes for this feed.
  #[must_use]
  pub fn max(self) -> usize {
    match self {
      Self::Best | Self::New | Self::Top => 500,
      Self::Ask | Self::Job | Self::Show => 200,
    }
  }

  pub fn validate(self, number: usize) -> Result {
    if number < 1 || number > self.max() {
      return Err(Error::Validation {
        feed: self,
        max: self.max(),
        number,
      });
    }

    Ok(())
  }
}

impl Display for Feed {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Feed {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    let name = s.trim().to_ascii_lowercase();

    let name = name
      .strip_suffix("stories")
      .or_else(|| name.strip_suffix('s'))
      .unwrap_or(&name);

    Self::ALL
      .into_iter()
      .find(|feed| feed.label() == name)
      .ok_or_else(|| format!("unknown feed `{s}`"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn list_feeds_accept_up_to_five_hundred() {
    for feed in [Feed::Top, Feed::New, Feed::Best] {
      assert!(feed.validate(1).is_ok());
      assert!(feed.validate(500).is_ok());
      assert!(matches!(
        feed.validate(501),
        Err(Error::Validation { max: 500, .. })
      ));
    }
  }

  #[test]
  fn story_type_feeds_accept_up_to_two_hundred() {
    for feed in [Feed::Ask, Feed::Show, Feed::Job] {
      assert!(feed.validate(200).is_ok());
      assert!(matches!(
        feed.validate(201),
        Err(Error::Validation { max: 200, .. })
      ));
    }
  }

  #[test]
  fn zero_is_rejected_everywhere() {
    for feed in Feed::ALL {
      assert!(matches!(
        feed.validate(0),
        Err(Error::Validation { number: 0, .. })
      ));
    }
  }

  #[test]
  fn endpoints_match_upstream_paths() {
    assert_eq!(Feed::Top.endpoint(), "/v0/topstories.json");
    assert_eq!(Feed::New.endpoint(), "/v0/newstories.json");
    assert_eq!(Feed::Best.endpoint(), "/v0/beststories.json");
    assert_eq!(Feed::Ask.endpoint(), "/v0/askstories.json");
    assert_eq!(Feed::Show.endpoint(), "/v0/showstories.json");
    assert_eq!(Feed::Job.endpoint(), "/v0/jobstories.json");
  }

  #[test]
  fn from_str_accepts_common_spellings() {
    assert_eq!("top".parse::<Feed>().unwrap(), Feed::Top);
    assert_eq!("jobs".parse::<Feed>().unwrap(), Feed::Job);
    assert_eq!("askstories".parse::<Feed>().unwrap(), Feed::Ask);
    assert_eq!("Show".parse::<Feed>().unwrap(), Feed::Show);
    assert!("past".parse::<Feed>().is_err());
  }
}
