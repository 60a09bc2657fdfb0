use super::*;

/// One failed member of a batch fetch.
#[derive(Debug)]
pub struct Failure {
  pub error: Error,
  pub id: u64,
  pub index: usize,
}

impl Display for Failure {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.error.is_cancelled() {
      write!(f, "item {}: {}", self.id, self.error)
    } else {
      write!(f, "failed to fetch item {}: {}", self.id, self.error)
    }
  }
}

/// Every failure from a single batch fetch, in completion order.
#[derive(Debug)]
pub struct BatchError {
  failures: Vec<Failure>,
}

#[allow(clippy::len_without_is_empty)]
impl BatchError {
  #[must_use]
  pub fn failed_ids(&self) -> Vec<u64> {
    self.failures.iter().map(|failure| failure.id).collect()
  }

  #[must_use]
  pub fn failures(&self) -> &[Failure] {
    &self.failures
  }

  #[must_use]
  pub fn into_failures(self) -> Vec<Failure> {
    self.failures
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.failures.len()
  }

  pub(crate) fn new(failures: Vec<Failure>) -> Option<Self> {
    (!failures.is_empty()).then_some(Self { failures })
  }
}

impl Display for BatchError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "encountered {} errors: [", self.failures.len())?;

    for (i, failure) in self.failures.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }

      write!(f, "{failure}")?;
    }

    write!(f, "]")
  }
}

impl std::error::Error for BatchError {}
