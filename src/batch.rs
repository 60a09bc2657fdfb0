use super::*;

/// The outcome of a concurrent batch fetch.
///
/// `items` is positionally aligned with the requested ids. A member that
/// failed leaves its slot at `T::default()` and contributes one entry to
/// `error`, so a batch can carry both data and an error at once.
#[derive(Debug)]
pub struct Batch<T> {
  error: Option<BatchError>,
  items: Vec<T>,
}

impl<T> Batch<T> {
  #[must_use]
  pub fn error(&self) -> Option<&BatchError> {
    self.error.as_ref()
  }

  #[must_use]
  pub fn into_parts(self) -> (Vec<T>, Option<BatchError>) {
    (self.items, self.error)
  }

  /// Discards the partial data if any member failed.
  pub fn into_result(self) -> Result<Vec<T>> {
    match self.error {
      Some(error) => Err(error.into()),
      None => Ok(self.items),
    }
  }

  #[must_use]
  pub fn is_complete(&self) -> bool {
    self.error.is_none()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  #[must_use]
  pub fn items(&self) -> &[T] {
    &self.items
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn new(items: Vec<T>, failures: Vec<Failure>) -> Self {
    Self {
      error: BatchError::new(failures),
      items,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn complete_batch_converts_to_items() {
    let batch = Batch::new(vec![Story::default(); 3], Vec::new());

    assert!(batch.is_complete());
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.into_result().unwrap().len(), 3);
  }

  #[test]
  fn partial_batch_keeps_items_and_error() {
    let batch = Batch::new(
      vec![Story::default(); 2],
      vec![Failure {
        error: Error::Cancelled,
        id: 11,
        index: 1,
      }],
    );

    assert!(!batch.is_complete());
    assert_eq!(batch.error().map(BatchError::len), Some(1));

    let (items, error) = batch.into_parts();

    assert_eq!(items.len(), 2);
    assert_eq!(error.unwrap().failed_ids(), vec![11]);
  }

  #[test]
  fn partial_batch_into_result_is_batch_error() {
    let batch = Batch::new(
      vec![Comment::default()],
      vec![Failure {
        error: Error::Cancelled,
        id: 3,
        index: 0,
      }],
    );

    assert!(matches!(batch.into_result(), Err(Error::Batch(_))));
  }
}
