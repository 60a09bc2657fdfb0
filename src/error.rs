use super::*;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Errors returned by [`Client`].
///
/// Single-resource calls fail with exactly one of these. Batch calls collect
/// one per failed member and combine them into [`Error::Batch`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// One or more members of a batch fetch failed.
  #[error(transparent)]
  Batch(#[from] BatchError),

  /// The response body could not be read.
  #[error("failed to read response body from {url}")]
  Body {
    #[source]
    source: reqwest::Error,
    url: String,
  },

  /// The operation was cancelled before the response arrived.
  #[error("operation cancelled")]
  Cancelled,

  /// The response body was not the expected JSON shape.
  #[error("failed to decode response from {path}")]
  Decode {
    path: String,
    #[source]
    source: serde_json::Error,
  },

  /// The API answered `null`, which it does for unknown items and users.
  #[error("no resource at {path}")]
  Missing { path: String },

  /// The request could not be built.
  #[error("failed to build request for {url}")]
  Request {
    #[source]
    source: reqwest::Error,
    url: String,
  },

  /// The API answered with something other than `200 OK`.
  #[error("unexpected HTTP status {status} from {url}")]
  Status { status: StatusCode, url: String },

  /// The request never produced a response.
  #[error("request to {url} failed")]
  Transport {
    #[source]
    source: reqwest::Error,
    url: String,
  },

  /// A feed count outside the feed's accepted range.
  #[error("accept number between 1 and {max} only for {feed}, got {number}")]
  Validation {
    feed: Feed,
    max: usize,
    number: usize,
  },
}

impl Error {
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    matches!(self, Self::Cancelled)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validation_message_names_feed_and_bounds() {
    let error = Error::Validation {
      feed: Feed::Ask,
      max: 200,
      number: 201,
    };

    assert_eq!(
      error.to_string(),
      "accept number between 1 and 200 only for ask, got 201"
    );
  }

  #[test]
  fn status_message_includes_code() {
    let error = Error::Status {
      status: StatusCode::NOT_FOUND,
      url: "https://example.com/v0/item/1.json".into(),
    };

    assert_eq!(
      error.to_string(),
      "unexpected HTTP status 404 Not Found from https://example.com/v0/item/1.json"
    );
  }
}
