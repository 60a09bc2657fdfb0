use super::*;

/// Async client for the Hacker News API.
///
/// Cloning is cheap and clones share the underlying connection pool. Every
/// call takes a [`CancellationToken`]; cancelling it aborts requests that are
/// still in flight and fails them with [`Error::Cancelled`].
#[derive(Clone, Debug)]
pub struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Self::DEFAULT_BASE_URL)
  }
}

impl Client {
  const BASE_URL_ENV: &str = "HN_API_BASE_URL";

  pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com";

  pub async fn ask(&self, id: u64, cancel: &CancellationToken) -> Result<Ask> {
    self.item(id, cancel).await.map(Ask::from)
  }

  pub async fn ask_stories_with_data(
    &self,
    number: usize,
    cancel: &CancellationToken,
  ) -> Result<Batch<Ask>> {
    self.stories_with_data(Feed::Ask, number, cancel).await
  }

  #[must_use]
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub async fn best_stories_with_data(
    &self,
    number: usize,
    cancel: &CancellationToken,
  ) -> Result<Batch<Story>> {
    self.stories_with_data(Feed::Best, number, cancel).await
  }

  pub async fn comment(
    &self,
    id: u64,
    cancel: &CancellationToken,
  ) -> Result<Comment> {
    self.item(id, cancel).await.map(Comment::from)
  }

  async fn decode<T: DeserializeOwned>(
    &self,
    path: &str,
    cancel: &CancellationToken,
  ) -> Result<T> {
    let body = self.fetch(path, cancel).await?;

    serde_json::from_slice::<Option<T>>(&body)
      .map_err(|source| Error::Decode {
        path: path.to_owned(),
        source,
      })?
      .ok_or_else(|| Error::Missing {
        path: path.to_owned(),
      })
  }

  pub async fn feed_ids(
    &self,
    feed: Feed,
    cancel: &CancellationToken,
  ) -> Result<Vec<u64>> {
    self.decode(feed.endpoint(), cancel).await
  }

  /// Performs one GET against `{base_url}{path}` and returns the raw body.
  ///
  /// Anything but `200 OK` is an [`Error::Status`] and the body is not read.
  pub async fn fetch(
    &self,
    path: &str,
    cancel: &CancellationToken,
  ) -> Result<Bytes> {
    if cancel.is_cancelled() {
      return Err(Error::Cancelled);
    }

    tokio::select! {
      biased;
      () = cancel.cancelled() => {
        debug!(path, "request cancelled in flight");
        Err(Error::Cancelled)
      }
      result = self.get(path) => result,
    }
  }

  /// Fetches `ids[..number]` concurrently, one task per id.
  ///
  /// The returned items line up with the ids. Failed members stay at
  /// `T::default()` and are reported through [`Batch::error`]. A `number`
  /// larger than `ids.len()` yields a batch of `ids.len()` items.
  pub async fn fetch_batch<T>(
    &self,
    ids: &[u64],
    number: usize,
    cancel: &CancellationToken,
  ) -> Batch<T>
  where
    T: From<Item> + Default + Send + 'static,
  {
    let ids = &ids[..number.min(ids.len())];

    debug!(count = ids.len(), "fetching batch");

    let mut items = ids.iter().map(|_| T::default()).collect::<Vec<T>>();

    let mut tasks = JoinSet::new();

    for (index, &id) in ids.iter().enumerate() {
      let (client, cancel) = (self.clone(), cancel.clone());

      tasks.spawn(async move {
        let result = if cancel.is_cancelled() {
          Err(Error::Cancelled)
        } else {
          client.item(id, &cancel).await.map(T::from)
        };

        (index, id, result)
      });
    }

    let mut failures = Vec::new();

    while let Some(joined) = tasks.join_next().await {
      let (index, id, result) = match joined {
        Ok(message) => message,
        Err(error) => std::panic::resume_unwind(error.into_panic()),
      };

      match result {
        Ok(item) => items[index] = item,
        Err(error) => {
          warn!(id, index, %error, "batch member failed");
          failures.push(Failure { error, id, index });
        }
      }
    }

    Batch::new(items, failures)
  }

  /// Reads the base URL from `HN_API_BASE_URL`, falling back to the public
  /// API host.
  #[must_use]
  pub fn from_env() -> Self {
    match env::var(Self::BASE_URL_ENV) {
      Ok(base_url) if !base_url.trim().is_empty() => Self::new(base_url.trim()),
      _ => Self::default(),
    }
  }

  async fn get(&self, path: &str) -> Result<Bytes> {
    let url = format!("{}{path}", self.base_url);

    debug!(%url, "GET");

    let request = self.client.get(&url).build().map_err(|source| {
      Error::Request {
        source,
        url: url.clone(),
      }
    })?;

    let response = self.client.execute(request).await.map_err(|source| {
      Error::Transport {
        source,
        url: url.clone(),
      }
    })?;

    let status = response.status();

    if status != StatusCode::OK {
      return Err(Error::Status { status, url });
    }

    response
      .bytes()
      .await
      .map_err(|source| Error::Body { source, url })
  }

  pub async fn item(&self, id: u64, cancel: &CancellationToken) -> Result<Item> {
    self.decode(&Item::path(id), cancel).await
  }

  pub async fn job(&self, id: u64, cancel: &CancellationToken) -> Result<Job> {
    self.item(id, cancel).await.map(Job::from)
  }

  pub async fn job_stories_with_data(
    &self,
    number: usize,
    cancel: &CancellationToken,
  ) -> Result<Batch<Job>> {
    self.stories_with_data(Feed::Job, number, cancel).await
  }

  /// The current largest item id. Walking backwards from it reaches every
  /// item.
  pub async fn max_item(&self, cancel: &CancellationToken) -> Result<u64> {
    self.decode("/v0/maxitem.json", cancel).await
  }

  #[must_use]
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into();

    Self {
      base_url: base_url.trim_end_matches('/').to_owned(),
      client: reqwest::Client::new(),
    }
  }

  pub async fn new_stories_with_data(
    &self,
    number: usize,
    cancel: &CancellationToken,
  ) -> Result<Batch<Story>> {
    self.stories_with_data(Feed::New, number, cancel).await
  }

  pub async fn poll(&self, id: u64, cancel: &CancellationToken) -> Result<Poll> {
    self.item(id, cancel).await.map(Poll::from)
  }

  pub async fn poll_opt(
    &self,
    id: u64,
    cancel: &CancellationToken,
  ) -> Result<PollOpt> {
    self.item(id, cancel).await.map(PollOpt::from)
  }

  pub async fn record(
    &self,
    id: u64,
    cancel: &CancellationToken,
  ) -> Result<Record> {
    self.item(id, cancel).await.map(Record::from)
  }

  pub async fn show_stories_with_data(
    &self,
    number: usize,
    cancel: &CancellationToken,
  ) -> Result<Batch<Story>> {
    self.stories_with_data(Feed::Show, number, cancel).await
  }

  /// The first `number` ids of `feed`, after checking `number` against the
  /// feed's bounds.
  pub async fn stories(
    &self,
    feed: Feed,
    number: usize,
    cancel: &CancellationToken,
  ) -> Result<Vec<u64>> {
    feed.validate(number)?;

    let mut ids = self.feed_ids(feed, cancel).await?;

    ids.truncate(number);

    Ok(ids)
  }

  /// Fetches the first `number` stories of `feed` with their data.
  ///
  /// `number` is validated before any request is made. Failing to load the
  /// feed itself is an error; failing individual stories is reported
  /// through the returned [`Batch`].
  pub async fn stories_with_data<T>(
    &self,
    feed: Feed,
    number: usize,
    cancel: &CancellationToken,
  ) -> Result<Batch<T>>
  where
    T: From<Item> + Default + Send + 'static,
  {
    let ids = self.stories(feed, number, cancel).await?;

    debug!(%feed, requested = number, available = ids.len(), "loaded feed");

    Ok(self.fetch_batch(&ids, number, cancel).await)
  }

  pub async fn story(
    &self,
    id: u64,
    cancel: &CancellationToken,
  ) -> Result<Story> {
    self.item(id, cancel).await.map(Story::from)
  }

  pub async fn top_stories_with_data(
    &self,
    number: usize,
    cancel: &CancellationToken,
  ) -> Result<Batch<Story>> {
    self.stories_with_data(Feed::Top, number, cancel).await
  }

  pub async fn updates(&self, cancel: &CancellationToken) -> Result<Updates> {
    self.decode(Updates::PATH, cancel).await
  }

  pub async fn user(
    &self,
    username: &str,
    cancel: &CancellationToken,
  ) -> Result<User> {
    self.decode(&User::path(username), cancel).await
  }
}
