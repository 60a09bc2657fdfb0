//! Typed async client for the Hacker News JSON API.
//!
//! Single resources are fetched with one GET each. Feed helpers such as
//! [`Client::top_stories_with_data`] fan out one request per story and hand
//! back a [`Batch`] that keeps input order and reports partial failures
//! alongside whatever succeeded.

pub use {
  ask::Ask,
  batch::Batch,
  batch_error::{BatchError, Failure},
  client::Client,
  comment::Comment,
  error::{Error, Result},
  feed::Feed,
  item::Item,
  item_kind::ItemKind,
  job::Job,
  poll::Poll,
  poll_opt::PollOpt,
  record::Record,
  story::Story,
  tokio_util::sync::CancellationToken,
  updates::Updates,
  user::User,
  utils::html_to_text,
};

use {
  bytes::Bytes,
  reqwest::StatusCode,
  serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned},
  std::{
    env,
    fmt::{self, Display, Formatter},
    str::FromStr,
  },
  tokio::task::JoinSet,
  tracing::{debug, warn},
  utils::deserialize_nullable,
};

mod ask;
mod batch;
mod batch_error;
mod client;
mod comment;
mod error;
mod feed;
mod item;
mod item_kind;
mod job;
mod poll;
mod poll_opt;
mod record;
mod story;
mod updates;
mod user;
mod utils;

const PERMALINK_URL: &str = "https://news.ycombinator.com/item?id=";
