use {
  anyhow::Context,
  clap::Parser,
  crossterm::style::Stylize,
  futures::future::join_all,
  hn_sdk::{CancellationToken, Client, Feed, Record, html_to_text},
  serde_json::json,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal},
    process,
    time::Duration,
  },
  tracing_subscriber::EnvFilter,
};

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

/// Print Hacker News feeds.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Arguments {
  /// Number of stories to fetch from each feed
  #[arg(short, long, default_value_t = 10)]
  count: usize,
  /// Feeds to print: top, new, best, ask, show, job
  #[arg(
    short,
    long = "feed",
    value_delimiter = ',',
    default_value = "top"
  )]
  feeds: Vec<Feed>,
  /// Emit JSON instead of text
  #[arg(long)]
  json: bool,
  /// Cancel outstanding requests after this many seconds
  #[arg(short, long)]
  timeout: Option<u64>,
}

struct Listing {
  feed: Feed,
  records: Vec<Record>,
}

impl Listing {
  fn print(&self) {
    println!("{}", self.feed.label().to_uppercase().bold());

    for (rank, record) in self.records.iter().enumerate() {
      let rank = rank + 1;

      match record {
        Record::Ask(ask) => {
          println!("{rank:>3}. {}", ask.title);
          println!("     {} by {}", format_points(ask.score), ask.by);

          let body = html_to_text(&ask.text);

          if !body.is_empty() {
            println!("     {}", truncate(&body, 100).dark_grey());
          }
        }
        Record::Job(job) => {
          println!("{rank:>3}. {}", job.title);
          println!("     {}", job.resolved_url().dark_grey());
        }
        Record::Story(story) => {
          println!("{rank:>3}. {}", story.title);
          println!(
            "     {} by {} | {} comments",
            format_points(story.score),
            story.by,
            story.descendants
          );
          println!("     {}", story.resolved_url().dark_grey());
        }
        other => {
          println!("{rank:>3}. {}", other.title().unwrap_or("untitled"));
        }
      }
    }

    println!();
  }
}

fn format_points(score: i64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

fn initialize_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(io::stderr)
    .init();
}

async fn load(
  client: &Client,
  feed: Feed,
  count: usize,
  cancel: &CancellationToken,
) -> Result<Listing> {
  let batch = client
    .stories_with_data::<Record>(feed, count, cancel)
    .await
    .with_context(|| format!("failed to load {feed} stories"))?;

  let (records, error) = batch.into_parts();

  if let Some(error) = error {
    eprintln!("warning: {feed}: {error}");
  }

  Ok(Listing {
    feed,
    records: records
      .into_iter()
      .filter(|record| record.id() != 0)
      .collect(),
  })
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_logging();

  let client = Client::from_env();

  let cancel = CancellationToken::new();

  if let Some(seconds) = arguments.timeout {
    let cancel = cancel.clone();

    tokio::spawn(async move {
      tokio::time::sleep(Duration::from_secs(seconds)).await;
      cancel.cancel();
    });
  }

  let listings = join_all(
    arguments
      .feeds
      .iter()
      .map(|feed| load(&client, *feed, arguments.count, &cancel)),
  )
  .await
  .into_iter()
  .collect::<Result<Vec<_>>>()?;

  if arguments.json {
    let value = listings
      .iter()
      .map(|listing| {
        json!({
          "feed": listing.feed.label(),
          "records": listing.records,
        })
      })
      .collect::<Vec<_>>();

    println!("{}", serde_json::to_string_pretty(&value)?);
  } else {
    for listing in &listings {
      listing.print();
    }
  }

  Ok(())
}

/// Shortens `text` to `max_chars` characters, marking the cut with `...`.
fn truncate(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
    None => text.to_string(),
  }
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    report(&error);
    process::exit(1);
  }
}

fn report(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let label = |text: &str| -> String {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", label("error:"));

  let causes = error.chain().skip(1).collect::<Vec<_>>();

  if !causes.is_empty() {
    eprintln!("\n{}", label("because:"));

    for cause in causes {
      eprintln!("{} {cause}", label("-"));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}\n{backtrace}", label("backtrace:"));
  }
}
