use clap::Parser;
use feedsnap::feed::{fetch_feed_json, ShapeOptions};
use feedsnap::logging::configure_logging;

/// Fetch a syndication feed and print its normalized JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Feed URL to fetch
    url: String,

    /// Cache validator (etag) from a previous fetch
    #[arg(short, long)]
    etag: Option<String>,

    /// Last-modified hint: the nine comma-separated integers a previous
    /// fetch emitted
    #[arg(short, long, value_delimiter = ',')]
    modified: Option<Vec<i64>>,

    /// Include each entry's summary text
    #[arg(long)]
    summary: bool,

    /// Include each entry's tag terms
    #[arg(long)]
    tags: bool,
}

#[tokio::main]
async fn main() {
    configure_logging();

    let cli = Cli::parse();
    let options = ShapeOptions {
        copy_entry_summary: cli.summary,
        copy_entry_tags: cli.tags,
    };

    let output = fetch_feed_json(
        &cli.url,
        cli.etag.as_deref(),
        cli.modified.as_deref(),
        &options,
    )
    .await;
    println!("{}", output);
}
