mod fetch;

use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, EnvFilter};

use fetch::Fetcher;
use weekwords_core::config::{PageCount, DEFAULT_BASE_URL, DEFAULT_PAGES, DEFAULT_TIMEOUT_SECS};
use weekwords_core::dates::{parse_iso_date, DateParser};
use weekwords_core::morph::{Analyzer, DictionaryAnalyzer};
use weekwords_core::report::{write_jsonl, write_text};
use weekwords_core::{group_by_weeks, Collector, DateIndex, PageProcessor, SiteLayout};

#[derive(Parser, Debug)]
#[command(name = "weekwords")]
#[command(about = "Collect nouns from blog listing titles and group them by week")]
struct Cli {
    /// Number of listing pages to fetch
    #[arg(short, long, default_value_t = i64::from(DEFAULT_PAGES), allow_negative_numbers = true)]
    pages: i64,
    /// Listing root; page N is fetched from <base>/pageN/
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Request timeout seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
    /// User-Agent string sent with every request
    #[arg(long, default_value = "weekwords/0.1")]
    user_agent: String,
    /// Tab-separated lexicon (form, lemma, tag) consulted before the bundled one
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Resolve relative dates ("вчера", "3 дня назад") against this YYYY-MM-DD date
    #[arg(long)]
    today: Option<String>,
    /// Print one line per publish date instead of per week
    #[arg(long, default_value_t = false)]
    by_day: bool,
    /// Emit JSON lines instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();
    let args = Cli::parse();
    let started = Instant::now();

    let pages = PageCount::new(args.pages)?;
    let dates = match &args.today {
        Some(day) => DateParser::new(parse_iso_date(day)?),
        None => DateParser::from_clock(),
    };
    let bundled = DictionaryAnalyzer::bundled()?;
    let analyzer: Box<dyn Analyzer> = match &args.dictionary {
        Some(path) => Box::new(DictionaryAnalyzer::load(path, bundled)?),
        None => Box::new(bundled),
    };
    let layout = SiteLayout::habr()?;
    let fetcher = Fetcher::new(&args.base_url, &args.user_agent, Duration::from_secs(args.timeout_secs))?;
    tracing::info!(pages = pages.get(), base_url = %args.base_url, today = %dates.today(), "starting");

    let processor = PageProcessor::new(&layout, &dates, &*analyzer);
    let mut collector = Collector::new();
    let mut failed = 0usize;
    for page in pages.pages() {
        match fetcher.fetch(page).await {
            Ok(body) => {
                let outcome = processor.process(&body);
                tracing::info!(page, blocks = outcome.blocks(), kept = outcome.items.len(), "processed page");
                collector.merge(outcome);
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "skipping page");
                failed += 1;
            }
        }
    }
    if collector.pages == 0 {
        bail!("none of the {} requested pages could be fetched", pages.get());
    }

    let (fetched, posts, skipped, empty) = (collector.pages, collector.posts, collector.skipped, collector.empty);
    let by_date: DateIndex = collector.finish();
    let days = by_date.len();
    let index = if args.by_day { by_date } else { group_by_weeks(by_date) };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        write_jsonl(&mut out, &index)?;
    } else {
        write_text(&mut out, &index)?;
    }
    out.flush()?;

    tracing::info!(
        fetched,
        failed,
        posts,
        skipped,
        empty,
        days,
        buckets = index.len(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "done"
    );
    Ok(())
}
