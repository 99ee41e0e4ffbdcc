pub mod config;
pub mod dates;
pub mod error;
pub mod html;
pub mod index;
pub mod morph;
pub mod page;
pub mod post;
pub mod report;
pub mod tokenizer;

pub use error::{Error, Result};
pub use index::{collect_items, group_by_weeks, week_start, Buckets, Collector, DateIndex, WeekIndex, WordList};
pub use page::{PageOutcome, PageProcessor};
pub use post::{PostRecord, SiteLayout};
