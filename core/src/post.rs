use scraper::ElementRef;
use time::Date;

use crate::dates::DateParser;
use crate::html::{first_text, ClassQuery};
use crate::tokenizer::split_title;
use crate::{Error, Result};

/// Publish date and raw title tokens of one post preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub date: Date,
    pub words: Vec<String>,
}

/// Where a listing page keeps its post previews and, inside each preview, the
/// date and title elements.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    pub article: ClassQuery,
    pub date: ClassQuery,
    pub title: ClassQuery,
}

impl SiteLayout {
    /// Habr's classic listing markup.
    pub fn habr() -> Result<Self> {
        Ok(Self {
            article: ClassQuery::new("article", "post post_preview")?,
            date: ClassQuery::new("span", "post__time")?,
            title: ClassQuery::new("a", "post__title_link")?,
        })
    }
}

pub fn parse_block(block: ElementRef<'_>, layout: &SiteLayout, dates: &DateParser) -> Result<PostRecord> {
    let date_el = layout.date.require(block)?;
    let date = match first_text(date_el).map(|text| dates.parse(text)) {
        Some(Ok(date)) => date,
        failed => {
            // <time datetime="2023-01-02T10:00:00.000Z">
            let attr = date_el.value().attr("datetime").map(|raw| dates.parse(raw));
            match (attr, failed) {
                (Some(Ok(date)), _) => date,
                (_, Some(Err(e))) => return Err(e),
                _ => return Err(Error::DateParse { text: String::new() }),
            }
        }
    };

    let title_el = layout.title.require(block)?;
    let words = first_text(title_el)
        .map(|title| split_title(title).into_iter().map(str::to_string).collect())
        .unwrap_or_default();

    Ok(PostRecord { date, words })
}
