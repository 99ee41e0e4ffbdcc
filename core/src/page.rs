use scraper::Html;
use time::Date;

use crate::dates::DateParser;
use crate::html::Mode;
use crate::morph::{filter_nouns, Analyzer};
use crate::post::{parse_block, SiteLayout};
use crate::{Error, WordList};

/// What one listing page contributed.
#[derive(Debug, Default)]
pub struct PageOutcome {
    /// `(date, filtered words)` per kept post, in document order.
    pub items: Vec<(Date, WordList)>,
    /// Posts dropped because their date or title could not be read.
    pub skipped: Vec<Error>,
    /// Posts whose titles had no noun or Latin word left after filtering.
    pub empty: usize,
}

impl PageOutcome {
    pub fn blocks(&self) -> usize {
        self.items.len() + self.skipped.len() + self.empty
    }
}

pub struct PageProcessor<'a, A: ?Sized> {
    layout: &'a SiteLayout,
    dates: &'a DateParser,
    analyzer: &'a A,
}

impl<'a, A: Analyzer + ?Sized> PageProcessor<'a, A> {
    pub fn new(layout: &'a SiteLayout, dates: &'a DateParser, analyzer: &'a A) -> Self {
        Self { layout, dates, analyzer }
    }

    pub fn process(&self, page: &str) -> PageOutcome {
        let doc = Html::parse_document(page);
        let mut outcome = PageOutcome::default();
        for block in self.layout.article.extract(doc.root_element(), Mode::All) {
            let post = match parse_block(block, self.layout, self.dates) {
                Ok(post) => post,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping post");
                    outcome.skipped.push(e);
                    continue;
                }
            };
            let words = filter_nouns(self.analyzer, &post.words);
            if words.is_empty() {
                tracing::debug!(date = %post.date, title = ?post.words, "no nouns in title");
                outcome.empty += 1;
                continue;
            }
            outcome.items.push((post.date, words));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::HeuristicAnalyzer;
    use time::macros::date;

    #[test]
    fn keeps_document_order_and_skips_bad_posts() {
        let page = r#"<html><body>
            <article class="post post_preview">
              <span class="post__time">2023-01-05</span>
              <a class="post__title_link">Новый парсер</a>
            </article>
            <article class="post post_preview">
              <a class="post__title_link">Без даты</a>
            </article>
            <article class="post post_preview">
              <span class="post__time">2023-01-04</span>
              <a class="post__title_link">как и для</a>
            </article>
            <article class="post post_preview">
              <span class="post__time">2023-01-02</span>
              <a class="post__title_link">Rust</a>
            </article>
        </body></html>"#;
        let layout = SiteLayout::habr().unwrap();
        let dates = DateParser::new(date!(2023 - 01 - 10));
        let analyzer = HeuristicAnalyzer::new();
        let outcome = PageProcessor::new(&layout, &dates, &analyzer).process(page);

        assert_eq!(
            outcome.items,
            vec![
                (date!(2023 - 01 - 05), vec!["парсер".to_string()]),
                (date!(2023 - 01 - 02), vec!["rust".to_string()]),
            ]
        );
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.empty, 1);
        assert_eq!(outcome.blocks(), 4);
    }

    #[test]
    fn absurd_relative_date_skips_only_that_post() {
        let page = r#"<html><body>
            <article class="post post_preview">
              <span class="post__time">200000000000000 дней назад</span>
              <a class="post__title_link">Сломанная дата</a>
            </article>
            <article class="post post_preview">
              <span class="post__time">20000000000000 недель назад</span>
              <a class="post__title_link">Ещё одна</a>
            </article>
            <article class="post post_preview">
              <span class="post__time">2 дня назад</span>
              <a class="post__title_link">Rust</a>
            </article>
        </body></html>"#;
        let layout = SiteLayout::habr().unwrap();
        let dates = DateParser::new(date!(2023 - 01 - 10));
        let analyzer = HeuristicAnalyzer::new();
        let outcome = PageProcessor::new(&layout, &dates, &analyzer).process(page);

        assert_eq!(outcome.items, vec![(date!(2023 - 01 - 08), vec!["rust".to_string()])]);
        assert_eq!(outcome.skipped.len(), 2);
        assert!(outcome.skipped.iter().all(|e| matches!(e, Error::DateParse { .. })));
    }

    #[test]
    fn page_without_previews_is_empty() {
        let layout = SiteLayout::habr().unwrap();
        let dates = DateParser::new(date!(2023 - 01 - 10));
        let analyzer = HeuristicAnalyzer::new();
        let outcome = PageProcessor::new(&layout, &dates, &analyzer).process("<p>503 Service Unavailable</p>");
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.blocks(), 0);
    }
}
