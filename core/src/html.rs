use scraper::{ElementRef, Selector};

use crate::{Error, Result};

/// How many matches [`ClassQuery::extract`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    First,
    All,
}

/// Finds elements by tag name whose `class` attribute equals `class` exactly.
///
/// The comparison is on the whole attribute string, so
/// `<article class="post post_preview">` matches `"post post_preview"` but not
/// `"post"`, and an extra class on the element defeats the match.
#[derive(Debug, Clone)]
pub struct ClassQuery {
    tag: String,
    class: String,
    selector: Selector,
}

impl ClassQuery {
    pub fn new(tag: &str, class: &str) -> Result<Self> {
        let selector = Selector::parse(tag).map_err(|e| Error::Selector(format!("{tag:?}: {e:?}")))?;
        Ok(Self { tag: tag.to_string(), class: class.to_string(), selector })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        scope
            .select(&self.selector)
            .find(|el| el.value().attr("class") == Some(self.class.as_str()))
    }

    pub fn all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        scope
            .select(&self.selector)
            .filter(|el| el.value().attr("class") == Some(self.class.as_str()))
            .collect()
    }

    /// Flag-driven form of [`first`](Self::first) / [`all`](Self::all):
    /// `Mode::First` yields zero or one element.
    pub fn extract<'a>(&self, scope: ElementRef<'a>, mode: Mode) -> Vec<ElementRef<'a>> {
        match mode {
            Mode::First => self.first(scope).into_iter().collect(),
            Mode::All => self.all(scope),
        }
    }

    /// Like [`first`](Self::first) but absence is an [`Error::NotFound`].
    pub fn require<'a>(&self, scope: ElementRef<'a>) -> Result<ElementRef<'a>> {
        self.first(scope).ok_or_else(|| Error::NotFound { tag: self.tag().to_string(), class: self.class().to_string() })
    }
}

/// First non-empty text node anywhere under `el`, trimmed.
///
/// This is not the element's first child: leading whitespace nodes and wrapper
/// markup such as `<span><time>вчера</time></span>` are skipped on purpose, so
/// the date or title is still found when the site nests it one level deeper.
pub fn first_text<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.text().map(str::trim).find(|t| !t.is_empty())
}
