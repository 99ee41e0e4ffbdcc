use std::num::NonZeroU32;

use crate::{Error, Result};

/// Pages fetched when no count is given.
pub const DEFAULT_PAGES: u32 = 1;

/// Default listing root; page `n` lives at `<base>/page<n>/`.
pub const DEFAULT_BASE_URL: &str = "https://habr.com/ru/all/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// A validated, positive number of listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount(NonZeroU32);

impl PageCount {
    pub fn new(requested: i64) -> Result<Self> {
        u32::try_from(requested)
            .ok()
            .and_then(NonZeroU32::new)
            .map(PageCount)
            .ok_or_else(|| Error::Config(format!("page count must be a positive integer, got {requested}")))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 1-based page numbers in fetch order.
    pub fn pages(self) -> impl Iterator<Item = u32> {
        1..=self.get()
    }
}

impl Default for PageCount {
    fn default() -> Self {
        PageCount(NonZeroU32::MIN.saturating_add(DEFAULT_PAGES - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_counts() {
        let count = PageCount::new(3).unwrap();
        assert_eq!(count.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(PageCount::default().get(), DEFAULT_PAGES);
    }

    #[test]
    fn rejects_zero_negative_and_oversized() {
        for bad in [0, -1, -100, i64::from(u32::MAX) + 1] {
            match PageCount::new(bad) {
                Err(Error::Config(msg)) => assert!(msg.contains(&bad.to_string())),
                other => panic!("{bad} gave {other:?}"),
            }
        }
    }
}
