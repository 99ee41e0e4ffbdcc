use std::collections::HashMap;
use std::hash::Hash;
use time::{Date, Duration};

use crate::page::PageOutcome;

/// Normalized lemmas in scan order; duplicates are kept.
pub type WordList = Vec<String>;

/// Word lists keyed by publish date.
pub type DateIndex = Buckets<Date>;

/// Word lists keyed by the Monday that starts each week.
pub type WeekIndex = Buckets<Date>;

/// Insertion-ordered map from key to a growing word list.
#[derive(Debug, Clone)]
pub struct Buckets<K> {
    keys: Vec<K>,
    lists: Vec<WordList>,
    slots: HashMap<K, usize>,
}

impl<K> Default for Buckets<K> {
    fn default() -> Self {
        Self { keys: Vec::new(), lists: Vec::new(), slots: HashMap::new() }
    }
}

impl<K: Copy + Eq + Hash> Buckets<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate `words` onto the list under `key`, creating it at the end
    /// if the key is new.
    pub fn append(&mut self, key: K, mut words: WordList) {
        match self.slots.get(&key) {
            Some(&slot) => self.lists[slot].append(&mut words),
            None => {
                self.slots.insert(key, self.keys.len());
                self.keys.push(key);
                self.lists.push(words);
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&WordList> {
        self.slots.get(key).map(|&slot| &self.lists[slot])
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &WordList)> {
        self.keys.iter().zip(self.lists.iter())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Total words across all lists.
    pub fn word_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }
}

impl<K> IntoIterator for Buckets<K> {
    type Item = (K, WordList);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<WordList>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.lists)
    }
}

/// Merges page outcomes into a [`DateIndex`] and keeps run totals.
#[derive(Debug, Default)]
pub struct Collector {
    index: DateIndex,
    pub pages: usize,
    pub posts: usize,
    pub skipped: usize,
    pub empty: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, outcome: PageOutcome) {
        self.pages += 1;
        self.posts += outcome.items.len();
        self.skipped += outcome.skipped.len();
        self.empty += outcome.empty;
        for (date, words) in outcome.items {
            self.index.append(date, words);
        }
    }

    pub fn index(&self) -> &DateIndex {
        &self.index
    }

    pub fn finish(self) -> DateIndex {
        self.index
    }
}

pub fn collect_items<I>(outcomes: I) -> DateIndex
where
    I: IntoIterator<Item = PageOutcome>,
{
    let mut collector = Collector::new();
    for outcome in outcomes {
        collector.merge(outcome);
    }
    collector.finish()
}

/// Monday of the week containing `date`.
pub fn week_start(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_monday()))
}

/// Rebucket a date index by week. Weeks appear in the order their first date
/// appears in `index`.
pub fn group_by_weeks(index: DateIndex) -> WeekIndex {
    let mut weeks = WeekIndex::new();
    for (date, words) in index {
        weeks.append(week_start(date), words);
    }
    weeks
}
