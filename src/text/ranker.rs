use std::collections::BTreeMap;

use crate::text::stopwords::Stopwords;

/// Maximum number of entries in a [`RankedList`].
pub const RANK_LIMIT: usize = 5;

/// A word and how many times it occurred.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Top words ordered by count descending, ties broken by word ascending.
///
/// Holds at most [`RANK_LIMIT`] entries and never repeats a word.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct RankedList(Vec<WordCount>);

impl RankedList {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a list from raw `(word, count)` pairs.
    ///
    /// Duplicate words are merged by summing, zero counts are dropped, and the result is
    /// sorted and truncated to `RANK_LIMIT`.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut merged = BTreeMap::<String, u32>::new();
        for (word, count) in counts {
            if count == 0 {
                continue;
            }
            let slot = merged.entry(word.into()).or_insert(0);
            *slot = slot.saturating_add(count);
        }
        Self::from_tally(merged, RANK_LIMIT)
    }

    fn from_tally(tally: BTreeMap<String, u32>, limit: usize) -> Self {
        let mut entries: Vec<WordCount> = tally
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries.truncate(limit.min(RANK_LIMIT));
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[WordCount] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&WordCount> {
        self.0.get(index)
    }

    /// Rank index of `word`, if present.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.0.iter().position(|wc| wc.word == word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// Smallest and largest count, or `None` for an empty list.
    pub fn count_extent(&self) -> Option<(u32, u32)> {
        // Sorted descending, so the ends are the extremes.
        let hi = self.0.first()?.count;
        let lo = self.0.last()?.count;
        Some((lo, hi))
    }
}

impl<'de> serde::Deserialize<'de> for RankedList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<WordCount>::deserialize(deserializer)?;
        Ok(Self::from_counts(
            raw.into_iter().map(|wc| (wc.word, wc.count)),
        ))
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Text to ranked word-frequency transform.
#[derive(Clone, Debug)]
pub struct FrequencyRanker {
    stopwords: Stopwords,
    limit: usize,
}

impl Default for FrequencyRanker {
    fn default() -> Self {
        Self::new(Stopwords::default())
    }
}

impl FrequencyRanker {
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            stopwords,
            limit: RANK_LIMIT,
        }
    }

    /// Keep at most `limit` entries. Values above `RANK_LIMIT` are capped.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(RANK_LIMIT);
        self
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub fn rank(&self, text: &str) -> RankedList {
        RankedList::from_tally(self.word_counts(text), self.limit)
    }

    /// Missing text ranks like empty text.
    pub fn rank_opt(&self, text: Option<&str>) -> RankedList {
        self.rank(text.unwrap_or_default())
    }

    /// Full occurrence tally of non-stopword tokens, before ranking and truncation.
    pub fn word_counts(&self, text: &str) -> BTreeMap<String, u32> {
        let mut tally = BTreeMap::<String, u32>::new();
        for token in tokenize(text) {
            if self.stopwords.contains(&token) {
                continue;
            }
            let slot = tally.entry(token).or_insert(0);
            *slot = slot.saturating_add(1);
        }
        tally
    }
}

/// Rank `text` with the built-in stopword list.
pub fn rank(text: &str) -> RankedList {
    FrequencyRanker::default().rank(text)
}

/// Lowercase, turn everything outside `a..=z` into a separator, split on separator runs.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { ' ' })
        .collect();
    normalized
        .split_ascii_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/ranker.rs"]
mod tests;
