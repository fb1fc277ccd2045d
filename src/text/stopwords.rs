use std::collections::BTreeSet;

/// Built-in English function words dropped before counting.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "a", "an", "in", "on", "at", "is", "it", "to", "of", "for", "with", "as", "by",
    "from", "that", "this", "be", "are", "was", "were", "but", "or", "so", "if", "then", "than",
    "there", "their", "they", "them", "you", "your", "i", "we", "us", "our", "he", "she", "his",
    "her", "its", "not", "do", "does", "did", "have", "has", "had", "been", "would", "could",
    "should", "about", "into", "over", "under", "between", "through", "up", "down", "out", "off",
    "my", "myself", "yourself", "yourselves",
];

/// Set of words excluded from ranking.
///
/// Entries are stored lowercased, so lookups against normalized tokens are
/// case-insensitive with respect to how the set was built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stopwords {
    words: BTreeSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl Stopwords {
    /// Empty set: every token is kept.
    pub fn none() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
