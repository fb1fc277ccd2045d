//! Text normalization and word-frequency ranking.

pub(crate) mod ranker;
pub(crate) mod stopwords;
