/// Convenience result type used across wordrank.
pub type WordrankResult<T> = Result<T, WordrankError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Ranking, reconciliation and animation are total and never produce one of these;
/// only configuration loading and pixel output can fail.
#[derive(thiserror::Error, Debug)]
pub enum WordrankError {
    /// Invalid or unreadable visualization configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while turning a scene frame into SVG or pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WordrankError {
    /// Build a [`WordrankError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`WordrankError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WordrankError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for WordrankError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
