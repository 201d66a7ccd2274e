/// Convenience result alias used across the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Crate-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Props failed a strict shape check or could not be turned into a typed [`crate::Person`].
    #[error("validation error: {0}")]
    Validation(String),

    /// A props value could not be formatted (e.g. `hobbies` is not a sequence).
    #[error("render error: {0}")]
    Render(String),

    /// JSON decoding or encoding failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, usually I/O from a sink.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CardError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
