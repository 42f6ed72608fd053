#![forbid(unsafe_code)]

//! Lifecycle wrapper for content that arrives asynchronously.

/// State of a remote fetch.
///
/// `Pending` and `Ready` with an empty collection are distinct on
/// purpose: one renders a loading indicator, the other an empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    /// Request issued, nothing arrived yet.
    Pending,
    /// Fetch resolved.
    Ready(T),
    /// Fetch failed with a display-safe message.
    Failed(String),
}

impl<T> Remote<T> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Remote::Pending)
    }

    /// The resolved value, if the fetch has completed successfully.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the fetch has failed.
    #[must_use]
    pub fn failed(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Remote<U> {
        match self {
            Remote::Pending => Remote::Pending,
            Remote::Ready(value) => Remote::Ready(f(value)),
            Remote::Failed(message) => Remote::Failed(message),
        }
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Pending
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Remote<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(error) => Remote::Failed(error.to_string()),
        }
    }
}
