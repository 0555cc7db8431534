use thiserror::Error;

/// Failure of a backend round trip.
///
/// A transport-level failure (unreachable host, unreadable body) and an
/// application-level failure (non-2xx with a message payload) are treated
/// identically for control flow: the session never advances on either. They
/// differ only in what is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The backend could not be reached, or its response was not valid JSON.
    #[error("Failed to connect to the backend.")]
    Connect,

    /// The backend answered with a non-2xx status; the payload-carried
    /// message (or the "Unknown error" fallback) is surfaced verbatim.
    #[error("{0}")]
    Backend(String),
}
