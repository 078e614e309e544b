use std::fmt::Display;

/// An application-level failure explicitly signaled by the server as an
/// `error_code` / `error_info` pair in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// Machine-readable error code, e.g. `ERR-CONDUIT-CORE`.
    pub code: String,
    /// Human-readable description supplied by the server.
    pub info: String,
}

impl RemoteError {
    pub fn new(code: impl Into<String>, info: impl Into<String>) -> Self {
        RemoteError {
            code: code.into(),
            info: info.into(),
        }
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.info)
    }
}

impl std::error::Error for RemoteError {}

/// Unified error type for a single Conduit call.
///
/// Only [`RemoteError`] is this crate's own failure kind; everything else
/// is the underlying layer's error passed through unchanged. The client
/// performs no recovery, no retries and no backoff.
#[derive(Debug, thiserror::Error)]
pub enum ConduitError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// The server answered with an error envelope.
    #[error(transparent)]
    Remote(RemoteError),
    /// The transport failed before a body could be read.
    #[error(transparent)]
    Transport(E),
    /// The response body was not the JSON envelope Conduit promises, or a
    /// typed result/parameter value did not fit its shape.
    #[error(transparent)]
    Decode(serde_json::Error),
    /// The method name did not form a valid URL against the API root.
    #[error(transparent)]
    Url(url::ParseError),
}

#[cfg(feature = "__reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "__reqwest")))]
impl From<reqwest::Error> for ConduitError<reqwest::Error> {
    fn from(e: reqwest::Error) -> Self {
        ConduitError::Transport(e)
    }
}
