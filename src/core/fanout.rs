//! Join-and-degrade helpers for independent upstream calls.
//!
//! Each call is turned into a [`Settled`] outcome instead of short-circuiting, so
//! one failing source never hides the data of another. Callers then decide per
//! slot whether to propagate or to fall back to an empty value with a
//! [`SourceFailure`] record.

use std::future::Future;

use serde::Serialize;

use crate::core::TrackerError;

/// The outcome of one independent call.
#[derive(Debug)]
pub enum Settled<T> {
    Succeeded(T),
    Failed(TrackerError),
}

/// Why a source contributed an empty slot to an aggregated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    /// Label of the failing source, e.g. `"coins"` or `"news"`.
    pub source: String,
    /// Upstream HTTP status, when the failure carried one.
    pub status: Option<u16>,
    /// Rendered error message.
    pub message: String,
    /// `true` when the request hit the client timeout.
    pub timed_out: bool,
}

impl SourceFailure {
    pub fn new(source: impl Into<String>, err: &TrackerError) -> Self {
        Self {
            source: source.into(),
            status: err.status(),
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}

impl<T> Settled<T> {
    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Converts back into a `Result` for callers that want to propagate.
    ///
    /// # Errors
    ///
    /// Returns the captured error for `Failed`.
    pub fn into_result(self) -> Result<T, TrackerError> {
        match self {
            Self::Succeeded(v) => Ok(v),
            Self::Failed(e) => Err(e),
        }
    }

    /// Value on success; `T::default()` on failure, with the failure appended to `failures`.
    pub fn or_degrade(self, source: &str, failures: &mut Vec<SourceFailure>) -> T
    where
        T: Default,
    {
        match self {
            Self::Succeeded(v) => v,
            Self::Failed(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    source,
                    status = ?err.status(),
                    error = %err,
                    "upstream source failed; degrading to empty"
                );
                failures.push(SourceFailure::new(source, &err));
                T::default()
            }
        }
    }
}

impl<T> From<Result<T, TrackerError>> for Settled<T> {
    fn from(res: Result<T, TrackerError>) -> Self {
        match res {
            Ok(v) => Self::Succeeded(v),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Awaits `fut` and captures its outcome without propagating the error.
pub async fn settle<T, F>(fut: F) -> Settled<T>
where
    F: Future<Output = Result<T, TrackerError>>,
{
    fut.await.into()
}

/// Drives two independent calls concurrently, capturing each outcome on its own.
///
/// Both futures are polled from the start, so the pair resolves in the time of the
/// slower call. The result types may differ.
pub async fn settle_both<A, B, FA, FB>(a: FA, b: FB) -> (Settled<A>, Settled<B>)
where
    FA: Future<Output = Result<A, TrackerError>>,
    FB: Future<Output = Result<B, TrackerError>>,
{
    tokio::join!(settle(a), settle(b))
}
