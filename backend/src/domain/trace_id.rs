//! Request-scoped correlation identifier.
//!
//! The HTTP `Trace` middleware opens a scope per request so log events and
//! error payloads raised while handling it can be correlated. Task-locals do
//! not follow spawned tasks; wrap the spawned future in [`TraceId::scope`]
//! when work moves off the request task.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT_TRACE_ID: TraceId;
}

/// Correlation identifier for a single request.
///
/// # Examples
/// ```
/// use user_forms::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let id: TraceId = "00000000-0000-0000-0000-000000000000".parse().expect("uuid");
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier bound to the running task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT_TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` bound as the current identifier.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT_TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scope_exposes_identifier_to_the_future() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async { TraceId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn no_identifier_outside_a_scope() {
        assert!(TraceId::current().is_none());
    }

    #[test]
    fn parses_its_own_display_output() {
        let original = TraceId::generate();
        let parsed: TraceId = original.to_string().parse().expect("uuid text");
        assert_eq!(parsed, original);
    }
}
