//! Diagnostic logger collaborator
//!
//! The engine and the match report never print directly. They hand
//! diagnostics to a `Logger`, which is fire-and-forget: nothing it does can
//! change a comparison result.

use scenematch_core_types::schema::EVENT_DIAGNOSTIC;

/// Sink for comparison diagnostics
pub trait Logger: Send + Sync {
    /// Informational diagnostic (non-matches in verbose mode, missing comparisons)
    fn log(&self, message: &str);

    /// Something the caller probably wants to know about (depth limit reached)
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::debug!(
            component = "scenematch",
            event = EVENT_DIAGNOSTIC,
            "{}",
            message
        );
    }

    fn warn(&self, message: &str) {
        tracing::warn!(
            component = "scenematch",
            event = EVENT_DIAGNOSTIC,
            "{}",
            message
        );
    }
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}
