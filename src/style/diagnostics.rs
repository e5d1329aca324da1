//! Advisory diagnostics raised while expanding shorthands.

use std::fmt;
use std::sync::Mutex;

/// A recoverable problem found in a shorthand declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Diagnostic {
    /// The shorthand was given 0 or more than 4 values and was dropped.
    MalformedValueCount { property: String, count: usize },
}

impl Diagnostic {
    /// The property the diagnostic is about.
    pub fn property(&self) -> &str {
        match self {
            Diagnostic::MalformedValueCount { property, .. } => property,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedValueCount { property, count } => write!(
                f,
                "property '{property}' has {count} values assigned, expected 1 to 4"
            ),
        }
    }
}

/// Receives diagnostics. Reporting never affects the caller's control flow.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: Diagnostic) {
        self(&diagnostic)
    }
}

/// Forwards diagnostics to `tracing` as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::MalformedValueCount { property, count } => {
                tracing::warn!(property = %property, count = *count, "{diagnostic}");
            }
        }
    }
}

/// Keeps every reported diagnostic, e.g. for a linter to surface later.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panic while pushing cannot leave the Vec half-written.
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn malformed(count: usize) -> Diagnostic {
        Diagnostic::MalformedValueCount {
            property: "padding".to_string(),
            count,
        }
    }

    #[test]
    fn test_display_names_property_and_count() {
        assert_eq!(
            malformed(5).to_string(),
            "property 'padding' has 5 values assigned, expected 1 to 4"
        );
        assert_eq!(malformed(0).property(), "padding");
    }

    #[test]
    fn test_collecting_sink_take_drains() {
        let sink = CollectingSink::new();
        sink.report(malformed(0));
        sink.report(malformed(6));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.take(), vec![malformed(0), malformed(6)]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_closure_is_a_sink() {
        let seen = AtomicUsize::new(0);
        let sink = |d: &Diagnostic| {
            let Diagnostic::MalformedValueCount { count, .. } = d;
            seen.fetch_add(*count, Ordering::SeqCst);
        };
        sink.report(malformed(7));
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.report(malformed(9));
    }
}
