use std::fmt;
use std::sync::Arc;

use crate::error::BookStatsError;

/// Context about a load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadContext {
    /// Human-readable description of the input (a path, or `<stream>`).
    pub source: String,
}

impl LoadContext {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Counters reported when a load finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Records decoded into the collection.
    pub loaded: usize,
    /// Records dropped because a field could not be decoded.
    pub skipped: usize,
    /// Lines dropped silently because their field count did not match the header.
    pub malformed: usize,
}

/// Observer interface for load outcomes.
///
/// This is the diagnostic channel: every record dropped for a decoding error is reported through
/// [`Self::on_record_skipped`] exactly once.
pub trait LoadObserver: Send + Sync {
    /// Called once per record dropped because of a missing or non-numeric field.
    fn on_record_skipped(&self, _ctx: &LoadContext, _error: &BookStatsError) {}

    /// Called when a load completes.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load aborts with a fatal error.
    fn on_failure(&self, _ctx: &LoadContext, _error: &BookStatsError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_record_skipped(&self, ctx: &LoadContext, error: &BookStatsError) {
        for o in &self.observers {
            o.on_record_skipped(ctx, error);
        }
    }

    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, error: &BookStatsError) {
        for o in &self.observers {
            o.on_failure(ctx, error);
        }
    }
}

/// Writes one line to stderr per skipped record. Successes and fatal failures are not logged.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_record_skipped(&self, ctx: &LoadContext, error: &BookStatsError) {
        eprintln!("{}", skip_line(ctx, error));
    }
}

pub(crate) fn skip_line(ctx: &LoadContext, error: &BookStatsError) -> String {
    format!("[load][skip] source={} err={}", ctx.source, error)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Default)]
    struct Counting {
        skipped: Mutex<usize>,
        successes: Mutex<Vec<LoadStats>>,
    }

    impl LoadObserver for Counting {
        fn on_record_skipped(&self, _ctx: &LoadContext, _error: &BookStatsError) {
            *self.skipped.lock().unwrap() += 1;
        }

        fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
            self.successes.lock().unwrap().push(stats);
        }
    }

    #[test]
    fn composite_fans_out_to_every_observer() {
        let a = Arc::new(Counting::default());
        let b = Arc::new(Counting::default());
        let observers: Vec<Arc<dyn LoadObserver>> = vec![a.clone(), b.clone()];
        let composite = CompositeObserver::new(observers);
        let ctx = LoadContext::new("books.csv");
        let err = BookStatsError::MissingField {
            line: 3,
            column: "title".to_string(),
        };

        composite.on_record_skipped(&ctx, &err);
        composite.on_success(&ctx, LoadStats { loaded: 1, skipped: 1, malformed: 0 });

        for o in [&a, &b] {
            assert_eq!(*o.skipped.lock().unwrap(), 1);
            assert_eq!(o.successes.lock().unwrap().len(), 1);
        }
    }

    #[test]
    fn skip_line_is_a_single_line_with_the_error() {
        let ctx = LoadContext::new("books.csv");
        let err = BookStatsError::ParseError {
            line: 2,
            column: "bookID".to_string(),
            raw: "not-a-number".to_string(),
            message: "invalid digit found in string".to_string(),
        };

        let line = skip_line(&ctx, &err);
        assert!(line.starts_with("[load][skip] source=books.csv"));
        assert!(line.contains("raw='not-a-number'"));
        assert!(!line.contains('\n'));
    }
}
