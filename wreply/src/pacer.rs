//! Minimum-spacing rate limiter with an injectable clock.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::error::GenerationError;

/// Minimum spacing between dispatched requests: a token bucket of size one
/// refilling once per interval.
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Owns the last-dispatch instant. Starts with no dispatch recorded, and is
/// advanced only by `mark_dispatched` — a rejected check leaves the window
/// untouched. One mutex guards both operations; the pipeline still assumes a
/// single in-flight caller.
pub struct RequestPacer {
    interval: Duration,
    clock: Arc<dyn Clock>,
    last_dispatch: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            interval: MIN_REQUEST_INTERVAL,
            clock,
            last_dispatch: Mutex::new(None),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn check(&self) -> Result<(), GenerationError> {
        let last_dispatch = self
            .last_dispatch
            .lock()
            .map_err(|_| GenerationError::other("rate limiter lock poisoned"))?;

        if let Some(last) = *last_dispatch {
            let elapsed = self.clock.now().saturating_duration_since(last);
            if elapsed < self.interval {
                return Err(GenerationError::rate_limited(self.interval - elapsed));
            }
        }

        Ok(())
    }

    pub fn mark_dispatched(&self) -> Result<(), GenerationError> {
        let mut last_dispatch = self
            .last_dispatch
            .lock()
            .map_err(|_| GenerationError::other("rate limiter lock poisoned"))?;

        *last_dispatch = Some(self.clock.now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use super::{Clock, RequestPacer};
    use crate::error::GenerationErrorKind;

    struct ManualClock {
        now: Mutex<Instant>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                now: Mutex::new(Instant::now()),
            }
        }

        fn advance(&self, by: Duration) {
            let mut now = self.now.lock().expect("clock lock");
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().expect("clock lock")
        }
    }

    #[test]
    fn first_check_always_passes() {
        let clock = Arc::new(ManualClock::new());
        let pacer = RequestPacer::new(clock);

        assert!(pacer.check().is_ok());
    }

    #[test]
    fn check_inside_the_interval_reports_the_remaining_wait() {
        let clock = Arc::new(ManualClock::new());
        let pacer = RequestPacer::new(Arc::clone(&clock) as Arc<dyn Clock>);

        pacer.mark_dispatched().expect("mark");
        clock.advance(Duration::from_millis(400));

        let error = pacer.check().expect_err("check must fail");
        assert_eq!(error.kind, GenerationErrorKind::RateLimited);
        assert_eq!(error.retry_after, Some(Duration::from_millis(600)));
    }

    #[test]
    fn a_rejected_check_does_not_advance_the_window() {
        let clock = Arc::new(ManualClock::new());
        let pacer = RequestPacer::new(Arc::clone(&clock) as Arc<dyn Clock>);

        pacer.mark_dispatched().expect("mark");
        clock.advance(Duration::from_millis(400));
        assert!(pacer.check().is_err());

        clock.advance(Duration::from_millis(600));
        assert!(pacer.check().is_ok());
    }

    #[test]
    fn check_at_the_interval_boundary_passes() {
        let clock = Arc::new(ManualClock::new());
        let pacer = RequestPacer::new(Arc::clone(&clock) as Arc<dyn Clock>);

        pacer.mark_dispatched().expect("mark");
        clock.advance(Duration::from_millis(1000));

        assert!(pacer.check().is_ok());
    }
}
