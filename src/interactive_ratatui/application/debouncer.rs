use std::time::{Duration, Instant};

/// Single-slot delayed task: at most one value is pending, and each
/// `schedule` supersedes the previous one and restarts the quiet interval.
///
/// Time is passed in by the caller so the event loop and tests share one clock.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Drop the pending value, if any, without firing it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending value once the quiet interval has fully elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, scheduled_at)| now.saturating_duration_since(*scheduled_at) >= self.delay);

        if due { self.cancel() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_nothing_fires_without_schedule() {
        let mut debouncer: Debouncer<String> = Debouncer::new(DELAY);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(Instant::now() + DELAY * 10), None);
    }

    #[test]
    fn test_fires_once_after_quiet_interval() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("dad".to_string(), start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("dad".to_string())
        );
        // Already fired
        assert_eq!(debouncer.poll(start + Duration::from_millis(2000)), None);
    }

    #[test]
    fn test_rapid_schedules_keep_only_latest_and_reset_timer() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule("d".to_string(), start);
        debouncer.schedule("da".to_string(), start + Duration::from_millis(200));
        debouncer.schedule("dad".to_string(), start + Duration::from_millis(400));

        // 500ms after the first edit but only 100ms after the last one
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(900)),
            Some("dad".to_string())
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("dad".to_string(), start);

        assert_eq!(debouncer.cancel(), Some("dad".to_string()));
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
        assert_eq!(debouncer.cancel(), None);
    }

    #[test]
    fn test_clock_before_schedule_does_not_fire() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(1u8, start);

        assert_eq!(debouncer.poll(start - Duration::from_millis(100)), None);
        assert_eq!(debouncer.delay(), DELAY);
    }
}
