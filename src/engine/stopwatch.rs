use std::time::Duration;

use crate::utils::TimeUtils;
use crate::utils::app_time::AppInstant;

/// A cancellable repeating schedule.
///
/// Holding a value means the schedule is live; dropping it cancels every
/// future period. Polling is deadline based so a late frame never loses
/// periods: they are all reported on the next poll.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: AppInstant,
}

impl IntervalTimer {
    /// First period becomes due one `period` after `now`.
    pub fn start(period: Duration, now: AppInstant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> AppInstant {
        self.next_due
    }

    /// Number of whole periods that became due since the last poll.
    pub fn poll(&mut self, now: AppInstant) -> u64 {
        if now < self.next_due || self.period.is_zero() {
            return 0;
        }
        let overdue = now.duration_since(self.next_due).as_nanos();
        let due = 1 + (overdue / self.period.as_nanos()) as u64;
        let advance = self.period.as_nanos().saturating_mul(due as u128);
        self.next_due += Duration::from_nanos(advance.min(u64::MAX as u128) as u64);
        due
    }
}

/// Elapsed-time counter for presenter mode.
///
/// `elapsed_seconds` only grows while running. The repeating tick lives in
/// `ticker` and exists exactly while the stopwatch runs.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    period: Duration,
    running: bool,
    elapsed_seconds: u64,
    ticker: Option<IntervalTimer>,
}

impl Stopwatch {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: false,
            elapsed_seconds: 0,
            ticker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// `MM:SS` reading for display.
    pub fn display(&self) -> String {
        TimeUtils::format_mm_ss(self.elapsed_seconds)
    }

    /// Flip between running and paused. Starting arms a fresh tick schedule,
    /// pausing cancels it and freezes the count.
    pub fn toggle(&mut self, now: AppInstant) {
        if self.running {
            self.stop();
        } else {
            self.start(now);
        }
    }

    pub fn start(&mut self, now: AppInstant) {
        if self.running {
            return;
        }
        self.running = true;
        self.ticker = Some(IntervalTimer::start(self.period, now));
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.ticker = None;
    }

    /// Back to 00:00, stopped.
    pub fn reset(&mut self) {
        self.stop();
        self.elapsed_seconds = 0;
    }

    /// Count one second. Ignored while paused.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
    }

    /// Apply every tick that has come due. Returns how many were applied.
    pub fn poll(&mut self, now: AppInstant) -> u64 {
        let due = match self.ticker.as_mut() {
            Some(ticker) if self.running => ticker.poll(now),
            _ => 0,
        };
        for _ in 0..due {
            self.tick();
        }
        due
    }

    /// When the next tick is expected, if the stopwatch is running.
    pub fn next_deadline(&self) -> Option<AppInstant> {
        self.ticker.as_ref().map(IntervalTimer::next_due)
    }

    /// Cancel the schedule without touching the count. Used on shutdown.
    pub fn teardown(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn interval_timer_reports_nothing_before_first_period() {
        let t0 = now();
        let mut timer = IntervalTimer::start(SEC, t0);
        assert_eq!(timer.poll(t0), 0);
        assert_eq!(timer.poll(t0 + Duration::from_millis(999)), 0);
        assert_eq!(timer.poll(t0 + SEC), 1);
        assert_eq!(timer.poll(t0 + SEC), 0);
    }

    #[test]
    fn interval_timer_catches_up_after_a_long_frame() {
        let t0 = now();
        let mut timer = IntervalTimer::start(SEC, t0);
        assert_eq!(timer.poll(t0 + Duration::from_millis(3_500)), 3);
        assert_eq!(timer.next_due(), t0 + Duration::from_secs(4));
        assert_eq!(timer.poll(t0 + Duration::from_secs(4)), 1);
    }

    #[test]
    fn three_ticks_after_start_reads_three() {
        let t0 = now();
        let mut sw = Stopwatch::new(SEC);
        sw.toggle(t0);
        assert!(sw.is_running());
        assert_eq!(sw.poll(t0 + Duration::from_secs(3)), 3);
        assert_eq!(sw.elapsed_seconds(), 3);
        assert_eq!(sw.display(), "00:03");
    }

    #[test]
    fn pausing_freezes_the_count() {
        let t0 = now();
        let mut sw = Stopwatch::new(SEC);
        sw.toggle(t0);
        sw.poll(t0 + Duration::from_secs(2));
        sw.toggle(t0 + Duration::from_millis(2_500));
        assert!(!sw.is_running());
        assert_eq!(sw.next_deadline(), None);

        assert_eq!(sw.poll(t0 + Duration::from_secs(10)), 0);
        sw.tick();
        assert_eq!(sw.elapsed_seconds(), 2);
    }

    #[test]
    fn resume_rearms_from_the_resume_instant() {
        let t0 = now();
        let mut sw = Stopwatch::new(SEC);
        sw.toggle(t0);
        sw.poll(t0 + SEC);
        sw.toggle(t0 + Duration::from_secs(2));

        let resumed = t0 + Duration::from_secs(30);
        sw.toggle(resumed);
        assert_eq!(sw.poll(resumed), 0);
        assert_eq!(sw.poll(resumed + SEC), 1);
        assert_eq!(sw.elapsed_seconds(), 2);
    }

    #[test]
    fn reset_always_stops_and_zeroes() {
        let t0 = now();
        let mut sw = Stopwatch::new(SEC);
        sw.reset();
        assert_eq!((sw.is_running(), sw.elapsed_seconds()), (false, 0));

        sw.toggle(t0);
        sw.poll(t0 + Duration::from_secs(42));
        sw.reset();
        assert_eq!((sw.is_running(), sw.elapsed_seconds()), (false, 0));
        assert_eq!(sw.display(), "00:00");
        assert_eq!(sw.next_deadline(), None);
    }

    #[test]
    fn teardown_cancels_schedule_but_keeps_count() {
        let t0 = now();
        let mut sw = Stopwatch::new(SEC);
        sw.start(t0);
        sw.poll(t0 + Duration::from_secs(5));
        sw.teardown();
        assert_eq!(sw.poll(t0 + Duration::from_secs(60)), 0);
        assert_eq!(sw.elapsed_seconds(), 5);
    }

    #[test]
    fn start_twice_does_not_restart_schedule() {
        let t0 = now();
        let mut sw = Stopwatch::new(SEC);
        sw.start(t0);
        sw.start(t0 + Duration::from_millis(900));
        assert_eq!(sw.next_deadline(), Some(t0 + SEC));
    }
}
