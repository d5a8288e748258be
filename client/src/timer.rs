//! Elapsed-time ticker for an active shift or attendance session.
//!
//! Elapsed seconds are always recomputed from the wall-clock delta against
//! the fixed start instant, never accumulated tick by tick, so scheduling
//! jitter in the interval cannot drift the displayed value.

use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// A standard full shift, after which the timer reports completion.
pub const FULL_SHIFT_SECONDS: i64 = 8 * 3600;

#[derive(Debug, Clone, Copy)]
pub struct ShiftTimer {
    started_at: DateTime<Utc>,
    active: bool,
}

impl ShiftTimer {
    pub fn new(started_at: DateTime<Utc>, active: bool) -> Self {
        Self { started_at, active }
    }

    /// Builds a timer from a time-of-day start, as reported for shifts that
    /// only carry `shift_start_time`. A start later than the current local
    /// time means the shift began yesterday (overnight shift).
    pub fn from_start_time(start: NaiveTime, active: bool) -> Self {
        Self::from_start_time_at(start, Local::now(), active)
    }

    /// As [`ShiftTimer::from_start_time`], anchored to an explicit `now`.
    pub fn from_start_time_at(start: NaiveTime, now: DateTime<Local>, active: bool) -> Self {
        let mut started = now.date_naive().and_time(start);
        if started > now.naive_local() {
            started = started - Duration::days(1);
        }
        let started_at = Local
            .from_local_datetime(&started)
            .earliest()
            .unwrap_or(now)
            .with_timezone(&Utc);
        Self { started_at, active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whole seconds elapsed at `now`, clamped at zero. An inactive timer
    /// always reports zero regardless of its start instant.
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> i64 {
        if !self.active {
            return 0;
        }
        (now - self.started_at).num_seconds().max(0)
    }

    pub fn elapsed(&self) -> i64 {
        self.elapsed_at(Utc::now())
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> i64 {
        (FULL_SHIFT_SECONDS - self.elapsed_at(now)).max(0)
    }

    pub fn is_complete_at(&self, now: DateTime<Utc>) -> bool {
        self.active && self.elapsed_at(now) >= FULL_SHIFT_SECONDS
    }

    /// `HH:MM:SS` zero-padded rendering of the elapsed time at `now`.
    pub fn display_at(&self, now: DateTime<Utc>) -> String {
        format_elapsed(self.elapsed_at(now))
    }

    pub fn display(&self) -> String {
        self.display_at(Utc::now())
    }
}

pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Drives the timer at a one-second cadence, publishing the elapsed seconds
/// on every tick. Stops when the timer is inactive or the receiver is gone.
pub async fn run(timer: ShiftTimer, updates: watch::Sender<i64>) {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        interval.tick().await;
        if updates.send(timer.elapsed()).is_err() {
            break;
        }
        if !timer.is_active() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap()
    }

    #[test]
    fn elapsed_is_wall_clock_delta() {
        let timer = ShiftTimer::new(start(), true);
        let now = start() + Duration::seconds(3661);
        assert_eq!(timer.elapsed_at(now), 3661);
        assert_eq!(timer.display_at(now), "01:01:01");
    }

    #[test]
    fn inactive_timer_reports_zero() {
        let timer = ShiftTimer::new(start(), false);
        let now = start() + Duration::hours(5);
        assert_eq!(timer.elapsed_at(now), 0);
        assert_eq!(timer.display_at(now), "00:00:00");
    }

    #[test]
    fn elapsed_never_goes_negative() {
        let timer = ShiftTimer::new(start(), true);
        let now = start() - Duration::seconds(30);
        assert_eq!(timer.elapsed_at(now), 0);
    }

    #[test]
    fn start_time_earlier_today_measures_from_this_morning() {
        let now = Local.with_ymd_and_hms(2024, 5, 6, 12, 0, 0).unwrap();
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let timer = ShiftTimer::from_start_time_at(start, now, true);
        assert_eq!(timer.elapsed_at(now.with_timezone(&Utc)), 3 * 3600);
    }

    #[test]
    fn start_time_later_than_now_began_yesterday() {
        // 01:00 local, shift start 22:00: the shift is three hours old,
        // not negative.
        let now = Local.with_ymd_and_hms(2024, 5, 6, 1, 0, 0).unwrap();
        let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        let timer = ShiftTimer::from_start_time_at(start, now, true);
        assert_eq!(timer.elapsed_at(now.with_timezone(&Utc)), 3 * 3600);
    }

    #[test]
    fn remaining_counts_down_to_full_shift() {
        let timer = ShiftTimer::new(start(), true);
        let now = start() + Duration::hours(6);
        assert_eq!(timer.remaining_at(now), 2 * 3600);
        assert!(!timer.is_complete_at(now));
        assert!(timer.is_complete_at(start() + Duration::hours(8)));
    }

    #[test]
    fn display_pads_every_component() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(3600), "01:00:00");
        assert_eq!(format_elapsed(10 * 3600 + 2 * 60 + 3), "10:02:03");
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_publishes_once_per_second() {
        let (tx, mut rx) = watch::channel(0i64);
        let timer = ShiftTimer::new(Utc::now(), true);
        tokio::spawn(run(timer, tx));

        tokio::time::advance(std::time::Duration::from_secs(3)).await;
        rx.changed().await.unwrap();
        assert!(*rx.borrow() >= 0);
    }
}
