/// Progress calculation for habits
///
/// Pure functions computing today/week/month progress, streaks, and
/// completion rates from a habit plus its logged history. Every function
/// takes an explicit `now` so results are deterministic and testable -
/// nothing in this module reads the clock or performs I/O.
///
/// Percentages are `f64` clamped to 100 on the upper bound; completed-day
/// counts are non-negative so no lower clamp is needed. Measurable
/// computations treat a missing or non-positive target as "never
/// completed" / 0% to stay total over degenerate inputs.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Frequency, Habit, HabitId, HabitKind, HabitLog, Milestone, Period};

/// Number of trailing days the completion rate is measured over
const COMPLETION_RATE_WINDOW_DAYS: u32 = 30;

/// Point-in-time progress summary for one habit
///
/// This is the value object the calculator hands back to callers building
/// responses; it carries no behavior of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub habit_id: HabitId,
    /// Percent of today's expectation met, in [0, 100]
    pub today_progress: f64,
    /// Percent of the current week's expectation met, in [0, 100]
    pub week_progress: f64,
    /// Percent of the current month's expectation met, in [0, 100]
    pub month_progress: f64,
    /// Consecutive completed days ending at today
    pub current_streak: u32,
    /// Percent of the trailing 30 days completed, in [0, 100]
    pub completion_rate: f64,
    /// Whether today already counts as completed
    pub completed_today: bool,
    /// First milestone in sequence order that is not yet completed
    pub next_milestone: Option<Milestone>,
}

/// Compute the full progress snapshot for a habit
pub fn snapshot(habit: &Habit, logs: &[HabitLog], now: DateTime<Utc>) -> ProgressSnapshot {
    ProgressSnapshot {
        habit_id: habit.id,
        today_progress: today_progress(habit, logs, now),
        week_progress: week_progress(habit, logs, now),
        month_progress: month_progress(habit, logs, now),
        current_streak: current_streak(habit, logs, now),
        completion_rate: completion_rate(habit, logs, now),
        completed_today: completed_on_day(habit, logs, now.date_naive()),
        next_milestone: habit.next_milestone().cloned(),
    }
}

/// Whether the habit counts as completed on the given UTC day
///
/// Binary: any log on that day. Measurable: the day's logged values sum to
/// at least the target. This predicate is the atomic building block behind
/// streaks, period progress, and completion rates.
pub fn completed_on_day(habit: &Habit, logs: &[HabitLog], day: NaiveDate) -> bool {
    match habit.kind {
        HabitKind::Binary => logs.iter().any(|log| log.day() == day),
        HabitKind::Measurable => match &habit.target {
            Some(target) if target.value > 0.0 => day_total(logs, day) >= target.value,
            _ => false,
        },
    }
}

/// Percent of today's expectation met
pub fn today_progress(habit: &Habit, logs: &[HabitLog], now: DateTime<Utc>) -> f64 {
    let today = now.date_naive();
    match habit.kind {
        HabitKind::Binary => {
            if logs.iter().any(|log| log.day() == today) {
                100.0
            } else {
                0.0
            }
        }
        HabitKind::Measurable => match &habit.target {
            Some(target) if target.value > 0.0 => {
                (day_total(logs, today) / target.value * 100.0).min(100.0)
            }
            _ => 0.0,
        },
    }
}

/// Count of consecutive completed days ending at today
///
/// Walks backward one day at a time and stops at the first day that fails
/// the completion predicate. The walk never goes past the habit's creation
/// date, so it terminates even on dense histories.
pub fn current_streak(habit: &Habit, logs: &[HabitLog], now: DateTime<Utc>) -> u32 {
    let floor = habit.created_at.date_naive();
    let mut day = now.date_naive();
    let mut streak = 0;

    while day >= floor && completed_on_day(habit, logs, day) {
        streak += 1;
        day = day - Duration::days(1);
    }

    streak
}

/// Percent of the current ISO week's expectation met
///
/// For weekly frequencies the denominator is the configured `times`; for
/// anything else it is the per-day approximation spread over the 7-day
/// window. A zero denominator yields 0.
pub fn week_progress(habit: &Habit, logs: &[HabitLog], now: DateTime<Utc>) -> f64 {
    let today = now.date_naive();
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let completed = completed_days_in_window(habit, logs, monday, 7);
    period_ratio(&habit.frequency, Period::Weekly, completed, 7)
}

/// Percent of the current calendar month's expectation met
pub fn month_progress(habit: &Habit, logs: &[HabitLog], now: DateTime<Utc>) -> f64 {
    let today = now.date_naive();
    let first = match NaiveDate::from_ymd_opt(today.year(), today.month(), 1) {
        Some(date) => date,
        None => return 0.0,
    };
    let window_len = match first.checked_add_months(Months::new(1)) {
        Some(next_first) => (next_first - first).num_days() as u32,
        None => return 0.0,
    };
    let completed = completed_days_in_window(habit, logs, first, window_len);
    period_ratio(&habit.frequency, Period::Monthly, completed, window_len)
}

/// Percent of the trailing 30 days on which the habit was completed
pub fn completion_rate(habit: &Habit, logs: &[HabitLog], now: DateTime<Utc>) -> f64 {
    let today = now.date_naive();
    let start = today - Duration::days(i64::from(COMPLETION_RATE_WINDOW_DAYS) - 1);
    let completed = completed_days_in_window(habit, logs, start, COMPLETION_RATE_WINDOW_DAYS);
    (f64::from(completed) / f64::from(COMPLETION_RATE_WINDOW_DAYS) * 100.0).min(100.0)
}

/// Sum of values logged on the given day
fn day_total(logs: &[HabitLog], day: NaiveDate) -> f64 {
    logs.iter()
        .filter(|log| log.day() == day)
        .map(|log| log.value)
        .sum()
}

/// Number of completed days in a window starting at `start`
fn completed_days_in_window(
    habit: &Habit,
    logs: &[HabitLog],
    start: NaiveDate,
    window_len: u32,
) -> u32 {
    start
        .iter_days()
        .take(window_len as usize)
        .filter(|day| completed_on_day(habit, logs, *day))
        .count() as u32
}

/// Completed-days ratio against the window's expectation
///
/// When the habit's own period matches the window, the denominator is the
/// configured `times`; otherwise it is `target_per_day()` spread across the
/// window. A denominator of zero yields 0 rather than a division error.
fn period_ratio(frequency: &Frequency, window: Period, completed: u32, window_len: u32) -> f64 {
    let expected = if frequency.period == window {
        u32::from(frequency.times)
    } else {
        frequency.target_per_day() * window_len
    };

    if expected == 0 {
        return 0.0;
    }
    (f64::from(completed) / f64::from(expected) * 100.0).min(100.0)
}
