//! Pure date helpers for goal durations and the streak grace period.

use chrono::{DateTime, Duration, Months, Utc};

use super::GoalDuration;

/// Hours a streak survives without a new check-in.
const STREAK_GRACE_HOURS: i64 = 48;

/// Compute a goal's end date from its start date and duration.
///
/// Weekly adds 7 days; monthly and yearly use calendar arithmetic via
/// `chrono::Months`, which clamps to the last valid day of the target
/// month (Jan 31 + 1 month -> Feb 28, or Feb 29 in a leap year).
pub fn end_date(start: DateTime<Utc>, duration: GoalDuration) -> DateTime<Utc> {
    match duration {
        GoalDuration::Weekly => start + Duration::days(7),
        GoalDuration::Monthly => start.checked_add_months(Months::new(1)).unwrap_or(start),
        GoalDuration::Yearly => start.checked_add_months(Months::new(12)).unwrap_or(start),
    }
}

/// Whether a streak is still alive at `now`.
///
/// False when no check-in has ever happened; otherwise true iff strictly
/// less than 48 hours have elapsed since the last check-in.
pub fn is_streak_active(last_check_in: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_check_in {
        Some(last) => now - last < Duration::hours(STREAK_GRACE_HOURS),
        None => false,
    }
}
