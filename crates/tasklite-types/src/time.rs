use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Current UTC time truncated to millisecond precision.
///
/// Timestamps are persisted as epoch milliseconds; truncating at creation
/// keeps the in-memory value identical to what loading the snapshot back
/// would produce.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(TimeDelta::milliseconds(1)).unwrap_or(now)
}
