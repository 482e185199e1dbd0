use chrono::{DateTime, Duration, Utc};

/// The instant a branch's last commit must predate to count as stale.
///
/// Saturates at the earliest representable instant, so an oversized threshold
/// marks nothing as stale.
pub fn cutoff(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(days))
        .and_then(|threshold| now.checked_sub_signed(threshold))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Strictly older than the cutoff; a commit exactly at the cutoff is still fresh.
pub fn is_stale(last_commit: DateTime<Utc>, cutoff: DateTime<Utc>) -> bool {
    last_commit < cutoff
}

pub fn age_days(last_commit: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_commit).num_days()
}
