/// Number of millis in one day
pub const DAY_MILLIS: i64 = 1000 * 60 * 60 * 24;

/// Decides whether enough time has passed since the last notification to a
/// signer for a new reminder to be sent.
///
/// A signer that was never notified is always due. Otherwise at least
/// `frequency_days` whole days must have passed, a partial day does not count.
/// An out of range timestamp saturates instead of overflowing.
pub fn is_reminder_due(time_last_sent: Option<i64>, frequency_days: i64, now: i64) -> bool {
    match time_last_sent {
        None => true,
        Some(last_sent) => {
            let elapsed_days = now.saturating_sub(last_sent).div_euclid(DAY_MILLIS);
            elapsed_days >= frequency_days
        }
    }
}
