//! Resolving "yesterday" in Bulls home time.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::America::Chicago;

/// The civil date of yesterday in America/Chicago, independent of the host
/// timezone.
pub fn chicago_yesterday() -> NaiveDate {
    chicago_yesterday_at(Utc::now())
}

/// Same computation against an explicit current instant, so tests can pin
/// the clock. Subtracts 24 hours from the zoned instant and truncates to
/// the local calendar date.
pub fn chicago_yesterday_at(now_utc: DateTime<Utc>) -> NaiveDate {
    let now_ct = now_utc.with_timezone(&Chicago);
    (now_ct - Duration::days(1)).date_naive()
}
