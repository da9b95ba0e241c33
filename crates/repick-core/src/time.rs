//! Backend timestamp handling.
//!
//! The backend emits ISO-8601 timestamps that sometimes lack a timezone
//! designator; those are KST by contract. Listing surfaces render upload
//! times as coarse relative labels ("방금 전", "3시간 전").

use chrono::{DateTime, FixedOffset, Utc};

/// Timestamps without a zone designator are KST.
const KST_OFFSET: &str = "+09:00";

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 365 * DAY_MS;

fn has_zone_designator(value: &str) -> bool {
    if value.ends_with('Z') || value.ends_with('z') {
        return true;
    }
    // Trailing "+hh:mm" / "-hh:mm" offset.
    let bytes = value.as_bytes();
    if bytes.len() < 6 {
        return false;
    }
    let tail = &bytes[bytes.len() - 6..];
    (tail[0] == b'+' || tail[0] == b'-')
        && tail[1].is_ascii_digit()
        && tail[2].is_ascii_digit()
        && tail[3] == b':'
        && tail[4].is_ascii_digit()
        && tail[5].is_ascii_digit()
}

/// Parse a backend timestamp, defaulting the zone to KST when absent.
///
/// Returns `None` for empty or malformed input.
#[must_use]
pub fn parse_backend_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if has_zone_designator(trimmed) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{KST_OFFSET}")
    };
    DateTime::parse_from_rfc3339(&normalized).ok()
}

/// Relative upload-time label for a backend timestamp.
///
/// Future timestamps clamp to "방금 전". Malformed input renders as an
/// empty label rather than an error; a broken timestamp should never take
/// a listing card down.
#[must_use]
pub fn relative_time_label(value: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_backend_timestamp(value) else {
        return String::new();
    };

    let diff_ms = (now.timestamp_millis() - then.timestamp_millis()).max(0);

    if diff_ms < MINUTE_MS {
        "방금 전".to_string()
    } else if diff_ms < HOUR_MS {
        format!("{}분 전", diff_ms / MINUTE_MS)
    } else if diff_ms < DAY_MS {
        format!("{}시간 전", diff_ms / HOUR_MS)
    } else if diff_ms < MONTH_MS {
        format!("{}일 전", diff_ms / DAY_MS)
    } else if diff_ms < YEAR_MS {
        format!("{}개월 전", diff_ms / MONTH_MS)
    } else {
        format!("{}년 전", diff_ms / YEAR_MS)
    }
}
