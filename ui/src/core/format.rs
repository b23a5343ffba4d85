//! Formatting helpers for presenting scores and record metadata.

use api::RecordTimestamp;
use once_cell::sync::OnceCell;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

/// Characters of submitted text shown in the history table.
pub const TEXT_PREVIEW_CHARS: usize = 500;

pub fn format_score(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "—".to_string()
    }
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "—".to_string()
    }
}

/// Truncate on character boundaries, never inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// RFC 3339, or the naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` form the service
/// emits (taken as UTC), or an epoch number.
pub fn parse_timestamp(timestamp: &RecordTimestamp) -> Option<OffsetDateTime> {
    match timestamp {
        RecordTimestamp::Iso(raw) => {
            let raw = raw.trim();
            OffsetDateTime::parse(raw, &Rfc3339).ok().or_else(|| {
                PrimitiveDateTime::parse(
                    raw,
                    format_description!(
                        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
                    ),
                )
                .ok()
                .map(PrimitiveDateTime::assume_utc)
            })
        }
        numeric => {
            let nanos = numeric.epoch_millis()? * 1_000_000.0;
            OffsetDateTime::from_unix_timestamp_nanos(nanos as i128).ok()
        }
    }
}

static DISPLAY_OFFSET: OnceCell<UtcOffset> = OnceCell::new();

/// Record the machine's UTC offset for timestamp display. Call from `main`
/// before any other thread starts: on Unix the offset is only readable while
/// the process is single-threaded. Later calls are no-ops.
pub fn capture_local_offset() -> UtcOffset {
    *DISPLAY_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

/// Local time, e.g. `2024-05-01 12:00 +02:00`, or `2024-05-01 10:00 UTC` when
/// the offset is zero or could not be determined. Unparseable input is shown
/// as received.
pub fn format_timestamp(timestamp: &RecordTimestamp) -> String {
    format_timestamp_in(timestamp, capture_local_offset())
}

pub fn format_timestamp_in(timestamp: &RecordTimestamp, offset: UtcOffset) -> String {
    let Some(instant) = parse_timestamp(timestamp) else {
        return timestamp.raw_text();
    };
    let local = instant.to_offset(offset);
    let formatted = if offset.is_utc() {
        local.format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
    } else {
        local.format(format_description!(
            "[year]-[month]-[day] [hour]:[minute] [offset_hour sign:mandatory]:[offset_minute]"
        ))
    };
    formatted.unwrap_or_else(|_| timestamp.raw_text())
}
