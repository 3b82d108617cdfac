//! Wall-clock conversion between an editable input string, an absolute
//! instant, and display or calendar-ready formatted strings.
//!
//! All functions take explicit inputs (no system clock access) — the caller
//! provides the "now" anchor where a fallback needs one, keeping these
//! functions pure and deterministically testable.
//!
//! # Design Principle
//!
//! Nothing in this module fails. Input that cannot be interpreted as a
//! wall-clock time degrades to the anchor truncated to the minute, in the
//! requested zone. Consumers render whatever comes back; there is no error
//! path for them to handle.
//!
//! # Functions
//!
//! - [`parse_input_for_zone`] — Interpret an editable-field string as wall-clock time in a zone
//! - [`normalize_input`] — Format a stamp back into the editable-field pattern
//! - [`format_display`] — Re-project a stamp into another zone for display
//! - [`calendar_range`] — Produce the UTC start/end pair for a one-hour calendar event
//! - [`rezone_keeping_wall_clock`] — Move a stamp to another zone without changing its wall clock
//! - [`now_in_zone_truncated`] — The anchor in a zone, truncated to the minute
//! - [`clamp_to_hour`] — Round a stamp down to the top of its hour

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// The editable-field pattern: minute precision, no offset suffix.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Display pattern, e.g. `"18:09 - Fri 14 Nov"`.
const DISPLAY_FORMAT: &str = "%H:%M - %a %d %b";

/// Compact UTC pattern Google Calendar expects, e.g. `"20240115T100000Z"`.
const CALENDAR_FORMAT: &str = "%Y%m%dT%H%M%SZ";

// ── parse_input_for_zone ────────────────────────────────────────────────────

/// Interpret an editable-field string as wall-clock time in `zone`.
///
/// # Arguments
///
/// * `anchor` — The reference "now" instant (typically `Utc::now()`), used
///   only when `text` cannot be interpreted
/// * `text` — Expected as `YYYY-MM-DDTHH:mm`; a trailing `:ss` or a bare
///   `YYYY-MM-DD` date (midnight) are also accepted
/// * `zone` — The IANA timezone the wall-clock reading is anchored to
///
/// # Returns
///
/// The instant whose wall clock in `zone` matches `text`. If `text` is
/// malformed, or names a wall-clock time that does not exist in `zone`
/// (spring-forward gap), the result is [`now_in_zone_truncated`] of the
/// anchor instead — never an error. A wall-clock time that occurs twice
/// (fall-back overlap) resolves to the earlier offset.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use zonehop_core::convert::{format_display, parse_input_for_zone};
///
/// let anchor = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
/// let stamp = parse_input_for_zone(anchor, "2024-01-15T10:00", chrono_tz::Europe::Dublin);
/// // Madrid is one hour ahead of Dublin in January
/// assert_eq!(format_display(stamp, chrono_tz::Europe::Madrid), "11:00 - Mon 15 Jan");
/// ```
pub fn parse_input_for_zone(anchor: DateTime<Utc>, text: &str, zone: Tz) -> DateTime<Tz> {
    parse_wall_clock(text)
        .and_then(|naive| resolve_wall_clock(zone, naive))
        .unwrap_or_else(|| now_in_zone_truncated(anchor, zone))
}

// ── normalize_input ─────────────────────────────────────────────────────────

/// Format a stamp back into the editable-field pattern, in its own zone.
///
/// Minute precision: seconds and sub-seconds are discarded. Parsing the
/// result back with [`parse_input_for_zone`] and the same zone lands on the
/// same wall-clock minute.
pub fn normalize_input(stamp: DateTime<Tz>) -> String {
    stamp.format(INPUT_FORMAT).to_string()
}

// ── format_display ──────────────────────────────────────────────────────────

/// Re-project a stamp into `zone` and format it for display.
///
/// Output shape is `HH:mm - Dow DD Mon` (24-hour clock, abbreviated English
/// weekday and month, no year). `zone` may differ from the stamp's own zone;
/// the stamp itself is not changed.
pub fn format_display(stamp: DateTime<Tz>, zone: Tz) -> String {
    stamp.with_timezone(&zone).format(DISPLAY_FORMAT).to_string()
}

// ── calendar_range ──────────────────────────────────────────────────────────

/// The UTC start/end pair for a one-hour calendar event.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarRange {
    /// Event start in compact UTC form (`YYYYMMDDTHHmmssZ`).
    pub start: String,
    /// Event end, exactly one hour after `start`.
    pub end: String,
}

/// Produce the UTC timestamps a one-hour calendar event needs.
///
/// `start` is the stamp converted to UTC; `end` is one hour of absolute time
/// later. The addition happens on the instant, not the wall clock, so the
/// span is one hour regardless of daylight-saving transitions in any zone.
pub fn calendar_range(stamp: DateTime<Tz>) -> CalendarRange {
    let start_utc = stamp.with_timezone(&Utc);
    let end_utc = start_utc + Duration::hours(1);
    CalendarRange {
        start: start_utc.format(CALENDAR_FORMAT).to_string(),
        end: end_utc.format(CALENDAR_FORMAT).to_string(),
    }
}

// ── rezone_keeping_wall_clock ───────────────────────────────────────────────

/// Re-anchor a stamp's wall clock in a different zone.
///
/// The displayed date and time stay the same; the instant moves to whatever
/// absolute time shows that wall clock in `zone`. Used when the planner
/// switches their own timezone and expects the editable field not to jump.
/// If the wall clock does not exist in `zone` (spring-forward gap), the
/// result is [`now_in_zone_truncated`] of the anchor instead.
pub fn rezone_keeping_wall_clock(
    anchor: DateTime<Utc>,
    stamp: DateTime<Tz>,
    zone: Tz,
) -> DateTime<Tz> {
    resolve_wall_clock(zone, stamp.naive_local())
        .unwrap_or_else(|| now_in_zone_truncated(anchor, zone))
}

// ── now_in_zone_truncated ───────────────────────────────────────────────────

/// The anchor expressed in `zone`, with seconds and sub-seconds zeroed.
///
/// This is both the "Now" action and the universal fallback when parsing
/// fails or no prior stamp exists.
pub fn now_in_zone_truncated(anchor: DateTime<Utc>, zone: Tz) -> DateTime<Tz> {
    truncate_sub_minute(anchor.with_timezone(&zone))
}

// ── clamp_to_hour ───────────────────────────────────────────────────────────

/// Round a stamp down to the top of its hour, in its own wall clock.
///
/// Minutes, seconds, and sub-seconds become zero; hour and date are
/// unchanged. Idempotent. If zeroing the minutes lands in a spring-forward
/// gap (possible only in zones with sub-hour offset shifts), the sub-hour
/// duration is subtracted from the absolute instant instead.
pub fn clamp_to_hour(stamp: DateTime<Tz>) -> DateTime<Tz> {
    let zone = stamp.timezone();
    stamp
        .date_naive()
        .and_hms_opt(stamp.hour(), 0, 0)
        .and_then(|wall| resolve_wall_clock(zone, wall))
        .unwrap_or_else(|| {
            let sub_hour = Duration::minutes(i64::from(stamp.minute()))
                + Duration::seconds(i64::from(stamp.second()))
                + Duration::nanoseconds(i64::from(stamp.nanosecond()));
            stamp - sub_hour
        })
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse the editable-field pattern, tolerating seconds and date-only forms.
fn parse_wall_clock(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, INPUT_FORMAT) {
        return Some(naive);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Map a wall-clock reading onto an instant in `zone`.
///
/// Overlapping readings take the earlier offset; readings inside a gap have
/// no instant and yield `None`.
fn resolve_wall_clock(zone: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(stamp) => Some(stamp),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// Zero the seconds and sub-seconds of a stamp.
///
/// Offsets are whole minutes in every IANA zone, so subtracting the sub-minute
/// part of the wall clock from the instant is exact and always representable.
fn truncate_sub_minute(stamp: DateTime<Tz>) -> DateTime<Tz> {
    let sub_minute = Duration::seconds(i64::from(stamp.second()))
        + Duration::nanoseconds(i64::from(stamp.nanosecond()));
    stamp - sub_minute
}

// ── Tests ───────────────────────────────────────────────────────────────────
