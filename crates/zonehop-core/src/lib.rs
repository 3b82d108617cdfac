//! # zonehop-core
//!
//! Pure timezone conversion for shared-moment planning.
//!
//! Given a wall-clock date/time interpreted in a chosen IANA timezone,
//! zonehop re-expresses that moment across an ordered roster of other
//! timezones and builds a pre-filled Google Calendar URL for a one-hour
//! event. Everything is deterministic arithmetic over the embedded IANA
//! timezone database; the system clock enters only as an explicit anchor
//! argument supplied by the caller.
//!
//! ## Modules
//!
//! - [`convert`] — Wall-clock parsing, re-projection, truncation, and calendar formatting
//! - [`zones`] — The timezone roster (label + IANA zone configuration)
//! - [`calendar`] — Google Calendar URL construction
//! - [`error`] — Error types

pub mod calendar;
pub mod convert;
pub mod error;
pub mod zones;

pub use calendar::{CalendarUrl, DEFAULT_EVENT_TITLE};
pub use convert::{
    calendar_range, clamp_to_hour, format_display, normalize_input, now_in_zone_truncated,
    parse_input_for_zone, rezone_keeping_wall_clock, CalendarRange, INPUT_FORMAT,
};
pub use error::ZonehopError;
pub use zones::{parse_zone, Roster, ZoneEntry};
