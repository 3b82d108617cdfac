//! Google Calendar handoff: build the pre-filled `calendar/render` URL for
//! a one-hour event at a given stamp.
//!
//! Only URL construction lives here. Opening the URL is the caller's
//! concern.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::convert::calendar_range;

/// Event title used when the caller does not supply one.
pub const DEFAULT_EVENT_TITLE: &str = "Boys Time";

const RENDER_ENDPOINT: &str = "https://calendar.google.com/calendar/render";

/// Builder for a Google Calendar event-creation URL.
///
/// The event starts at the stamp and lasts one hour. Title defaults to
/// [`DEFAULT_EVENT_TITLE`]; details default to empty. The stamp's own IANA
/// zone name is passed through as the calendar's `ctz` parameter so the
/// event renders in the planner's zone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use zonehop_core::calendar::CalendarUrl;
/// use zonehop_core::convert::parse_input_for_zone;
///
/// let anchor = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
/// let stamp = parse_input_for_zone(anchor, "2024-01-15T10:00", chrono_tz::Europe::Dublin);
/// let url = CalendarUrl::new(stamp).with_title("Raid night").build();
/// assert!(url.contains("dates=20240115T100000Z/20240115T110000Z"));
/// assert!(url.contains("text=Raid%20night"));
/// ```
#[derive(Debug, Clone)]
pub struct CalendarUrl {
    stamp: DateTime<Tz>,
    title: String,
    details: String,
}

impl CalendarUrl {
    pub fn new(stamp: DateTime<Tz>) -> Self {
        Self {
            stamp,
            title: DEFAULT_EVENT_TITLE.to_string(),
            details: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn build(self) -> String {
        let range = calendar_range(self.stamp);

        let mut url = String::new();
        url.push_str(RENDER_ENDPOINT);
        url.push_str("?action=TEMPLATE");
        url.push_str("&text=");
        url.push_str(&urlencoding::encode(&self.title));
        url.push_str("&dates=");
        url.push_str(&range.start);
        url.push('/');
        url.push_str(&range.end);
        url.push_str("&details=");
        url.push_str(&urlencoding::encode(&self.details));
        url.push_str("&sf=true&output=xml");
        url.push_str("&ctz=");
        url.push_str(&urlencoding::encode(self.stamp.timezone().name()));
        url
    }
}
