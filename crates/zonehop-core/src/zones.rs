//! The timezone roster: the ordered list of places a moment is shown in.
//!
//! A roster is static configuration (label plus IANA zone pairs) consumed as
//! iteration input by the conversion functions. Zone names are validated
//! here, once, at the boundary; everything past this module works with
//! already-parsed [`Tz`] values and cannot encounter an unknown zone.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{Result, ZonehopError};

/// One roster line: a display label and the IANA zone it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    pub label: String,
    pub zone: Tz,
}

impl ZoneEntry {
    pub fn new(label: impl Into<String>, zone: Tz) -> Self {
        Self {
            label: label.into(),
            zone,
        }
    }
}

/// Roster entry as it appears on disk, zone still a string.
#[derive(Debug, Deserialize)]
struct RawEntry {
    label: String,
    zone: String,
}

/// An ordered, non-empty list of [`ZoneEntry`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<ZoneEntry>,
}

impl Roster {
    /// Build a roster from already-validated entries.
    ///
    /// # Errors
    ///
    /// Returns [`ZonehopError::EmptyRoster`] if `entries` is empty — the
    /// first entry doubles as the default zone, so a roster must have one.
    pub fn new(entries: Vec<ZoneEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ZonehopError::EmptyRoster);
        }
        Ok(Self { entries })
    }

    /// The built-in roster: Dublin, Amsterdam, Perth.
    pub fn default_set() -> Self {
        Self {
            entries: vec![
                ZoneEntry::new("Dublin", chrono_tz::Europe::Dublin),
                ZoneEntry::new("Amsterdam", chrono_tz::Europe::Amsterdam),
                ZoneEntry::new("Perth", chrono_tz::Australia::Perth),
            ],
        }
    }

    /// Parse a roster from a JSON array of `{"label": ..., "zone": ...}`
    /// objects, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ZonehopError::InvalidRoster`] for malformed JSON,
    /// [`ZonehopError::InvalidTimezone`] for an unrecognized zone name, and
    /// [`ZonehopError::EmptyRoster`] for an empty array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawEntry> =
            serde_json::from_str(json).map_err(|e| ZonehopError::InvalidRoster(e.to_string()))?;
        let entries = raw
            .into_iter()
            .map(|entry| Ok(ZoneEntry::new(entry.label, parse_zone(&entry.zone)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[ZoneEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneEntry> {
        self.entries.iter()
    }

    /// The first entry, which doubles as the default zone.
    pub fn primary(&self) -> &ZoneEntry {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse an IANA timezone name into a [`Tz`].
///
/// # Errors
///
/// Returns [`ZonehopError::InvalidTimezone`] if `name` is not a recognized
/// IANA zone.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| ZonehopError::InvalidTimezone(format!("'{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_order_and_zones() {
        let roster = Roster::default_set();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.primary().label, "Dublin");
        assert_eq!(roster.primary().zone, chrono_tz::Europe::Dublin);
        assert_eq!(roster.entries()[2].zone, chrono_tz::Australia::Perth);
    }

    #[test]
    fn test_from_json_preserves_order() {
        let roster = Roster::from_json_str(
            r#"[
                {"label": "Tokyo", "zone": "Asia/Tokyo"},
                {"label": "NYC", "zone": "America/New_York"}
            ]"#,
        )
        .unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.primary().label, "Tokyo");
        assert_eq!(roster.entries()[1].zone, chrono_tz::America::New_York);
    }

    #[test]
    fn test_from_json_rejects_unknown_zone() {
        let result = Roster::from_json_str(r#"[{"label": "Nowhere", "zone": "Not/AZone"}]"#);
        assert!(matches!(result, Err(ZonehopError::InvalidTimezone(_))));
    }

    #[test]
    fn test_from_json_rejects_empty_array() {
        let result = Roster::from_json_str("[]");
        assert!(matches!(result, Err(ZonehopError::EmptyRoster)));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        let result = Roster::from_json_str("{not json");
        assert!(matches!(result, Err(ZonehopError::InvalidRoster(_))));
    }

    #[test]
    fn test_parse_zone_known() {
        assert_eq!(parse_zone("Europe/Dublin").unwrap(), chrono_tz::Europe::Dublin);
    }

    #[test]
    fn test_parse_zone_unknown() {
        let err = parse_zone("Atlantis/Lemuria").unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
    }
}
