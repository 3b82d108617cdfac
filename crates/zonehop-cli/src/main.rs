//! `zonehop` — convert a moment across your timezone roster.
//!
//! The binary owns the two impurities the core library refuses: it reads the
//! system clock (passed down as the anchor) and the roster file. Timestamp
//! input is never an error (junk falls back to "now"); zone names and roster
//! files are validated and fail loudly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use zonehop_core::calendar::CalendarUrl;
use zonehop_core::convert::{
    format_display, normalize_input, now_in_zone_truncated, parse_input_for_zone,
};
use zonehop_core::zones::{parse_zone, Roster};

#[derive(Parser)]
#[command(
    name = "zonehop",
    version,
    about = "Convert a moment across your timezone roster"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the moment in every roster timezone
    Convert {
        /// IANA zone the input is read in (default: first roster entry)
        #[arg(long)]
        zone: Option<String>,
        /// Moment to convert, as YYYY-MM-DDTHH:mm (default: now)
        #[arg(long)]
        at: Option<String>,
        /// JSON roster file overriding the built-in list
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// Print the current minute in a zone, in input form
    Now {
        /// IANA zone (default: first roster entry)
        #[arg(long)]
        zone: Option<String>,
        /// JSON roster file overriding the built-in list
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// Print a pre-filled Google Calendar URL for a one-hour event
    Calendar {
        /// IANA zone the input is read in (default: first roster entry)
        #[arg(long)]
        zone: Option<String>,
        /// Event start, as YYYY-MM-DDTHH:mm (default: now)
        #[arg(long)]
        at: Option<String>,
        /// Event title
        #[arg(long)]
        title: Option<String>,
        /// Event description
        #[arg(long)]
        details: Option<String>,
        /// JSON roster file overriding the built-in list
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// List the active timezone roster
    Zones {
        /// JSON roster file overriding the built-in list
        #[arg(long)]
        roster: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Convert { zone, at, roster } => run_convert(zone.as_deref(), at.as_deref(), roster.as_deref()),
        Command::Now { zone, roster } => run_now(zone.as_deref(), roster.as_deref()),
        Command::Calendar {
            zone,
            at,
            title,
            details,
            roster,
        } => run_calendar(zone.as_deref(), at.as_deref(), title, details, roster.as_deref()),
        Command::Zones { roster } => run_zones(roster.as_deref()),
    }
}

fn run_convert(zone: Option<&str>, at: Option<&str>, roster: Option<&Path>) -> Result<()> {
    let roster = load_roster(roster)?;
    let zone = select_zone(zone, &roster)?;
    let stamp = resolve_stamp(at, zone);

    let width = label_width(&roster);
    for entry in roster.iter() {
        println!("{:<width$}  {}", entry.label, format_display(stamp, entry.zone));
    }
    println!();
    println!("Input: {} ({})", normalize_input(stamp), zone.name());
    Ok(())
}

fn run_now(zone: Option<&str>, roster: Option<&Path>) -> Result<()> {
    let roster = load_roster(roster)?;
    let zone = select_zone(zone, &roster)?;
    println!("{}", normalize_input(now_in_zone_truncated(Utc::now(), zone)));
    Ok(())
}

fn run_calendar(
    zone: Option<&str>,
    at: Option<&str>,
    title: Option<String>,
    details: Option<String>,
    roster: Option<&Path>,
) -> Result<()> {
    let roster = load_roster(roster)?;
    let zone = select_zone(zone, &roster)?;
    let stamp = resolve_stamp(at, zone);

    let mut url = CalendarUrl::new(stamp);
    if let Some(title) = title {
        url = url.with_title(title);
    }
    if let Some(details) = details {
        url = url.with_details(details);
    }
    println!("{}", url.build());
    Ok(())
}

fn run_zones(roster: Option<&Path>) -> Result<()> {
    let roster = load_roster(roster)?;
    let width = label_width(&roster);
    for entry in roster.iter() {
        println!("{:<width$}  {}", entry.label, entry.zone.name());
    }
    Ok(())
}

/// Parse `--at` against the selected zone, defaulting to the current minute.
fn resolve_stamp(at: Option<&str>, zone: Tz) -> chrono::DateTime<Tz> {
    let anchor = Utc::now();
    match at {
        Some(text) => parse_input_for_zone(anchor, text, zone),
        None => now_in_zone_truncated(anchor, zone),
    }
}

fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading roster file {}", path.display()))?;
            Roster::from_json_str(&text)
                .with_context(|| format!("parsing roster file {}", path.display()))
        }
        None => Ok(Roster::default_set()),
    }
}

fn select_zone(arg: Option<&str>, roster: &Roster) -> Result<Tz> {
    match arg {
        Some(name) => Ok(parse_zone(name)?),
        None => Ok(roster.primary().zone),
    }
}

fn label_width(roster: &Roster) -> usize {
    roster.iter().map(|entry| entry.label.len()).max().unwrap_or(0)
}
