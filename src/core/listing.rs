//! # List Presentation
//!
//! Ordering and formatting for the two lists. Kept free of any UI types so
//! the rules can be tested directly:
//!
//! - todos sort ascending by creation instant, ties and unparsable
//!   timestamps ordered by id (unparsable ones last);
//! - dates render as `D/MM/YY`, times as `HH:mm`, both `N/A` when the
//!   timestamp does not parse;
//! - display indices are 1-based positions, never stored fields.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::ClockZone;
use crate::api::{OwnerRecord, TodoRecord};

/// Shown for both date and time when `createdAt` is not a valid timestamp.
pub const PLACEHOLDER: &str = "N/A";

const DATE_FORMAT: &str = "%-d/%m/%y";
const TIME_FORMAT: &str = "%H:%M";

/// ISO layouts whose offset has no colon (`+0000`).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Offset-less layouts accepted after the offset-carrying ones fail.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_ONLY_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// A parsed `createdAt` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Carried an explicit offset (`Z`, `+07:00`, ...).
    Offset(DateTime<FixedOffset>),
    /// No offset; the wall-clock value as written.
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Parses the forms the backend is known to produce. `None` means "show N/A".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Some(dt) = DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_rfc2822(raw))
            .ok()
            .or_else(|| {
                OFFSET_FORMATS
                    .iter()
                    .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
            })
        {
            return Some(Timestamp::Offset(dt));
        }
        if let Some(naive) = NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        {
            return Some(Timestamp::Naive(naive));
        }
        DATE_ONLY_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Timestamp::Naive)
    }

    /// Point in time used for ordering. Naive values are read as UTC.
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Timestamp::Offset(dt) => dt.with_timezone(&Utc),
            Timestamp::Naive(naive) => Utc.from_utc_datetime(naive),
        }
    }

    /// Wall-clock value to display in the given zone.
    pub fn wall_clock(&self, zone: ClockZone) -> NaiveDateTime {
        match (self, zone) {
            (Timestamp::Offset(dt), ClockZone::Source) => dt.naive_local(),
            (Timestamp::Offset(dt), ClockZone::Local) => dt.with_timezone(&Local).naive_local(),
            // Offset-less values are already "local" wherever they came from.
            (Timestamp::Naive(naive), _) => *naive,
        }
    }
}

/// Date and time columns for one todo row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedStamp {
    pub date: String,
    pub time: String,
}

pub fn format_created_at(raw: &str, zone: ClockZone) -> CreatedStamp {
    match Timestamp::parse(raw) {
        Some(ts) => {
            let wall = ts.wall_clock(zone);
            CreatedStamp {
                date: wall.format(DATE_FORMAT).to_string(),
                time: wall.format(TIME_FORMAT).to_string(),
            }
        }
        None => CreatedStamp {
            date: PLACEHOLDER.to_string(),
            time: PLACEHOLDER.to_string(),
        },
    }
}

/// Id ordering for tie-breaks: numeric ids numerically, before any others.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum IdKey {
    Numeric(u128),
    Text(String),
}

impl IdKey {
    fn new(id: &str) -> Self {
        id.parse::<u128>()
            .map(IdKey::Numeric)
            .unwrap_or_else(|_| IdKey::Text(id.to_string()))
    }
}

/// Sort key: parsable timestamps first (by instant), then id.
fn sort_key(todo: &TodoRecord) -> (bool, Option<DateTime<Utc>>, IdKey) {
    let instant = Timestamp::parse(&todo.created_at).map(|ts| ts.instant());
    (instant.is_none(), instant, IdKey::new(&todo.id))
}

/// Sorts todos in display order, oldest first.
pub fn sort_todos(todos: &mut [TodoRecord]) {
    todos.sort_by_cached_key(sort_key);
}

/// One rendered todo row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow<'a> {
    /// 1-based position after sorting.
    pub index: usize,
    pub id: &'a str,
    pub text: &'a str,
    pub stamp: CreatedStamp,
}

/// Builds rows from already-sorted todos.
pub fn todo_rows(todos: &[TodoRecord], zone: ClockZone) -> Vec<TodoRow<'_>> {
    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| TodoRow {
            index: i + 1,
            id: &todo.id,
            text: &todo.todo_text,
            stamp: format_created_at(&todo.created_at, zone),
        })
        .collect()
}

/// One rendered owner row, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRow<'a> {
    pub index: usize,
    pub owner: &'a OwnerRecord,
}

pub fn owner_rows(owners: &[OwnerRecord]) -> Vec<OwnerRow<'_>> {
    owners
        .iter()
        .enumerate()
        .map(|(i, owner)| OwnerRow { index: i + 1, owner })
        .collect()
}
