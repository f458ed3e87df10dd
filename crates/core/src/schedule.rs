//! Show timing rules.
//!
//! A show is *past* when its start time is strictly before the reference
//! instant and *upcoming* otherwise. Callers capture the reference instant
//! once per request and pass it to [`partition_shows`], so every show lands
//! in exactly one bucket.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Start-time format used on venue and artist detail pages.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Start-time format used on the show listing page.
pub const LISTING_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive formats accepted from the show form, tried in order.
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Anything with a start time.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// Which side of the reference instant a show falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowPeriod {
    Past,
    Upcoming,
}

impl ShowPeriod {
    pub fn classify(start_time: Timestamp, now: Timestamp) -> Self {
        if start_time < now {
            ShowPeriod::Past
        } else {
            ShowPeriod::Upcoming
        }
    }
}

/// Shows split into past and upcoming, each keeping the input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Default for Partitioned<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

/// Split `shows` against `now` with a single comparison per show.
pub fn partition_shows<T, I>(shows: I, now: Timestamp) -> Partitioned<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let mut out = Partitioned::default();
    for show in shows {
        match ShowPeriod::classify(show.start_time(), now) {
            ShowPeriod::Past => out.past.push(show),
            ShowPeriod::Upcoming => out.upcoming.push(show),
        }
    }
    out
}

/// Render a start time for detail pages (`DD-MM-YYYY HH:MM`).
pub fn format_display(start_time: Timestamp) -> String {
    start_time.format(DISPLAY_FORMAT).to_string()
}

/// Render a start time for the show listing (`YYYY-MM-DD HH:MM:SS`).
pub fn format_listing(start_time: Timestamp) -> String {
    start_time.format(LISTING_FORMAT).to_string()
}

/// Parse a start time submitted through the show form.
///
/// Accepts RFC 3339 (converted to UTC) or one of the naive forms in
/// [`INPUT_FORMATS`], which are taken to be UTC.
///
/// # Examples
///
/// ```
/// use fyyur_core::schedule::{format_display, parse_start_time};
///
/// let ts = parse_start_time("2023-01-01 10:00:00").unwrap();
/// assert_eq!(format_display(ts), "01-01-2023 10:00");
/// assert!(parse_start_time("next tuesday").is_err());
/// ```
pub fn parse_start_time(input: &str) -> Result<Timestamp, CoreError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::Validation("start_time is required".into()));
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }

    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| CoreError::Validation(format!("start_time '{input}' is not a valid date")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Fake {
        id: i64,
        at: Timestamp,
    }

    impl Scheduled for Fake {
        fn start_time(&self) -> Timestamp {
            self.at
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn start_equal_to_now_is_upcoming() {
        let now = at(2024, 1, 1, 0, 0);
        assert_eq!(ShowPeriod::classify(now, now), ShowPeriod::Upcoming);
        assert_eq!(
            ShowPeriod::classify(now - chrono::Duration::seconds(1), now),
            ShowPeriod::Past
        );
    }

    #[test]
    fn partition_is_disjoint_and_complete() {
        let now = at(2024, 6, 1, 12, 0);
        let shows: Vec<Fake> = [
            at(2023, 1, 1, 10, 0),
            at(2024, 6, 1, 12, 0),
            at(2024, 6, 1, 11, 59),
            at(2030, 3, 3, 20, 30),
            at(1999, 12, 31, 23, 59),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, at)| Fake { id: i as i64, at })
        .collect();

        let split = partition_shows(shows.clone(), now);

        assert_eq!(split.past.len() + split.upcoming.len(), shows.len());
        for show in &split.past {
            assert!(show.at < now);
            assert!(!split.upcoming.contains(show));
        }
        for show in &split.upcoming {
            assert!(show.at >= now);
        }

        let past_ids: Vec<i64> = split.past.iter().map(|s| s.id).collect();
        assert_eq!(past_ids, vec![0, 2, 4]);
        let upcoming_ids: Vec<i64> = split.upcoming.iter().map(|s| s.id).collect();
        assert_eq!(upcoming_ids, vec![1, 3]);
    }

    #[test]
    fn partition_of_nothing_is_empty() {
        let split = partition_shows(Vec::<Fake>::new(), at(2024, 1, 1, 0, 0));
        assert!(split.past.is_empty());
        assert!(split.upcoming.is_empty());
    }

    #[test]
    fn show_from_2023_is_past_in_2024() {
        let show = Fake {
            id: 1,
            at: parse_start_time("2023-01-01T10:00").unwrap(),
        };
        let split = partition_shows(vec![show], at(2024, 1, 1, 0, 0));
        assert_eq!(split.past.len(), 1);
        assert_eq!(format_display(split.past[0].at), "01-01-2023 10:00");
    }

    #[test]
    fn display_and_listing_formats_differ() {
        let ts = at(2035, 4, 1, 20, 0);
        assert_eq!(format_display(ts), "01-04-2035 20:00");
        assert_eq!(format_listing(ts), "2035-04-01 20:00:00");
    }

    #[test]
    fn parses_every_accepted_form() {
        let expected = at(2019, 5, 21, 21, 30);
        for input in [
            "2019-05-21 21:30:00",
            "2019-05-21 21:30",
            "2019-05-21T21:30:00",
            "2019-05-21T21:30",
            "2019-05-21T21:30:00Z",
            "2019-05-21T23:30:00+02:00",
            "  2019-05-21 21:30  ",
        ] {
            assert_eq!(parse_start_time(input).unwrap(), expected, "input: {input}");
        }
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert_matches!(parse_start_time(""), Err(CoreError::Validation(_)));
        assert_matches!(parse_start_time("21/05/2019"), Err(CoreError::Validation(_)));
    }
}
