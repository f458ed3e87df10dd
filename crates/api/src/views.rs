//! View models handed to the presentation layer, and the pure transforms
//! that build them from storage rows.
//!
//! Rows fetched from the database are consumed, never edited in place: a
//! reformatted start time only ever exists on a view model.

use fyyur_core::choices::{GENRES, STATES};
use fyyur_core::listing::{group_by_area, AreaGroup};
use fyyur_core::schedule::{format_display, format_listing, partition_shows};
use fyyur_core::types::{DbId, Timestamp};
use fyyur_db::models::show::ShowWithParties;
use fyyur_db::models::venue::VenueShowCount;
use serde::Serialize;

/// The landing page carries nothing but an optional flash.
#[derive(Debug, Default, Serialize)]
pub struct Home {}

// ---------------------------------------------------------------------------
// Venue listing
// ---------------------------------------------------------------------------

/// One venue inside an area group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueListEntry {
    pub id: DbId,
    pub name: String,
    /// Total shows at the venue, past ones included.
    pub num_upcoming_shows: i64,
}

impl From<VenueShowCount> for VenueListEntry {
    fn from(row: VenueShowCount) -> Self {
        Self {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_shows,
        }
    }
}

/// Group venues into one entry per (city, state).
pub fn venue_areas(rows: Vec<VenueShowCount>) -> Vec<AreaGroup<VenueListEntry>> {
    group_by_area(rows)
        .into_iter()
        .map(|area| AreaGroup {
            city: area.city,
            state: area.state,
            venues: area.venues.into_iter().map(VenueListEntry::from).collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SearchResults<T: Serialize> {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> SearchResults<T> {
    pub fn new(search_term: String, data: Vec<T>) -> Self {
        Self {
            search_term,
            count: data.len(),
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Detail pages
// ---------------------------------------------------------------------------

/// A show as listed on a venue or artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowEntry {
    pub show_id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    /// `DD-MM-YYYY HH:MM`.
    pub start_time: String,
}

impl From<ShowWithParties> for ShowEntry {
    fn from(row: ShowWithParties) -> Self {
        Self {
            show_id: row.id,
            start_time: format_display(row.start_time),
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSplit {
    pub past_shows: Vec<ShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows: Vec<ShowEntry>,
    pub upcoming_shows_count: usize,
}

/// Split an entity's shows against `now` and format them for display.
pub fn split_shows(rows: Vec<ShowWithParties>, now: Timestamp) -> ShowSplit {
    let split = partition_shows(rows, now);
    let past_shows: Vec<ShowEntry> = split.past.into_iter().map(ShowEntry::from).collect();
    let upcoming_shows: Vec<ShowEntry> = split.upcoming.into_iter().map(ShowEntry::from).collect();
    ShowSplit {
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// A venue or artist record together with its split shows.
#[derive(Debug, Serialize)]
pub struct Detail<E: Serialize> {
    #[serde(flatten)]
    pub record: E,
    #[serde(flatten)]
    pub shows: ShowSplit,
}

// ---------------------------------------------------------------------------
// Show listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListEntry {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`, deliberately not the detail-page format.
    pub start_time: String,
}

impl From<ShowWithParties> for ShowListEntry {
    fn from(row: ShowWithParties) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: format_listing(row.start_time),
        }
    }
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

pub const VENUE_FIELDS: &[&str] = &[
    "name",
    "city",
    "state",
    "address",
    "phone",
    "image_link",
    "facebook_link",
    "genres",
    "website",
    "seeking_talent",
    "seeking_description",
];

pub const ARTIST_FIELDS: &[&str] = &[
    "name",
    "city",
    "state",
    "phone",
    "genres",
    "image_link",
    "facebook_link",
    "website",
    "seeking_venue",
    "seeking_description",
];

pub const SHOW_FIELDS: &[&str] = &["artist_id", "venue_id", "start_time"];

#[derive(Debug, Serialize)]
pub struct Choices {
    pub genres: &'static [&'static str],
    pub states: &'static [&'static str],
}

impl Choices {
    pub fn all() -> Self {
        Self {
            genres: GENRES,
            states: STATES,
        }
    }
}

/// A form to display: blank for create, prefilled for edit.
#[derive(Debug, Serialize)]
pub struct FormView<F: Serialize> {
    /// Record being edited, absent on create forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub fields: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Choices>,
    pub values: F,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn show(id: DbId, venue_id: DbId, artist_id: DbId, start_time: Timestamp) -> ShowWithParties {
        ShowWithParties {
            id,
            start_time,
            venue_id,
            venue_name: format!("Venue {venue_id}"),
            venue_image_link: None,
            artist_id,
            artist_name: format!("Artist {artist_id}"),
            artist_image_link: Some(format!("https://img.test/{artist_id}.jpg")),
        }
    }

    fn count(id: DbId, name: &str, city: &str, state: &str, num_shows: i64) -> VenueShowCount {
        VenueShowCount {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            num_shows,
        }
    }

    #[test]
    fn past_show_from_2023_is_formatted_for_display() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let rows = vec![show(7, 1, 2, Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap())];

        let split = split_shows(rows, now);

        assert_eq!(split.past_shows_count, 1);
        assert_eq!(split.upcoming_shows_count, 0);
        assert_eq!(split.past_shows[0].start_time, "01-01-2023 10:00");
        assert_eq!(split.past_shows[0].venue_id, 1);
        assert_eq!(split.past_shows[0].artist_id, 2);
    }

    #[test]
    fn split_counts_match_lists() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let rows = vec![
            show(1, 1, 1, now - chrono::Duration::days(1)),
            show(2, 1, 2, now),
            show(3, 1, 3, now + chrono::Duration::days(30)),
        ];

        let split = split_shows(rows, now);

        assert_eq!(split.past_shows_count, split.past_shows.len());
        assert_eq!(split.upcoming_shows_count, split.upcoming_shows.len());
        let upcoming: Vec<DbId> = split.upcoming_shows.iter().map(|s| s.show_id).collect();
        assert_eq!(upcoming, vec![2, 3]);
    }

    #[test]
    fn listing_entry_uses_plain_time_format() {
        let at = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        let entry = ShowListEntry::from(show(1, 3, 4, at));
        assert_eq!(entry.start_time, "2035-04-01 20:00:00");
        assert_eq!(entry.artist_image_link.as_deref(), Some("https://img.test/4.jpg"));
    }

    #[test]
    fn venues_grouped_into_two_areas() {
        let areas = venue_areas(vec![
            count(1, "A", "X", "S1", 0),
            count(2, "B", "X", "S1", 3),
            count(3, "C", "Y", "S2", 1),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 3);
        assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("Y", "S2"));
    }

    #[test]
    fn detail_flattens_record_and_shows() {
        #[derive(Serialize)]
        struct Record {
            id: DbId,
            name: &'static str,
        }

        let detail = Detail {
            record: Record { id: 1, name: "The Musical Hop" },
            shows: split_shows(Vec::new(), Utc::now()),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "The Musical Hop");
        assert_eq!(json["past_shows_count"], 0);
        assert!(json["upcoming_shows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn search_results_count_their_data() {
        let results = SearchResults::new("hop".to_string(), vec!["a", "b"]);
        assert_eq!(results.count, 2);
        assert_eq!(results.search_term, "hop");
    }
}
