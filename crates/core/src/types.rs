/// Primary keys of `venues`, `artists` and `shows` (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Show start times and request instants. Always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Entity names used in error messages and log fields.
pub mod entity {
    pub const VENUE: &str = "Venue";
    pub const ARTIST: &str = "Artist";
}
