//! Repository for the `shows` table.

use fyyur_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::show::{NewShow, Show, ShowWithParties};

const COLUMNS: &str = "id, venue_id, artist_id, start_time, created_at";

/// Select list and joins for [`ShowWithParties`] rows.
const JOINED: &str = "SELECT s.id, s.start_time, \
        v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
        a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link \
     FROM shows s \
     JOIN venues v ON v.id = s.venue_id \
     JOIN artists a ON a.id = s.artist_id";

/// Provides insert and joined read operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show. Fails with a foreign key violation if either the
    /// venue or the artist does not exist.
    pub async fn create(conn: &mut PgConnection, input: &NewShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (venue_id, artist_id, start_time) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(conn)
            .await
    }

    /// Every show with its venue and artist, earliest first.
    pub async fn list_with_parties(pool: &PgPool) -> Result<Vec<ShowWithParties>, sqlx::Error> {
        let query = format!("{JOINED} ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowWithParties>(&query)
            .fetch_all(pool)
            .await
    }

    /// Shows booked at one venue, earliest first.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<ShowWithParties>, sqlx::Error> {
        let query = format!("{JOINED} WHERE s.venue_id = $1 ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowWithParties>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// Shows played by one artist, earliest first.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ShowWithParties>, sqlx::Error> {
        let query = format!("{JOINED} WHERE s.artist_id = $1 ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowWithParties>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }
}
