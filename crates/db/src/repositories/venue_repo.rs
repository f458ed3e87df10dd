//! Repository for the `venues` table.

use fyyur_core::search::contains_pattern;
use fyyur_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::venue::{Venue, VenueInput, VenueShowCount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
    genres, website, seeking_talent, seeking_description, created_at, updated_at";

/// Provides CRUD and search operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &VenueInput) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues \
                (name, city, state, address, phone, image_link, facebook_link, \
                 genres, website, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(conn)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every venue with its total show count, ordered by ID.
    pub async fn list_with_show_counts(pool: &PgPool) -> Result<Vec<VenueShowCount>, sqlx::Error> {
        sqlx::query_as::<_, VenueShowCount>(
            "SELECT v.id, v.name, v.city, v.state, COUNT(s.id) AS num_shows \
             FROM venues v \
             LEFT JOIN shows s ON s.venue_id = v.id \
             GROUP BY v.id \
             ORDER BY v.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Venues whose name contains `term`, ignoring case. An empty term
    /// matches every venue.
    pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM venues \
             WHERE name ILIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Overwrite every editable column of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &VenueInput,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET \
                name = $2, city = $3, state = $4, address = $5, phone = $6, \
                image_link = $7, facebook_link = $8, genres = $9, website = $10, \
                seeking_talent = $11, seeking_description = $12 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(conn)
            .await
    }

    /// Delete a venue by ID. Its shows go with it (`ON DELETE CASCADE`).
    /// Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
