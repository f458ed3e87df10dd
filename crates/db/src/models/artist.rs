//! Artist entity model and DTOs.

use fyyur_core::error::CoreError;
use fyyur_core::forms::{checkbox, non_blank, split_genres};
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::validated;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The id and name pair shown on the artist listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
}

/// Artist form fields as submitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    /// One entry per selected genre; an entry may itself be comma-separated.
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Coerce and validate the submission into a writable [`ArtistInput`].
    pub fn to_input(&self) -> Result<ArtistInput, CoreError> {
        validated(ArtistInput {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: non_blank(self.phone.clone()),
            genres: split_genres(&self.genres.join(",")),
            image_link: non_blank(self.image_link.clone()),
            facebook_link: non_blank(self.facebook_link.clone()),
            website: non_blank(self.website.clone()),
            seeking_venue: checkbox(self.seeking_venue.as_deref()),
            seeking_description: non_blank(self.seeking_description.clone()),
        })
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website: artist.website.clone(),
            seeking_venue: Some(if artist.seeking_venue { "y" } else { "n" }.to_string()),
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

/// Validated values written to the `artists` table.
#[derive(Debug, Clone, Validate)]
pub struct ArtistInput {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    #[validate(url(message = "image_link must be a URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "facebook_link must be a URL"))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "website must be a URL"))]
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}
