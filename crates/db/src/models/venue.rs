//! Venue entity model and DTOs.

use fyyur_core::error::CoreError;
use fyyur_core::forms::{checkbox, non_blank, split_genres};
use fyyur_core::listing::Located;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::validated;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A venue with the total number of shows booked there, past or upcoming.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShowCount {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_shows: i64,
}

impl Located for VenueShowCount {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// Venue form fields as submitted. Every field is optional at this stage so
/// that missing values surface as a failed write, not a rejected request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    /// One entry per selected genre; an entry may itself be comma-separated.
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Coerce and validate the submission into a writable [`VenueInput`].
    pub fn to_input(&self) -> Result<VenueInput, CoreError> {
        validated(VenueInput {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: non_blank(self.phone.clone()),
            image_link: non_blank(self.image_link.clone()),
            facebook_link: non_blank(self.facebook_link.clone()),
            genres: split_genres(&self.genres.join(",")),
            website: non_blank(self.website.clone()),
            seeking_talent: checkbox(self.seeking_talent.as_deref()),
            seeking_description: non_blank(self.seeking_description.clone()),
        })
    }
}

impl From<&Venue> for VenueForm {
    /// Prefill an edit form from the stored row.
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            genres: venue.genres.clone(),
            website: venue.website.clone(),
            seeking_talent: Some(if venue.seeking_talent { "y" } else { "n" }.to_string()),
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// Validated values written to the `venues` table on create and on edit.
/// An edit overwrites every column with these values.
#[derive(Debug, Clone, Validate)]
pub struct VenueInput {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    pub phone: Option<String>,
    #[validate(url(message = "image_link must be a URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "facebook_link must be a URL"))]
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    #[validate(url(message = "website must be a URL"))]
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}
