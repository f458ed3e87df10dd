//! Show entity model and DTOs.

use fyyur_core::error::CoreError;
use fyyur_core::forms::parse_id;
use fyyur_core::schedule::{parse_start_time, Scheduled};
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
}

/// A show joined with the venue and artist it pairs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowWithParties {
    pub id: DbId,
    pub start_time: Timestamp,
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

impl Scheduled for ShowWithParties {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// Show form fields as submitted. Ids and time arrive as text and are
/// coerced in [`ShowForm::to_input`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowForm {
    pub venue_id: String,
    pub artist_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn to_input(&self) -> Result<NewShow, CoreError> {
        Ok(NewShow {
            venue_id: parse_id("venue_id", &self.venue_id)?,
            artist_id: parse_id("artist_id", &self.artist_id)?,
            start_time: parse_start_time(&self.start_time)?,
        })
    }
}

/// Typed values for inserting a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}
