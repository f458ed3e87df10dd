//! Request handlers, one module per resource.

pub mod artist;
pub mod home;
pub mod show;
pub mod venue;

use axum_extra::extract::{Form, FormRejection};
use serde::Deserialize;

/// The search box on the venue and artist listings.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// A write form as it arrived: decoded, or the reason decoding failed.
///
/// Write handlers carry an undecodable body into the write boundary so it
/// fails the same way a rejected or unsaved record does.
pub type Submitted<T> = Result<T, String>;

pub fn submitted<T>(payload: Result<Form<T>, FormRejection>) -> Submitted<T> {
    payload.map(|Form(form)| form).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Form body could not be decoded");
        rejection.to_string()
    })
}
