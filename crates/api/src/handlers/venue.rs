//! Handlers for the `/venues` resource.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use futures::FutureExt;
use fyyur_core::error::CoreError;
use fyyur_core::listing::AreaGroup;
use fyyur_core::types::{entity, DbId};
use fyyur_db::models::venue::{Venue, VenueForm};
use fyyur_db::repositories::{ShowRepo, VenueRepo};
use fyyur_db::with_transaction;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::flash::{Flash, PendingFlash};
use crate::handlers::{submitted, SearchForm, Submitted};
use crate::response::{with_parked_flash, FlashRedirect, Page};
use crate::state::AppState;
use crate::views::{self, Choices, Detail, FormView, Home, SearchResults, VenueListEntry};

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

fn submitted_name(submitted: &Submitted<VenueForm>) -> String {
    submitted
        .as_ref()
        .map(|form| form.name.clone())
        .unwrap_or_default()
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: entity::VENUE,
        id,
    })
}

/// GET /venues
pub async fn list(
    State(state): State<AppState>,
    pending: PendingFlash,
) -> AppResult<Page<Vec<AreaGroup<VenueListEntry>>>> {
    let rows = VenueRepo::list_with_show_counts(&state.pool).await?;
    Ok(Page::new("venues", views::venue_areas(rows)).with_pending(pending))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Page<SearchResults<Venue>>> {
    let found = VenueRepo::search_by_name(&state.pool, &form.search_term).await?;
    tracing::debug!(term = %form.search_term, count = found.len(), "Venue search");
    Ok(Page::new(
        "search_venues",
        SearchResults::new(form.search_term, found),
    ))
}

/// GET /venues/{id}
///
/// A missing venue still consumes the parked flash, so a failed edit of a
/// vanished venue reports its error here and nowhere later.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    pending: PendingFlash,
) -> AppResult<Response> {
    let Some(venue) = VenueRepo::find_by_id(&state.pool, id).await? else {
        return Ok(not_found(id).with_pending(pending));
    };
    let shows = ShowRepo::list_for_venue(&state.pool, id).await?;

    let detail = Detail {
        record: venue,
        shows: views::split_shows(shows, Utc::now()),
    };
    Ok(Page::new("show_venue", detail)
        .with_pending(pending)
        .into_response())
}

/// GET /venues/create
pub async fn create_form() -> Page<FormView<VenueForm>> {
    Page::new(
        "new_venue",
        FormView {
            id: None,
            fields: views::VENUE_FIELDS,
            choices: Some(Choices::all()),
            values: VenueForm::default(),
        },
    )
}

/// POST /venues/create
///
/// Always answers with the home page; the flash says whether the venue
/// was listed.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Form<VenueForm>, FormRejection>,
) -> Page<Home> {
    let submitted = submitted(payload);
    let name = submitted_name(&submitted);

    let outcome = with_transaction(&state.pool, move |conn| {
        async move {
            let input = submitted.map_err(anyhow::Error::msg)?.to_input()?;
            Ok(VenueRepo::create(conn, &input).await?)
        }
        .boxed()
    })
    .await;

    let flash = match outcome {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");
            Flash::success(format!("Venue {name} was successfully listed!"))
        }
        Err(_) => Flash::error(format!("An error occurred. Venue {name} could not be listed.")),
    };

    Page::new("home", Home::default()).with_flash(flash)
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Page<FormView<VenueForm>>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Page::new(
        "edit_venue",
        FormView {
            id: Some(id),
            fields: views::VENUE_FIELDS,
            choices: Some(Choices::all()),
            values: VenueForm::from(&venue),
        },
    ))
}

/// POST /venues/{id}/edit
///
/// Overwrites every field, then redirects to the venue page whether or not
/// the update went through.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Form<VenueForm>, FormRejection>,
) -> FlashRedirect {
    let submitted = submitted(payload);
    let name = submitted_name(&submitted);

    let outcome = with_transaction(&state.pool, move |conn| {
        async move {
            let input = submitted.map_err(anyhow::Error::msg)?.to_input()?;
            let venue = VenueRepo::update(conn, id, &input)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: entity::VENUE,
                    id,
                })?;
            Ok(venue)
        }
        .boxed()
    })
    .await;

    let flash = match outcome {
        Ok(_) => {
            tracing::info!(venue_id = id, "Venue updated");
            Flash::success(format!("Venue {name} was successfully listed!"))
        }
        Err(_) => Flash::error(format!("An error occurred. Venue {name} could not be listed.")),
    };

    FlashRedirect {
        to: format!("/venues/{id}"),
        flash,
    }
}

/// DELETE /venues/{id}
///
/// 400 if the venue does not exist, 500 if the delete fails, otherwise a
/// JSON confirmation. The flash is parked for the next page either way.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    if VenueRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::BadRequest(format!("Venue with id {id} does not exist")));
    }

    let outcome = with_transaction(&state.pool, move |conn| {
        async move {
            if !VenueRepo::delete(conn, id).await? {
                anyhow::bail!("venue {id} vanished before it could be deleted");
            }
            Ok(())
        }
        .boxed()
    })
    .await;

    let response = match outcome {
        Ok(()) => {
            tracing::info!(venue_id = id, "Venue deleted");
            with_parked_flash(
                Json(DeleteResponse {
                    message: "Delete Successful",
                }),
                &Flash::success("Venue deleted successfully!"),
            )
        }
        Err(err) => with_parked_flash(
            AppError::from(err).into_response(),
            &Flash::error("Error occurred: Venue could not be deleted."),
        ),
    };
    Ok(response)
}
