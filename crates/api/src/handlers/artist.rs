//! Handlers for the `/artists` resource. Artists cannot be deleted.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use futures::FutureExt;
use fyyur_core::error::CoreError;
use fyyur_core::types::{entity, DbId};
use fyyur_db::models::artist::{Artist, ArtistForm, ArtistSummary};
use fyyur_db::repositories::{ArtistRepo, ShowRepo};
use fyyur_db::with_transaction;

use crate::error::{AppError, AppResult};
use crate::flash::{Flash, PendingFlash};
use crate::handlers::{submitted, SearchForm, Submitted};
use crate::response::{FlashRedirect, Page};
use crate::state::AppState;
use crate::views::{self, Choices, Detail, FormView, Home, SearchResults};

fn submitted_name(submitted: &Submitted<ArtistForm>) -> String {
    submitted
        .as_ref()
        .map(|form| form.name.clone())
        .unwrap_or_default()
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: entity::ARTIST,
        id,
    })
}

/// GET /artists
pub async fn list(
    State(state): State<AppState>,
    pending: PendingFlash,
) -> AppResult<Page<Vec<ArtistSummary>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Page::new("artists", artists).with_pending(pending))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Page<SearchResults<Artist>>> {
    let found = ArtistRepo::search_by_name(&state.pool, &form.search_term).await?;
    tracing::debug!(term = %form.search_term, count = found.len(), "Artist search");
    Ok(Page::new(
        "search_artists",
        SearchResults::new(form.search_term, found),
    ))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    pending: PendingFlash,
) -> AppResult<Response> {
    let Some(artist) = ArtistRepo::find_by_id(&state.pool, id).await? else {
        return Ok(not_found(id).with_pending(pending));
    };
    let shows = ShowRepo::list_for_artist(&state.pool, id).await?;

    let detail = Detail {
        record: artist,
        shows: views::split_shows(shows, Utc::now()),
    };
    Ok(Page::new("show_artist", detail)
        .with_pending(pending)
        .into_response())
}

/// GET /artists/create
pub async fn create_form() -> Page<FormView<ArtistForm>> {
    Page::new(
        "new_artist",
        FormView {
            id: None,
            fields: views::ARTIST_FIELDS,
            choices: Some(Choices::all()),
            values: ArtistForm::default(),
        },
    )
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Form<ArtistForm>, FormRejection>,
) -> Page<Home> {
    let submitted = submitted(payload);
    let name = submitted_name(&submitted);

    let outcome = with_transaction(&state.pool, move |conn| {
        async move {
            let input = submitted.map_err(anyhow::Error::msg)?.to_input()?;
            Ok(ArtistRepo::create(conn, &input).await?)
        }
        .boxed()
    })
    .await;

    let flash = match outcome {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
            Flash::success(format!("Artist {name} was successfully listed!"))
        }
        Err(_) => Flash::error(format!("Failed to create artist {name}")),
    };

    Page::new("home", Home::default()).with_flash(flash)
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Page<FormView<ArtistForm>>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Page::new(
        "edit_artist",
        FormView {
            id: Some(id),
            fields: views::ARTIST_FIELDS,
            choices: Some(Choices::all()),
            values: ArtistForm::from(&artist),
        },
    ))
}

/// POST /artists/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Form<ArtistForm>, FormRejection>,
) -> FlashRedirect {
    let submitted = submitted(payload);
    let name = submitted_name(&submitted);

    let outcome = with_transaction(&state.pool, move |conn| {
        async move {
            let input = submitted.map_err(anyhow::Error::msg)?.to_input()?;
            let artist = ArtistRepo::update(conn, id, &input)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: entity::ARTIST,
                    id,
                })?;
            Ok(artist)
        }
        .boxed()
    })
    .await;

    let flash = match outcome {
        Ok(_) => {
            tracing::info!(artist_id = id, "Artist updated");
            Flash::success(format!("Artist {name} was successfully listed!"))
        }
        Err(_) => Flash::error(format!("An error occurred. artist {name} could not be listed.")),
    };

    FlashRedirect {
        to: format!("/artists/{id}"),
        flash,
    }
}
