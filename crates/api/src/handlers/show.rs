//! Handlers for the `/shows` resource. Shows are created once and never
//! edited or deleted.

use axum::extract::State;
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use futures::FutureExt;
use fyyur_core::schedule::format_listing;
use fyyur_db::models::show::ShowForm;
use fyyur_db::repositories::ShowRepo;
use fyyur_db::with_transaction;

use crate::error::AppResult;
use crate::flash::{Flash, PendingFlash};
use crate::handlers::submitted;
use crate::response::Page;
use crate::state::AppState;
use crate::views::{self, FormView, Home, ShowListEntry};

/// GET /shows
pub async fn list(
    State(state): State<AppState>,
    pending: PendingFlash,
) -> AppResult<Page<Vec<ShowListEntry>>> {
    let shows = ShowRepo::list_with_parties(&state.pool).await?;
    let entries: Vec<ShowListEntry> = shows.into_iter().map(ShowListEntry::from).collect();
    Ok(Page::new("shows", entries).with_pending(pending))
}

/// GET /shows/create
///
/// The start time is prefilled with the current instant.
pub async fn create_form() -> Page<FormView<ShowForm>> {
    Page::new(
        "new_show",
        FormView {
            id: None,
            fields: views::SHOW_FIELDS,
            choices: None,
            values: ShowForm {
                start_time: format_listing(Utc::now()),
                ..Default::default()
            },
        },
    )
}

/// POST /shows/create
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Form<ShowForm>, FormRejection>,
) -> Page<Home> {
    let submitted = submitted(payload);

    let outcome = with_transaction(&state.pool, move |conn| {
        async move {
            let input = submitted.map_err(anyhow::Error::msg)?.to_input()?;
            Ok(ShowRepo::create(conn, &input).await?)
        }
        .boxed()
    })
    .await;

    let flash = match outcome {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                "Show created"
            );
            Flash::success("Show was successfully listed!")
        }
        Err(_) => Flash::error("Failed to create show"),
    };

    Page::new("home", Home::default()).with_flash(flash)
}
