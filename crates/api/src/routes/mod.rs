pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   home page
///
/// /venues                             grouped listing
/// /venues/search                      search (POST)
/// /venues/create                      form (GET), create (POST)
/// /venues/{id}                        detail (GET), delete (DELETE)
/// /venues/{id}/edit                   form (GET), update (POST)
///
/// /artists                            listing
/// /artists/search                     search (POST)
/// /artists/create                     form (GET), create (POST)
/// /artists/{id}                       detail (GET)
/// /artists/{id}/edit                  form (GET), update (POST)
///
/// /shows                              listing
/// /shows/create                       form (GET), create (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .nest("/venues", venues::router())
        .nest("/artists", artists::router())
        .nest("/shows", shows::router())
}
