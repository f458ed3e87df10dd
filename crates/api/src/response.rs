//! Response envelopes shared by the page handlers.
//!
//! Every page is a `{ "page": ..., "data": ..., "flash": ... }` document.
//! Use [`Page`] instead of ad-hoc `serde_json::json!` so the envelope stays
//! consistent and the parked flash cookie is cleared when a page shows it.

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

use crate::flash::{clear_cookie, Flash, PendingFlash};

/// A rendered page: its name, its view model and an optional flash.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub page: &'static str,
    pub data: T,
    pub flash: Option<Flash>,
    #[serde(skip)]
    clears_parked_flash: bool,
}

impl<T: Serialize> Page<T> {
    pub fn new(page: &'static str, data: T) -> Self {
        Self {
            page,
            data,
            flash: None,
            clears_parked_flash: false,
        }
    }

    /// Show the flash parked by the previous request and drop its cookie.
    pub fn with_pending(mut self, PendingFlash(pending): PendingFlash) -> Self {
        if let Some(flash) = pending {
            self.flash = Some(flash);
            self.clears_parked_flash = true;
        }
        self
    }

    /// Show a flash produced by this request.
    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        let clears = self.clears_parked_flash;
        let mut response = Json(self).into_response();
        if clears {
            response.headers_mut().append(SET_COOKIE, clear_cookie());
        }
        response
    }
}

/// A `303 See Other` that parks a flash for the page it points to.
#[derive(Debug)]
pub struct FlashRedirect {
    pub to: String,
    pub flash: Flash,
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        with_parked_flash(Redirect::to(&self.to), &self.flash)
    }
}

/// Attach a parked flash to any response.
pub fn with_parked_flash(response: impl IntoResponse, flash: &Flash) -> Response {
    let mut response = response.into_response();
    response.headers_mut().append(SET_COOKIE, flash.set_cookie());
    response
}
