//! HTML page handlers: search form, result page and fallbacks

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use infrastructure::{StopPageData, TemplateError};
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::state::AppState;

/// Shown when the form is submitted without a place
pub const BLANK_PLACE_MESSAGE: &str = "Please enter a place name or address.";

/// Prefix of the message shown when a lookup fails
pub const LOOKUP_FAILED_PREFIX: &str = "Sorry, we couldn't find MBTA information for that location.";

/// Shown for unknown routes
pub const NOT_FOUND_MESSAGE: &str = "Page not found.";

/// Last-resort page when the templates themselves fail
const BARE_INTERNAL_ERROR_PAGE: &str =
    "<!DOCTYPE html><html><body><p>Internal server error. Please try again.</p></body></html>";

/// Search form submission
#[derive(Debug, Deserialize)]
pub struct NearestStopForm {
    #[serde(default)]
    pub place_name: String,
}

/// Turn a render result into a response with `status`
fn page(status: StatusCode, rendered: Result<String, TemplateError>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(BARE_INTERNAL_ERROR_PAGE.to_string()),
            )
                .into_response()
        },
    }
}

/// GET / - the search form
pub async fn index(State(state): State<AppState>) -> Response {
    page(StatusCode::OK, state.templates.render_index())
}

/// POST /nearest_mbta - run a lookup from the form
#[instrument(skip_all)]
pub async fn nearest_mbta(
    State(state): State<AppState>,
    Form(form): Form<NearestStopForm>,
) -> Response {
    let place_name = form.place_name.trim();

    if place_name.is_empty() {
        return page(
            StatusCode::OK,
            state.templates.render_error(BLANK_PLACE_MESSAGE),
        );
    }

    match state.lookup_service.find_stop_near(place_name).await {
        Ok(stop) => {
            info!(stop = %stop.stop_name(), "Rendering result page");
            page(
                StatusCode::OK,
                state
                    .templates
                    .render_stop(&StopPageData::new(place_name, &stop)),
            )
        },
        Err(e) => page(
            StatusCode::OK,
            state
                .templates
                .render_error(&format!("{LOOKUP_FAILED_PREFIX} Error: {e}")),
        ),
    }
}

/// Fallback for unknown routes
pub async fn not_found(State(state): State<AppState>) -> Response {
    page(
        StatusCode::NOT_FOUND,
        state.templates.render_error(NOT_FOUND_MESSAGE),
    )
}
