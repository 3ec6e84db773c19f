//! Nearest-stop JSON API

use axum::{
    Json,
    extract::{Query, State},
};
use domain::value_objects::WheelchairBoarding;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for `GET /v1/stops/nearest`
#[derive(Debug, Deserialize)]
pub struct NearestStopQuery {
    /// Free-text place name or address
    #[serde(default)]
    pub place: String,
}

/// Nearest stop response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestStopResponse {
    pub place_name: String,
    pub stop_name: String,
    pub wheelchair_accessible: bool,
    pub wheelchair_boarding: WheelchairBoarding,
}

/// GET /v1/stops/nearest?place=...
#[instrument(skip_all)]
pub async fn nearest_stop(
    State(state): State<AppState>,
    Query(query): Query<NearestStopQuery>,
) -> Result<Json<NearestStopResponse>, ApiError> {
    let place_name = query.place.trim();
    if place_name.is_empty() {
        return Err(ApiError::BadRequest(
            "query parameter 'place' must not be empty".to_string(),
        ));
    }

    let stop = state.lookup_service.find_stop_near(place_name).await?;

    Ok(Json(NearestStopResponse {
        place_name: place_name.to_string(),
        stop_name: stop.stop_name().to_string(),
        wheelchair_accessible: stop.wheelchair_accessible(),
        wheelchair_boarding: stop.wheelchair_boarding(),
    }))
}
