//! HTTP routes - `GET /{room_id}` and the mapping from errors to status codes.

use crate::{
    api::models::{ErrorResponse, RoomData},
    core::{RoomQueries, get_room_data},
    errors::Error,
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tracing::{debug, error};

/// Store handle shared by all requests.
pub type SharedQueries = Arc<dyn RoomQueries>;

/// Builds the application router.
pub fn router(queries: SharedQueries) -> Router {
    Router::new()
        .route("/", get(missing_room_id))
        .route("/:room_id", get(room_data))
        .with_state(queries)
}

async fn missing_room_id() -> Error {
    Error::InvalidInput {
        message: "room_id is required".to_string(),
    }
}

async fn room_data(
    State(queries): State<SharedQueries>,
    room_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<RoomData>, Error> {
    let Path(room_id) = room_id.map_err(|rejection| Error::InvalidInput {
        message: rejection.body_text(),
    })?;

    if room_id < 1 {
        return Err(Error::InvalidInput {
            message: format!("room_id must be at least 1, got {room_id}"),
        });
    }

    let aggregate = get_room_data(queries.as_ref(), room_id).await?;
    Ok(Json(RoomData::from(aggregate)))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidInput { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Self::RoomNotFound { .. } => (StatusCode::NOT_FOUND, "Room not found".to_string()),
            Self::Fetch { what, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch {what}"),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            debug!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
