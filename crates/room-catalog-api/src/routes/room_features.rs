//! Room features endpoint.

use axum::{Router, routing::get};
use tracing::{info, instrument};

use crate::message::MessageResponse;

/// Message returned by GET /room-features.
pub const ROOM_FEATURES_MESSAGE: &str = "Room Features endpoint";

/// GET /room-features
#[instrument]
async fn list_room_features() -> MessageResponse {
    info!("serving room features");
    MessageResponse::new(ROOM_FEATURES_MESSAGE)
}

/// Returns the router for the room features endpoint.
pub fn router() -> Router {
    Router::new().route("/room-features", get(list_room_features))
}
