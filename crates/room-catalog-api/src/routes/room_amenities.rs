//! Room amenities endpoint.

use axum::{Router, routing::get};
use tracing::{info, instrument};

use crate::message::MessageResponse;

/// Message returned by GET /room-amenities.
pub const ROOM_AMENITIES_MESSAGE: &str = "Room Amenities endpoint";

/// GET /room-amenities
#[instrument]
async fn list_room_amenities() -> MessageResponse {
    info!("serving room amenities");
    MessageResponse::new(ROOM_AMENITIES_MESSAGE)
}

/// Returns the router for the room amenities endpoint.
pub fn router() -> Router {
    Router::new().route("/room-amenities", get(list_room_amenities))
}
