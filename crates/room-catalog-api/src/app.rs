//! Router assembly shared by the server binary and the integration tests.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes;

/// Build the full application router for `config`.
///
/// The health route always lives at the root. Room routes are mounted under
/// `config.base_path`, or at the root when it is empty.
#[must_use]
pub fn build_app(config: &Config) -> Router {
    let rooms = Router::new()
        .merge(routes::room_amenities::router())
        .merge(routes::room_features::router());

    let app = Router::new().merge(routes::health::router());
    let app = if config.base_path.is_empty() {
        app.merge(rooms)
    } else {
        app.nest(&config.base_path, rooms)
    };

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
