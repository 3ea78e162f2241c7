pub mod anime;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the catalogue route tree. `/health` is merged separately by
/// [`crate::router::build_app_router`].
///
/// ```text
/// /animes                                          create, read, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(anime::router())
}
