//! Route definitions for the `/animes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::anime;
use crate::state::AppState;

/// Routes mounted at `/animes`.
///
/// ```text
/// GET     /animes[?id=]     -> read (always an array)
/// POST    /animes           -> create
/// PUT     /animes           -> update (id in body)
/// DELETE  /animes?id=       -> delete
/// OPTIONS /animes           -> options
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/animes",
        get(anime::read)
            .post(anime::create)
            .put(anime::update)
            .delete(anime::delete)
            .options(anime::options),
    )
}
