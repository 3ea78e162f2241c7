//! Handlers for the `/animes` resource.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use canimex_core::types::DbId;
use canimex_db::connection::ScopedConnection;
use canimex_db::models::anime::Anime;

use crate::catalog;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query pairs in request order. Kept as raw text so a repeated or
/// non-numeric `id` reaches the catalogue instead of an extractor rejection.
pub type QueryPairs = Vec<(String, String)>;

/// The first `id` value in the query string, if any.
pub fn first_id(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
}

/// POST /animes
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<DbId>)> {
    let mut conn = ScopedConnection::acquire(&state.pool).await?;
    catalog::create_anime(&mut *conn, &body).await
}

/// GET /animes[?id=]
pub async fn read(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> AppResult<Json<Vec<Anime>>> {
    let mut conn = ScopedConnection::acquire(&state.pool).await?;
    catalog::read_animes(&mut *conn, first_id(&params)).await
}

/// PUT /animes
pub async fn update(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let mut conn = ScopedConnection::acquire(&state.pool).await?;
    catalog::update_anime(&mut *conn, &body).await
}

/// DELETE /animes?id=
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> AppResult<Json<MessageResponse>> {
    let mut conn = ScopedConnection::acquire(&state.pool).await?;
    catalog::delete_anime(&mut *conn, first_id(&params)).await
}

/// OPTIONS /animes -- advertise the supported verbs for preflight requests.
pub async fn options() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::ALLOW, "GET, POST, PUT, DELETE, OPTIONS")],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_id_takes_the_first_of_repeated_values() {
        assert_eq!(first_id(&pairs(&[("id", "4"), ("id", "999")])), Some("4"));
    }

    #[test]
    fn first_id_ignores_other_keys() {
        assert_eq!(first_id(&pairs(&[("titulo", "x"), ("id", "7")])), Some("7"));
        assert_eq!(first_id(&pairs(&[("titulo", "x")])), None);
        assert_eq!(first_id(&[]), None);
    }
}
