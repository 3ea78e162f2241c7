//! Per-verb request logic for the `/animes` endpoint.
//!
//! Each function takes the already-extracted request pieces plus a storage
//! handle and returns the status/body pair. Nothing here touches HTTP
//! extraction or connection management, so the functions run unchanged
//! against [`canimex_db::store::MemoryAnimeStore`] in unit tests.

use axum::http::StatusCode;
use axum::Json;
use canimex_core::anime::{
    parse_anime_id, parse_optional_anime_id, ENTITY, MSG_DELETED, MSG_UPDATED,
};
use canimex_core::error::CoreError;
use canimex_core::types::DbId;
use canimex_db::models::anime::{Anime, CreateAnime, UpdateAnime};
use canimex_db::store::AnimeStore;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;

/// POST: insert the decoded body and answer 201 with the generated id.
pub async fn create_anime<S>(store: &mut S, body: &[u8]) -> AppResult<(StatusCode, Json<DbId>)>
where
    S: AnimeStore + ?Sized,
{
    let input: CreateAnime = serde_json::from_slice(body)?;
    let id = store.insert(&input).await?;
    tracing::debug!(id, "Anime created");
    Ok((StatusCode::CREATED, Json(id)))
}

/// GET: one row when `id` is given, every row otherwise. Always an array.
///
/// Only DELETE answers a bad `id` with a 400 message; here an unparseable
/// id is an internal error.
pub async fn read_animes<S>(store: &mut S, id: Option<&str>) -> AppResult<Json<Vec<Anime>>>
where
    S: AnimeStore + ?Sized,
{
    let id =
        parse_optional_anime_id(id).map_err(|err| AppError::InternalError(err.to_string()))?;
    let animes = store.select(id).await?;
    tracing::debug!(?id, count = animes.len(), "Animes read");
    Ok(Json(animes))
}

/// PUT: replace all four fields of the row named by the body's `idAnime`.
pub async fn update_anime<S>(store: &mut S, body: &[u8]) -> AppResult<Json<MessageResponse>>
where
    S: AnimeStore + ?Sized,
{
    let input: UpdateAnime = serde_json::from_slice(body)?;
    if store.update(&input).await? {
        tracing::debug!(id = input.id, "Anime updated");
        Ok(Json(MessageResponse::new(MSG_UPDATED)))
    } else {
        Err(CoreError::NotFound {
            entity: ENTITY,
            id: input.id,
        }
        .into())
    }
}

/// DELETE: remove the row named by the required `id` query parameter.
pub async fn delete_anime<S>(store: &mut S, id: Option<&str>) -> AppResult<Json<MessageResponse>>
where
    S: AnimeStore + ?Sized,
{
    let id = parse_anime_id(id)?;
    if store.delete(id).await? {
        tracing::debug!(id, "Anime deleted");
        Ok(Json(MessageResponse::new(MSG_DELETED)))
    } else {
        Err(CoreError::NotFound { entity: ENTITY, id }.into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
