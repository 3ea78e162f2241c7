//! Repository for the `animes` table.
//!
//! Every method runs exactly one parameterized statement on the connection it
//! is given; callers own the connection's lifetime.

use canimex_core::types::DbId;
use sqlx::PgConnection;

use crate::models::anime::{Anime, CreateAnime, UpdateAnime};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_anime, titulo, genero, duracion, imagen";

/// Provides CRUD operations for animes.
pub struct AnimeRepo;

impl AnimeRepo {
    /// Insert a new anime, returning the generated `id_anime`.
    pub async fn create(conn: &mut PgConnection, input: &CreateAnime) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO animes (titulo, genero, duracion, imagen)
             VALUES ($1, $2, $3, $4)
             RETURNING id_anime",
        )
        .bind(&input.title)
        .bind(&input.genre)
        .bind(&input.duration)
        .bind(&input.image)
        .fetch_one(conn)
        .await
    }

    /// Select the anime with the given id as a zero- or one-element list.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Vec<Anime>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animes WHERE id_anime = $1");
        sqlx::query_as::<_, Anime>(&query)
            .bind(id)
            .fetch_all(conn)
            .await
    }

    /// List every anime in storage order. No ordering is guaranteed.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Anime>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animes");
        sqlx::query_as::<_, Anime>(&query).fetch_all(conn).await
    }

    /// Overwrite all four fields of the anime matching `input.id`.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(conn: &mut PgConnection, input: &UpdateAnime) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE animes SET titulo = $1, genero = $2, duracion = $3, imagen = $4
             WHERE id_anime = $5",
        )
        .bind(&input.title)
        .bind(&input.genre)
        .bind(&input.duration)
        .bind(&input.image)
        .bind(input.id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete an anime by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animes WHERE id_anime = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
