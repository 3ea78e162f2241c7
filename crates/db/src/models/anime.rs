//! Anime entity model and DTOs.
//!
//! Rust field names are English; the JSON wire names and column names are the
//! Spanish ones the existing front-end and schema use. Text fields are not
//! validated: an absent field is stored and returned as `null`.

use canimex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `animes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Anime {
    #[serde(rename = "idAnime")]
    #[sqlx(rename = "id_anime")]
    pub id: DbId,
    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "genero")]
    #[sqlx(rename = "genero")]
    pub genre: Option<String>,
    /// Free-form, e.g. `"24 min"`.
    #[serde(rename = "duracion")]
    #[sqlx(rename = "duracion")]
    pub duration: Option<String>,
    /// URL or path.
    #[serde(rename = "imagen")]
    #[sqlx(rename = "imagen")]
    pub image: Option<String>,
}

/// DTO for creating a new anime. A caller-supplied `idAnime` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAnime {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "genero")]
    pub genre: Option<String>,
    #[serde(rename = "duracion")]
    pub duration: Option<String>,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
}

/// DTO for replacing an existing anime; the row is matched by `id`.
///
/// A missing `idAnime` defaults to 0, which no row carries, so the update
/// reports not-found.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAnime {
    #[serde(rename = "idAnime", default)]
    pub id: DbId,
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "genero")]
    pub genre: Option<String>,
    #[serde(rename = "duracion")]
    pub duration: Option<String>,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
}

impl From<UpdateAnime> for Anime {
    fn from(input: UpdateAnime) -> Self {
        Self {
            id: input.id,
            title: input.title,
            genre: input.genre,
            duration: input.duration,
            image: input.image,
        }
    }
}
