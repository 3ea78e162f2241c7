//! Storage seam for anime request handling.
//!
//! Handlers are written against [`AnimeStore`] rather than a concrete
//! connection so the per-verb logic can run against `MemoryAnimeStore`
//! without PostgreSQL. The production implementation is a plain
//! [`PgConnection`] delegating to [`AnimeRepo`].

use async_trait::async_trait;
use canimex_core::types::DbId;
use sqlx::PgConnection;

use crate::models::anime::{Anime, CreateAnime, UpdateAnime};
use crate::repositories::AnimeRepo;

/// One-statement operations over the `animes` table.
#[async_trait]
pub trait AnimeStore: Send {
    /// Insert a row and return its generated id.
    async fn insert(&mut self, input: &CreateAnime) -> Result<DbId, sqlx::Error>;

    /// Select one row by id, or every row when `id` is `None`.
    async fn select(&mut self, id: Option<DbId>) -> Result<Vec<Anime>, sqlx::Error>;

    /// Replace the row matching `input.id`. Returns `true` if it existed.
    async fn update(&mut self, input: &UpdateAnime) -> Result<bool, sqlx::Error>;

    /// Delete the row with `id`. Returns `true` if it existed.
    async fn delete(&mut self, id: DbId) -> Result<bool, sqlx::Error>;
}

#[async_trait]
impl AnimeStore for PgConnection {
    async fn insert(&mut self, input: &CreateAnime) -> Result<DbId, sqlx::Error> {
        AnimeRepo::create(self, input).await
    }

    async fn select(&mut self, id: Option<DbId>) -> Result<Vec<Anime>, sqlx::Error> {
        match id {
            Some(id) => AnimeRepo::find_by_id(self, id).await,
            None => AnimeRepo::list(self).await,
        }
    }

    async fn update(&mut self, input: &UpdateAnime) -> Result<bool, sqlx::Error> {
        AnimeRepo::update(self, input).await
    }

    async fn delete(&mut self, id: DbId) -> Result<bool, sqlx::Error> {
        AnimeRepo::delete(self, id).await
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-memory [`AnimeStore`] for unit tests. Built under `cfg(test)` or the
/// `test-utils` feature.
///
/// Ids are assigned sequentially from 1 and never reused. Marking the store
/// unavailable makes every operation fail with [`sqlx::Error::PoolTimedOut`],
/// which is how handlers observe a lost database.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug)]
pub struct MemoryAnimeStore {
    rows: Vec<Anime>,
    next_id: DbId,
    available: bool,
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for MemoryAnimeStore {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            available: true,
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl MemoryAnimeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the database going away (`false`) or coming back (`true`).
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Current rows in insertion order.
    pub fn rows(&self) -> &[Anime] {
        &self.rows
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.available {
            Ok(())
        } else {
            Err(sqlx::Error::PoolTimedOut)
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl AnimeStore for MemoryAnimeStore {
    async fn insert(&mut self, input: &CreateAnime) -> Result<DbId, sqlx::Error> {
        self.check_available()?;
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(Anime {
            id,
            title: input.title.clone(),
            genre: input.genre.clone(),
            duration: input.duration.clone(),
            image: input.image.clone(),
        });
        Ok(id)
    }

    async fn select(&mut self, id: Option<DbId>) -> Result<Vec<Anime>, sqlx::Error> {
        self.check_available()?;
        Ok(self
            .rows
            .iter()
            .filter(|row| id.is_none_or(|id| row.id == id))
            .cloned()
            .collect())
    }

    async fn update(&mut self, input: &UpdateAnime) -> Result<bool, sqlx::Error> {
        self.check_available()?;
        match self.rows.iter_mut().find(|row| row.id == input.id) {
            Some(row) => {
                *row = Anime::from(input.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&mut self, id: DbId) -> Result<bool, sqlx::Error> {
        self.check_available()?;
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        Ok(self.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> CreateAnime {
        CreateAnime {
            title: Some(title.to_string()),
            genre: Some("Drama".to_string()),
            duration: Some("24 min".to_string()),
            image: Some(format!("/img/{title}.png")),
        }
    }

    #[tokio::test]
    async fn memory_ids_are_sequential_and_not_reused() {
        let mut store = MemoryAnimeStore::new();
        let first = store.insert(&input("a")).await.unwrap();
        assert!(store.delete(first).await.unwrap());
        let second = store.insert(&input("b")).await.unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn memory_select_filters_by_id() {
        let mut store = MemoryAnimeStore::new();
        store.insert(&input("a")).await.unwrap();
        let id = store.insert(&input("b")).await.unwrap();

        assert_eq!(store.select(None).await.unwrap().len(), 2);
        let one = store.select(Some(id)).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].title.as_deref(), Some("b"));
        assert!(store.select(Some(99)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unavailable_memory_store_fails_every_operation() {
        let mut store = MemoryAnimeStore::new();
        store.set_available(false);
        assert!(matches!(
            store.select(None).await,
            Err(sqlx::Error::PoolTimedOut)
        ));
        assert!(store.insert(&input("a")).await.is_err());
        assert!(store.delete(1).await.is_err());
    }
}
