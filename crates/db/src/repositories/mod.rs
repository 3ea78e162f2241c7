//! Repository types, one per table.

pub mod anime_repo;

pub use anime_repo::AnimeRepo;
