pub mod anime;
pub mod error;
pub mod types;
