//! Axum request handlers.
//!
//! Handlers extract request pieces, check a connection out of the pool for
//! the duration of the request, and delegate to [`crate::catalog`].

pub mod anime;
