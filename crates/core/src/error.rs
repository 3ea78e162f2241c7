use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Missing id parameter")]
    MissingId,

    #[error("Invalid id parameter: {0:?}")]
    InvalidId(String),
}
