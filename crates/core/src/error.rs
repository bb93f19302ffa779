use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Lookup by a non-numeric key (e.g. a session token) found nothing.
    #[error("{entity} not found")]
    NotFoundKey { entity: &'static str },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}
