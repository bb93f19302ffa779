//! Small response bodies shared by several handlers.

use serde::Serialize;
use todo_core::types::DbId;

/// `{ "message": ... }` body returned by logout and session deletion.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Successful login payload. Keys are camelCase on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: DbId,
    /// The session token.
    pub session_id: String,
}
