//! Domain primitives shared by the persistence and HTTP layers.
//!
//! This crate has no internal dependencies so it can be used by both the
//! repository layer and the API server.

pub mod error;
pub mod pagination;
pub mod session_token;
pub mod types;
