//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates, where the
//!   entity supports one

pub mod item;
pub mod session;
pub mod user;
