//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. A lookup miss is
//! reported as `Ok(None)`; only storage failures are errors.

pub mod item_repo;
pub mod session_repo;
pub mod user_repo;

pub use item_repo::ItemRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
