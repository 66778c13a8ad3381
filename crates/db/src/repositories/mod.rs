//! Repository layer.
//!
//! Each repository wraps an explicit pool handle plus the per-call query
//! timeout, and implements its family's store trait from [`crate::store`].

pub mod tank_repo;
pub mod user_repo;

pub use tank_repo::TankRepo;
pub use user_repo::UserRepo;
