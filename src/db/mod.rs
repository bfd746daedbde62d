/// Document store access layer.
///
/// Each aggregate (user, profile, post) has its own store trait with
/// whole-document reads and writes. A write replaces the aggregate as one
/// unit; the read-modify-write span of a request is not transactionally
/// isolated, so concurrent mutations of one aggregate resolve
/// last-writer-wins at the sub-collection level.
pub mod memory;
pub mod post_repo;
pub mod profile_repo;
pub mod user_repo;

pub use memory::MemoryStore;
pub use post_repo::PostStore;
pub use profile_repo::ProfileStore;
pub use user_repo::UserStore;

use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}
