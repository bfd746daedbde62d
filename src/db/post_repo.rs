use async_trait::async_trait;
use uuid::Uuid;

use super::StoreResult;
use crate::models::Post;

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Post>>;

    async fn list(&self) -> StoreResult<Vec<Post>>;

    /// Insert or replace the whole aggregate. The write is acknowledged
    /// before this returns.
    async fn save(&self, post: Post) -> StoreResult<()>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}
