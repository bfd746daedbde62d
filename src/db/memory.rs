use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::{PostStore, ProfileStore, StoreResult, UserStore};
use crate::models::{Post, Profile, User};

/// In-memory document store. Each map entry is one aggregate; `insert`
/// replaces the previous document for the key atomically.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<Uuid, User>,
    profiles: DashMap<Uuid, Profile>,
    posts: DashMap<Uuid, Post>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn insert(&self, user: User) -> StoreResult<()> {
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.users.remove(&id).is_some())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_by_user(&self, user: Uuid) -> StoreResult<Option<Profile>> {
        Ok(self.profiles.get(&user).map(|p| p.value().clone()))
    }

    async fn list(&self) -> StoreResult<Vec<Profile>> {
        Ok(self.profiles.iter().map(|p| p.value().clone()).collect())
    }

    async fn upsert(&self, profile: Profile) -> StoreResult<()> {
        self.profiles.insert(profile.user, profile);
        Ok(())
    }

    async fn delete_by_user(&self, user: Uuid) -> StoreResult<bool> {
        Ok(self.profiles.remove(&user).is_some())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|p| p.value().clone()))
    }

    async fn list(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.iter().map(|p| p.value().clone()).collect())
    }

    async fn save(&self, post: Post) -> StoreResult<()> {
        self.posts.insert(post.id, post);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.posts.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use chrono::Utc;

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            avatar: None,
            password_hash: "x".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_profile_upsert_replaces_by_owner() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let first = Profile::new(owner, "dev".into(), vec!["rust".into()]);
        store.upsert(first.clone()).await.unwrap();

        let mut second = first.clone();
        second.status = "senior dev".to_string();
        store.upsert(second).await.unwrap();

        let stored = store.find_by_user(owner).await.unwrap().unwrap();
        assert_eq!(stored.status, "senior dev");
        assert_eq!(ProfileStore::list(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_post_save_and_delete() {
        let store = MemoryStore::new();
        let author = user("alice");
        let post = Post::new(&author, "hello".to_string());
        let post_id = post.id;

        store.save(post).await.unwrap();
        assert!(PostStore::find_by_id(&store, post_id)
            .await
            .unwrap()
            .is_some());
        assert!(PostStore::delete(&store, post_id).await.unwrap());
        assert!(!PostStore::delete(&store, post_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_user_roundtrip() {
        let store = MemoryStore::new();
        let u = user("bob");
        let id = u.id;
        store.insert(u).await.unwrap();
        assert_eq!(
            UserStore::find_by_id(&store, id).await.unwrap().unwrap().name,
            "bob"
        );
        assert!(UserStore::delete(&store, id).await.unwrap());
    }
}
