/// Post aggregate manager.
///
/// Posts embed a set-like likes list (unique per user) and an ordered
/// comments list (most-recent-first). Every mutation awaits the store
/// acknowledgment before returning.
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{PostStore, UserStore};
use crate::error::{AppError, Result};
use crate::models::{Comment, Like, Post};
use crate::services::authz;

pub struct PostService {
    users: Arc<dyn UserStore>,
    posts: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(users: Arc<dyn UserStore>, posts: Arc<dyn PostStore>) -> Self {
        Self { users, posts }
    }

    /// Create a post, snapshotting the author's name and avatar.
    pub async fn create_post(&self, principal: Uuid, text: String) -> Result<Post> {
        let author = self
            .users
            .find_by_id(principal)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        let post = Post::new(&author, text);
        self.posts.save(post.clone()).await?;
        tracing::info!(post = %post.id, user = %principal, "post created");

        Ok(post)
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let mut posts = self.posts.list().await?;
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("post not found".to_string()))
    }

    /// Delete a post. Only the owner may delete it.
    pub async fn delete_post(&self, principal: Uuid, id: Uuid) -> Result<()> {
        let post = self.get_post(id).await?;
        authz::ensure_owner(principal, post.user)?;

        self.posts.delete(id).await?;
        tracing::info!(post = %id, user = %principal, "post deleted");

        Ok(())
    }

    /// Like a post. At most one like per user per post.
    pub async fn like(&self, principal: Uuid, id: Uuid) -> Result<Vec<Like>> {
        let mut post = self.get_post(id).await?;

        if post.likes.iter().any(|l| l.user == principal) {
            return Err(AppError::Conflict("post already liked".to_string()));
        }

        post.likes.insert(0, Like { user: principal });
        self.posts.save(post.clone()).await?;

        Ok(post.likes)
    }

    /// Remove the principal's like from a post.
    pub async fn unlike(&self, principal: Uuid, id: Uuid) -> Result<Vec<Like>> {
        let mut post = self.get_post(id).await?;

        let index = post
            .likes
            .iter()
            .position(|l| l.user == principal)
            .ok_or_else(|| AppError::Conflict("post has not yet been liked".to_string()))?;

        post.likes.remove(index);
        self.posts.save(post.clone()).await?;

        Ok(post.likes)
    }

    /// Add a comment at the head of the post's comment list, snapshotting the
    /// author's name and avatar.
    pub async fn add_comment(
        &self,
        principal: Uuid,
        post_id: Uuid,
        text: String,
    ) -> Result<Vec<Comment>> {
        let author = self
            .users
            .find_by_id(principal)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        let mut post = self.get_post(post_id).await?;
        post.comments.insert(0, Comment::new(&author, text));
        self.posts.save(post.clone()).await?;

        Ok(post.comments)
    }

    /// Delete a comment by its id. Only the comment's author may delete it;
    /// owning the post grants nothing here.
    pub async fn delete_comment(
        &self,
        principal: Uuid,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<Comment>> {
        let mut post = self.get_post(post_id).await?;

        let index = post
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or_else(|| AppError::NotFound("comment not found".to_string()))?;

        authz::ensure_owner(principal, post.comments[index].user)?;

        post.comments.remove(index);
        self.posts.save(post.clone()).await?;

        Ok(post.comments)
    }
}
