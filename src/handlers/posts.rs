/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::services::PostService;

// ============================================
// Request Structs
// ============================================

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

fn parse_post_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("post not found".to_string()))
}

// ============================================
// Handler Functions
// ============================================

/// Create a new post
/// POST /api/v1/posts
pub async fn create_post(
    svc: web::Data<PostService>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;
    let post = svc.create_post(user_id.0, req.into_inner().text).await?;
    Ok(HttpResponse::Created().json(post))
}

/// List all posts, newest first
/// GET /api/v1/posts
pub async fn list_posts(svc: web::Data<PostService>) -> Result<HttpResponse> {
    let posts = svc.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by id
/// GET /api/v1/posts/{id}
pub async fn get_post(
    svc: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path.into_inner())?;
    let post = svc.get_post(post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post. Owner only.
/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    svc: web::Data<PostService>,
    user_id: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path.into_inner())?;
    svc.delete_post(user_id.0, post_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Like a post
/// PUT /api/v1/posts/{id}/like
pub async fn like_post(
    svc: web::Data<PostService>,
    user_id: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path.into_inner())?;
    let likes = svc.like(user_id.0, post_id).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// Remove a like from a post
/// PUT /api/v1/posts/{id}/unlike
pub async fn unlike_post(
    svc: web::Data<PostService>,
    user_id: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = parse_post_id(&path.into_inner())?;
    let likes = svc.unlike(user_id.0, post_id).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// Comment on a post
/// POST /api/v1/posts/{id}/comments
pub async fn add_comment(
    svc: web::Data<PostService>,
    user_id: UserId,
    path: web::Path<String>,
    req: web::Json<AddCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;
    let post_id = parse_post_id(&path.into_inner())?;
    let comments = svc
        .add_comment(user_id.0, post_id, req.into_inner().text)
        .await?;
    Ok(HttpResponse::Created().json(comments))
}

/// Delete a comment. Comment author only.
/// DELETE /api/v1/posts/{id}/comments/{comment_id}
pub async fn delete_comment(
    svc: web::Data<PostService>,
    user_id: UserId,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (post_id_raw, comment_id_raw) = path.into_inner();
    let post_id = parse_post_id(&post_id_raw)?;
    let comment_id = Uuid::parse_str(&comment_id_raw)
        .map_err(|_| AppError::NotFound("comment not found".to_string()))?;

    let comments = svc.delete_comment(user_id.0, post_id, comment_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}
