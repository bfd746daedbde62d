/// Profile handlers - HTTP endpoints for profile operations
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::services::profiles::{EducationInput, ExperienceInput, UpsertProfileFields};
use crate::services::{GithubClient, ProfileService};

// ============================================
// Request Structs
// ============================================

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    /// Comma-delimited skill list, e.g. "node, react, css".
    #[validate(length(min = 1, message = "Skills is required"))]
    pub skills: String,

    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    pub location: Option<String>,

    #[validate(required(message = "From date is required"))]
    pub from: Option<DateTime<Utc>>,

    pub to: Option<DateTime<Utc>>,

    #[serde(default)]
    pub current: bool,

    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddEducationRequest {
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,

    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,

    #[validate(length(min = 1, message = "Field of study is required"))]
    pub field_of_study: String,

    #[validate(required(message = "From date is required"))]
    pub from: Option<DateTime<Utc>>,

    pub to: Option<DateTime<Utc>>,

    #[serde(default)]
    pub current: bool,

    pub description: Option<String>,
}

// Malformed identifiers surface exactly like absent resources.
fn parse_id(raw: &str, missing: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(missing.to_string()))
}

// ============================================
// Handler Functions
// ============================================

/// Get the authenticated user's profile
/// GET /api/v1/profiles/me
pub async fn get_own_profile(
    svc: web::Data<ProfileService>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let profile = svc.get_own_profile(user_id.0).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// List all profiles (public)
/// GET /api/v1/profiles
pub async fn list_profiles(svc: web::Data<ProfileService>) -> Result<HttpResponse> {
    let profiles = svc.list_profiles().await?;
    Ok(HttpResponse::Ok().json(profiles))
}

/// Get a profile by user id (public)
/// GET /api/v1/profiles/user/{user_id}
pub async fn get_profile_by_user(
    svc: web::Data<ProfileService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user_id = parse_id(&path.into_inner(), "profile not found")?;
    let profile = svc.get_profile_by_user(user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Create or update the authenticated user's profile
/// POST /api/v1/profiles
pub async fn upsert_profile(
    svc: web::Data<ProfileService>,
    user_id: UserId,
    req: web::Json<UpsertProfileRequest>,
) -> Result<HttpResponse> {
    req.validate()?;
    let req = req.into_inner();

    let profile = svc
        .upsert_profile(
            user_id.0,
            UpsertProfileFields {
                status: req.status,
                skills: req.skills,
                company: req.company,
                website: req.website,
                location: req.location,
                bio: req.bio,
                github_username: req.github_username,
                youtube: req.youtube,
                twitter: req.twitter,
                facebook: req.facebook,
                linkedin: req.linkedin,
                instagram: req.instagram,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Delete the authenticated user's profile and user record
/// DELETE /api/v1/profiles
pub async fn delete_account(
    svc: web::Data<ProfileService>,
    user_id: UserId,
) -> Result<HttpResponse> {
    svc.delete_account(user_id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Add a work-history entry
/// PUT /api/v1/profiles/experience
pub async fn add_experience(
    svc: web::Data<ProfileService>,
    user_id: UserId,
    req: web::Json<AddExperienceRequest>,
) -> Result<HttpResponse> {
    req.validate()?;
    let req = req.into_inner();
    let Some(from) = req.from else {
        return Err(AppError::Internal("validated field missing".to_string()));
    };

    let profile = svc
        .add_experience(
            user_id.0,
            ExperienceInput {
                title: req.title,
                company: req.company,
                location: req.location,
                from,
                to: req.to,
                current: req.current,
                description: req.description,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Remove a work-history entry by id
/// DELETE /api/v1/profiles/experience/{entry_id}
pub async fn remove_experience(
    svc: web::Data<ProfileService>,
    user_id: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let entry_id = parse_id(&path.into_inner(), "experience entry not found")?;
    let profile = svc.remove_experience(user_id.0, entry_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Add an education entry
/// PUT /api/v1/profiles/education
pub async fn add_education(
    svc: web::Data<ProfileService>,
    user_id: UserId,
    req: web::Json<AddEducationRequest>,
) -> Result<HttpResponse> {
    req.validate()?;
    let req = req.into_inner();
    let Some(from) = req.from else {
        return Err(AppError::Internal("validated field missing".to_string()));
    };

    let profile = svc
        .add_education(
            user_id.0,
            EducationInput {
                school: req.school,
                degree: req.degree,
                field_of_study: req.field_of_study,
                from,
                to: req.to,
                current: req.current,
                description: req.description,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Remove an education entry by id
/// DELETE /api/v1/profiles/education/{entry_id}
pub async fn remove_education(
    svc: web::Data<ProfileService>,
    user_id: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let entry_id = parse_id(&path.into_inner(), "education entry not found")?;
    let profile = svc.remove_education(user_id.0, entry_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Public repositories for a GitHub username (public)
/// GET /api/v1/profiles/github/{username}
pub async fn get_github_repos(
    github: web::Data<GithubClient>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let repos = github.fetch_repos(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(repos))
}
