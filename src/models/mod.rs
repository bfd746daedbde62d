use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// External identity record. Referenced by profiles and posts, never embedded.
/// The password hash is written by the auth collaborator and opaque here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Identity fields of a user as embedded in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Profile aggregate. One per user, keyed by the owning user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user: Uuid,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user: Uuid, status: String, skills: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            status,
            skills,
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Work-history entry embedded in a profile. The id is assigned at insertion
/// and never changes; removal is by id, not position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Profile with the owning user's identity fields populated in place of the
/// raw owner id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user: UserSummary,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileResponse {
    pub fn new(profile: Profile, user: &User) -> Self {
        Self {
            id: profile.id,
            user: UserSummary::from(user),
            status: profile.status,
            skills: profile.skills,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            github_username: profile.github_username,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            updated_at: profile.updated_at,
        }
    }
}

/// Post aggregate. `name` and `avatar` are snapshots of the author taken at
/// creation time and are not re-synced when the user record changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }
}

/// At most one like per user per post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
}

/// Comment embedded in a post. Only `user`, the author, may delete it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        }
    }
}
