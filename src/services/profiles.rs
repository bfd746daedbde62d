/// Profile aggregate manager.
///
/// Owns one profile document per user with two embedded ordered lists
/// (experience, education). All mutations load the principal's own profile,
/// modify it in memory and replace the stored document as one unit.
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{ProfileStore, UserStore};
use crate::error::{AppError, FieldError, Result};
use crate::models::{Education, Experience, Profile, ProfileResponse};

pub struct ProfileService {
    users: Arc<dyn UserStore>,
    profiles: Arc<dyn ProfileStore>,
}

/// Optional fields of an upsert; absent fields are left untouched on update.
#[derive(Debug, Default)]
pub struct UpsertProfileFields {
    pub status: String,
    /// Raw comma-delimited skill list, normalized by the service.
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

#[derive(Debug)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct EducationInput {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

/// Splits a comma-delimited skill list, trimming each piece and dropping
/// empty segments.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { users, profiles }
    }

    /// Get the principal's own profile with the user's identity populated.
    pub async fn get_own_profile(&self, principal: Uuid) -> Result<ProfileResponse> {
        self.get_profile_by_user(principal).await
    }

    /// Get the profile for an arbitrary user id.
    pub async fn get_profile_by_user(&self, user_id: Uuid) -> Result<ProfileResponse> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("profile not found".to_string()))?;

        let user = self
            .users
            .find_by_id(profile.user)
            .await?
            .ok_or_else(|| AppError::NotFound("profile not found".to_string()))?;

        Ok(ProfileResponse::new(profile, &user))
    }

    /// List every profile with user identities populated. Public.
    pub async fn list_profiles(&self) -> Result<Vec<ProfileResponse>> {
        let profiles = self.profiles.list().await?;
        let mut responses = Vec::with_capacity(profiles.len());

        for profile in profiles {
            match self.users.find_by_id(profile.user).await? {
                Some(user) => responses.push(ProfileResponse::new(profile, &user)),
                None => {
                    tracing::warn!(user = %profile.user, "profile references a missing user");
                }
            }
        }

        Ok(responses)
    }

    /// Create the principal's profile, or update it if one exists.
    /// Only supplied optional fields are written; absent fields keep their
    /// stored value.
    pub async fn upsert_profile(
        &self,
        principal: Uuid,
        fields: UpsertProfileFields,
    ) -> Result<Profile> {
        let skills = parse_skills(&fields.skills);
        if skills.is_empty() {
            return Err(AppError::Validation(vec![FieldError::new(
                "skills",
                "Skills is required",
            )]));
        }

        let mut profile = match self.profiles.find_by_user(principal).await? {
            Some(mut existing) => {
                existing.status = fields.status.clone();
                existing.skills = skills;
                existing
            }
            None => Profile::new(principal, fields.status.clone(), skills),
        };

        apply_optional_fields(&mut profile, &fields);
        profile.updated_at = Utc::now();

        self.profiles.upsert(profile.clone()).await?;
        tracing::info!(user = %principal, "profile upserted");

        Ok(profile)
    }

    /// Remove the principal's profile and the underlying user record.
    /// Posts authored by the user are left in place.
    pub async fn delete_account(&self, principal: Uuid) -> Result<()> {
        self.profiles.delete_by_user(principal).await?;
        self.users.delete(principal).await?;
        tracing::info!(user = %principal, "profile and user removed");

        Ok(())
    }

    /// Insert a work-history entry at the head of the principal's profile.
    pub async fn add_experience(&self, principal: Uuid, input: ExperienceInput) -> Result<Profile> {
        let mut profile = self.own_profile(principal).await?;

        let entry = Experience {
            id: Uuid::new_v4(),
            title: input.title,
            company: input.company,
            location: input.location,
            from: input.from,
            to: input.to,
            current: input.current,
            description: input.description,
        };

        profile.experience.insert(0, entry);
        profile.updated_at = Utc::now();
        self.profiles.upsert(profile.clone()).await?;

        Ok(profile)
    }

    /// Remove a work-history entry by id. The entry is looked up in the
    /// principal's own profile only, so cross-user removal cannot happen.
    pub async fn remove_experience(&self, principal: Uuid, entry_id: Uuid) -> Result<Profile> {
        let mut profile = self.own_profile(principal).await?;

        let index = profile
            .experience
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| AppError::NotFound("experience entry not found".to_string()))?;

        profile.experience.remove(index);
        profile.updated_at = Utc::now();
        self.profiles.upsert(profile.clone()).await?;

        Ok(profile)
    }

    /// Insert an education entry at the head of the principal's profile.
    pub async fn add_education(&self, principal: Uuid, input: EducationInput) -> Result<Profile> {
        let mut profile = self.own_profile(principal).await?;

        let entry = Education {
            id: Uuid::new_v4(),
            school: input.school,
            degree: input.degree,
            field_of_study: input.field_of_study,
            from: input.from,
            to: input.to,
            current: input.current,
            description: input.description,
        };

        profile.education.insert(0, entry);
        profile.updated_at = Utc::now();
        self.profiles.upsert(profile.clone()).await?;

        Ok(profile)
    }

    /// Remove an education entry by id.
    pub async fn remove_education(&self, principal: Uuid, entry_id: Uuid) -> Result<Profile> {
        let mut profile = self.own_profile(principal).await?;

        let index = profile
            .education
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| AppError::NotFound("education entry not found".to_string()))?;

        profile.education.remove(index);
        profile.updated_at = Utc::now();
        self.profiles.upsert(profile.clone()).await?;

        Ok(profile)
    }

    async fn own_profile(&self, principal: Uuid) -> Result<Profile> {
        self.profiles
            .find_by_user(principal)
            .await?
            .ok_or_else(|| AppError::NotFound("profile not found".to_string()))
    }
}

fn apply_optional_fields(profile: &mut Profile, fields: &UpsertProfileFields) {
    if let Some(company) = &fields.company {
        profile.company = Some(company.clone());
    }
    if let Some(website) = &fields.website {
        profile.website = Some(website.clone());
    }
    if let Some(location) = &fields.location {
        profile.location = Some(location.clone());
    }
    if let Some(bio) = &fields.bio {
        profile.bio = Some(bio.clone());
    }
    if let Some(github_username) = &fields.github_username {
        profile.github_username = Some(github_username.clone());
    }
    if let Some(youtube) = &fields.youtube {
        profile.social.youtube = Some(youtube.clone());
    }
    if let Some(twitter) = &fields.twitter {
        profile.social.twitter = Some(twitter.clone());
    }
    if let Some(facebook) = &fields.facebook {
        profile.social.facebook = Some(facebook.clone());
    }
    if let Some(linkedin) = &fields.linkedin {
        profile.social.linkedin = Some(linkedin.clone());
    }
    if let Some(instagram) = &fields.instagram {
        profile.social.instagram = Some(instagram.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::User;

    fn service() -> (ProfileService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (
            ProfileService::new(store.clone(), store.clone()),
            store,
        )
    }

    async fn seed_user(store: &Arc<MemoryStore>, name: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            avatar: Some(format!("https://avatars.test/{}", name)),
            password_hash: "opaque".to_string(),
            created_at: Utc::now(),
        };
        UserStore::insert(store.as_ref(), user.clone()).await.unwrap();
        user
    }

    fn upsert_fields(status: &str, skills: &str) -> UpsertProfileFields {
        UpsertProfileFields {
            status: status.to_string(),
            skills: skills.to_string(),
            ..Default::default()
        }
    }

    fn experience(title: &str) -> ExperienceInput {
        ExperienceInput {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            from: Utc::now(),
            to: None,
            current: true,
            description: None,
        }
    }

    #[test]
    fn test_parse_skills_trims_and_drops_empties() {
        assert_eq!(
            parse_skills("node, react , css"),
            vec!["node", "react", "css"]
        );
        assert_eq!(parse_skills(" , ,"), Vec::<String>::new());
        assert_eq!(parse_skills("rust"), vec!["rust"]);
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_profile() {
        let (svc, store) = service();
        let user = seed_user(&store, "alice").await;

        let first = svc
            .upsert_profile(user.id, upsert_fields("developer", "rust"))
            .await
            .unwrap();
        let second = svc
            .upsert_profile(user.id, upsert_fields("architect", "rust, go"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.status, "architect");
        assert_eq!(svc.list_profiles().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_preserves_absent_optional_fields() {
        let (svc, store) = service();
        let user = seed_user(&store, "alice").await;

        let mut fields = upsert_fields("developer", "rust");
        fields.company = Some("Acme".to_string());
        fields.twitter = Some("https://twitter.com/alice".to_string());
        svc.upsert_profile(user.id, fields).await.unwrap();

        // Second call omits company and twitter entirely
        let updated = svc
            .upsert_profile(user.id, upsert_fields("developer", "rust"))
            .await
            .unwrap();

        assert_eq!(updated.company.as_deref(), Some("Acme"));
        assert_eq!(
            updated.social.twitter.as_deref(),
            Some("https://twitter.com/alice")
        );
    }

    #[tokio::test]
    async fn test_upsert_rejects_blank_skill_list() {
        let (svc, store) = service();
        let user = seed_user(&store, "alice").await;

        let err = svc
            .upsert_profile(user.id, upsert_fields("developer", " , "))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_experience_inserted_at_head() {
        let (svc, store) = service();
        let user = seed_user(&store, "alice").await;
        svc.upsert_profile(user.id, upsert_fields("developer", "rust"))
            .await
            .unwrap();

        svc.add_experience(user.id, experience("first")).await.unwrap();
        svc.add_experience(user.id, experience("second")).await.unwrap();
        let profile = svc.add_experience(user.id, experience("third")).await.unwrap();

        let titles: Vec<&str> = profile.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_remove_unknown_experience_leaves_profile_unchanged() {
        let (svc, store) = service();
        let user = seed_user(&store, "alice").await;
        svc.upsert_profile(user.id, upsert_fields("developer", "rust"))
            .await
            .unwrap();
        svc.add_experience(user.id, experience("kept")).await.unwrap();

        let err = svc
            .remove_experience(user.id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let profile = svc.get_own_profile(user.id).await.unwrap();
        assert_eq!(profile.experience.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_experience_by_id_not_position() {
        let (svc, store) = service();
        let user = seed_user(&store, "alice").await;
        svc.upsert_profile(user.id, upsert_fields("developer", "rust"))
            .await
            .unwrap();

        svc.add_experience(user.id, experience("first")).await.unwrap();
        let with_two = svc.add_experience(user.id, experience("second")).await.unwrap();
        let first_id = with_two
            .experience
            .iter()
            .find(|e| e.title == "first")
            .unwrap()
            .id;

        let profile = svc.remove_experience(user.id, first_id).await.unwrap();
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "second");
    }

    #[tokio::test]
    async fn test_delete_account_removes_profile_and_user() {
        let (svc, store) = service();
        let user = seed_user(&store, "alice").await;
        svc.upsert_profile(user.id, upsert_fields("developer", "rust"))
            .await
            .unwrap();

        svc.delete_account(user.id).await.unwrap();

        assert!(matches!(
            svc.get_own_profile(user.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(UserStore::find_by_id(store.as_ref(), user.id)
            .await
            .unwrap()
            .is_none());
    }
}
