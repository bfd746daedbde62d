/// Shared fixtures for integration tests: a seeded in-memory store, token
/// minting, and a fully routed test application.
use actix_web::{test, web, App};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use devconnect_service::config::GithubConfig;
use devconnect_service::db::{MemoryStore, UserStore};
use devconnect_service::models::User;
use devconnect_service::routes::configure_routes;
use devconnect_service::security::jwt;
use devconnect_service::services::{GithubClient, PostService, ProfileService};

pub const TEST_JWT_SECRET: &str = "devconnect-test-secret";

/// Unroutable address so no test ever leaves the process.
const TEST_GITHUB_API_URL: &str = "http://127.0.0.1:9";

pub fn init_auth() {
    jwt::initialize_secret(TEST_JWT_SECRET).expect("Failed to initialize test JWT secret");
}

pub fn test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub async fn create_test_user(store: &Arc<MemoryStore>, name: &str) -> User {
    let user = User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        avatar: Some(format!("https://avatars.test/{}.png", name)),
        password_hash: "opaque-hash".to_string(),
        created_at: Utc::now(),
    };

    UserStore::insert(store.as_ref(), user.clone())
        .await
        .expect("Failed to seed test user");

    user
}

pub fn bearer_for(user: &User) -> (&'static str, String) {
    let token = jwt::create_access_token(user.id).expect("Failed to mint test token");
    ("Authorization", format!("Bearer {}", token))
}

pub async fn setup_test_app(
    store: Arc<MemoryStore>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    init_auth();

    let profile_service = web::Data::new(ProfileService::new(store.clone(), store.clone()));
    let post_service = web::Data::new(PostService::new(store.clone(), store.clone()));
    let github_client = web::Data::new(GithubClient::new(GithubConfig {
        api_url: TEST_GITHUB_API_URL.to_string(),
        token: None,
    }));

    test::init_service(
        App::new()
            .app_data(profile_service)
            .app_data(post_service)
            .app_data(github_client)
            .configure(configure_routes),
    )
    .await
}
