use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub jwt: JwtConfig,
    pub github: GithubConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_env")]
    pub env: String,

    #[serde(default = "default_app_host")]
    pub host: String,

    #[serde(default = "default_app_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,

    #[serde(default = "default_jwt_access_ttl")]
    pub access_token_ttl: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_github_api_url")]
    pub api_url: String,

    /// Optional token for a higher unauthenticated rate limit.
    #[serde(default)]
    pub token: Option<String>,
}

// Default value functions
fn default_app_env() -> String {
    "development".to_string()
}

fn default_app_host() -> String {
    "0.0.0.0".to_string()
}

fn default_app_port() -> u16 {
    8080
}

fn default_jwt_access_ttl() -> i64 {
    3600 // 1 hour
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let app = AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| default_app_env()),
            host: env::var("APP_HOST").unwrap_or_else(|_| default_app_host()),
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| default_app_port().to_string())
                .parse()
                .unwrap_or(default_app_port()),
        };

        let jwt = JwtConfig {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            access_token_ttl: env::var("JWT_ACCESS_TOKEN_TTL")
                .unwrap_or_else(|_| default_jwt_access_ttl().to_string())
                .parse()
                .unwrap_or(default_jwt_access_ttl()),
        };

        let github = GithubConfig {
            api_url: env::var("GITHUB_API_URL").unwrap_or_else(|_| default_github_api_url()),
            token: env::var("GITHUB_TOKEN").ok(),
        };

        Config { app, jwt, github }
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.env == "development"
    }
}
