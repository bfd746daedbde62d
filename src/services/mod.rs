pub mod authz;
pub mod github;
pub mod posts;
pub mod profiles;

pub use github::GithubClient;
pub use posts::PostService;
pub use profiles::ProfileService;
