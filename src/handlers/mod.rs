pub mod health;
pub mod posts;
pub mod profiles;

pub use health::*;
pub use posts::*;
pub use profiles::*;
