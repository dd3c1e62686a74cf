pub mod config;
pub mod errors;
pub mod models;

pub use config::RatingScale;
pub use errors::config_errors::ConfigError;
pub use errors::user_profile_errors::UserProfileError;
pub use models::game::{Game, Rateable};
pub use models::user_profile::{UserId, UserProfile, UserProfileSummary, NOT_RATED};
