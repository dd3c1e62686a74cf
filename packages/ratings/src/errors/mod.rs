pub mod config_errors;
pub mod user_profile_errors;
