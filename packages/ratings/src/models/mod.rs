pub mod game;
pub mod user_profile;
