use thiserror::Error;

/// Invalid-argument failures raised by [`UserProfile`](crate::UserProfile).
///
/// Both variants are reported before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserProfileError {
    #[error("Rating must be between {min} and {max}.")]
    InvalidRating { rating: i32, min: i32, max: i32 },

    #[error("Name cannot be null or empty.")]
    InvalidName,
}
