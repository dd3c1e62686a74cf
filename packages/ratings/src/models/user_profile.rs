use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::RatingScale;
use crate::errors::user_profile_errors::UserProfileError;
use crate::models::game::{Game, Rateable};

pub type UserId = i64;

/// Returned by [`UserProfile::rating_for`] for a game the user never rated.
pub const NOT_RATED: i32 = -1;

/// A user who rates games.
///
/// Ratings are stored on the game itself, so two profiles holding the same
/// `Rc<Game>` overwrite each other's value: the last rating wins. The rated
/// list keeps first-rating order and never holds the same game twice.
///
/// Holds `Rc`s, so a profile stays on the thread that built it.
#[derive(Debug)]
pub struct UserProfile<G: Rateable = Game> {
    id: UserId,
    name: String,
    rated_games: Vec<Rc<G>>,
    rated_ids: HashSet<Uuid>,
    scale: RatingScale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileSummary {
    pub id: UserId,
    pub name: String,
    pub rated_games_count: usize,
}

impl UserProfile<Game> {
    /// Profile on the default [1, 5] scale.
    pub fn new(id: UserId, name: &str) -> Result<Self, UserProfileError> {
        Self::with_scale(id, name, RatingScale::default())
    }

    /// Profile on a custom scale.
    ///
    /// Same as [`create`](UserProfile::create) with the game type fixed to
    /// [`Game`]: `UserProfile::create(..)` alone cannot infer `G`, because
    /// default type parameters do not take part in expression inference.
    pub fn with_scale(
        id: UserId,
        name: &str,
        scale: RatingScale,
    ) -> Result<Self, UserProfileError> {
        Self::create(id, name, scale)
    }
}

impl<G: Rateable> UserProfile<G> {
    /// Builds a profile over any [`Rateable`] game type.
    pub fn create(id: UserId, name: &str, scale: RatingScale) -> Result<Self, UserProfileError> {
        let name = validate_name(Some(name))?;
        Ok(UserProfile {
            id,
            name,
            rated_games: Vec::new(),
            rated_ids: HashSet::new(),
            scale,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rated_games(&self) -> &[Rc<G>] {
        &self.rated_games
    }

    pub fn rated_games_count(&self) -> usize {
        self.rated_games.len()
    }

    pub fn scale(&self) -> RatingScale {
        self.scale
    }

    /// Sets `game`'s rating and records it as rated by this user.
    ///
    /// Out-of-range ratings are refused before the game or the rated list is
    /// touched.
    pub fn rate(&mut self, game: &Rc<G>, rating: i32) -> Result<(), UserProfileError> {
        if !self.scale.contains(rating) {
            warn!(
                "User {} gave rating {} outside [{}, {}]",
                self.id,
                rating,
                self.scale.min(),
                self.scale.max()
            );
            return Err(UserProfileError::InvalidRating {
                rating,
                min: self.scale.min(),
                max: self.scale.max(),
            });
        }

        game.set_rating(rating);

        let game_id = game.game_id();
        if self.rated_ids.insert(game_id) {
            self.rated_games.push(Rc::clone(game));
            debug!("User {} rated new game {} with {}", self.id, game_id, rating);
        } else {
            debug!("User {} re-rated game {} with {}", self.id, game_id, rating);
        }
        Ok(())
    }

    /// Replaces the display name. `None` and blank names are refused.
    pub fn rename<'a>(
        &mut self,
        new_name: impl Into<Option<&'a str>>,
    ) -> Result<(), UserProfileError> {
        let new_name = match validate_name(new_name.into()) {
            Ok(name) => name,
            Err(e) => {
                warn!("Rejected blank name for user {}", self.id);
                return Err(e);
            }
        };
        debug!("Renaming user {} from '{}' to '{}'", self.id, self.name, new_name);
        self.name = new_name;
        Ok(())
    }

    pub fn has_rated(&self, game: &G) -> bool {
        self.rated_ids.contains(&game.game_id())
    }

    /// Current rating of `game`, or `None` when this user never rated it.
    pub fn rating_of(&self, game: &G) -> Option<i32> {
        self.has_rated(game).then(|| game.rating())
    }

    /// Like [`rating_of`](Self::rating_of) with [`NOT_RATED`] for unrated games.
    pub fn rating_for(&self, game: &G) -> i32 {
        self.rating_of(game).unwrap_or(NOT_RATED)
    }

    pub fn summary(&self) -> UserProfileSummary {
        UserProfileSummary {
            id: self.id,
            name: self.name.clone(),
            rated_games_count: self.rated_games.len(),
        }
    }
}

impl<G: Rateable> fmt::Display for UserProfile<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserProfile{{id={}, name='{}', ratedGamesCount={}}}",
            self.id,
            self.name,
            self.rated_games.len()
        )
    }
}

fn validate_name(name: Option<&str>) -> Result<String, UserProfileError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err(UserProfileError::InvalidName),
    }
}
