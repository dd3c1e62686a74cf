use std::cell::Cell;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

/// What a profile needs from a game: a stable identity and a rating slot
/// that can be overwritten through a shared reference.
#[cfg_attr(test, automock)]
pub trait Rateable {
    /// Identity used for rated-list membership.
    ///
    /// Must return the same value for the whole life of the game: profiles
    /// index rated games by the id seen when the game was first rated.
    fn game_id(&self) -> Uuid;
    fn rating(&self) -> i32;
    fn set_rating(&self, rating: i32);
}

/// A game whose single rating is shared by everyone holding it.
///
/// Starts at `0` until somebody rates it. Equality is identity: two games are
/// equal only when their ids match, regardless of title or rating.
#[derive(Debug, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    rating: Cell<i32>,
}

impl Game {
    pub fn new(title: &str) -> Self {
        Game {
            id: Uuid::new_v4(),
            title: title.to_string(),
            rating: Cell::new(0),
        }
    }
}

impl Rateable for Game {
    fn game_id(&self) -> Uuid {
        self.id
    }

    fn rating(&self) -> i32 {
        self.rating.get()
    }

    fn set_rating(&self, rating: i32) {
        self.rating.set(rating);
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Game {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = Game::new("Chess");

        assert_eq!(game.title, "Chess");
        assert_eq!(game.rating(), 0);
        assert!(!game.id.is_nil());
    }

    #[test]
    fn test_game_id_uniqueness() {
        let game1 = Game::new("Go");
        let game2 = Game::new("Go");

        assert_ne!(game1.id, game2.id);
        assert_ne!(game1, game2);
    }

    #[test]
    fn test_set_rating_through_shared_reference() {
        let game = Game::new("Shogi");
        let alias = &game;

        alias.set_rating(4);

        assert_eq!(game.rating(), 4);
    }

    #[test]
    fn test_equality_ignores_rating_and_title() {
        let game = Game::new("Xiangqi");
        let json = serde_json::to_string(&game).unwrap();
        let mut copy: Game = serde_json::from_str(&json).unwrap();
        copy.title = "Chinese Chess".to_string();
        copy.set_rating(5);

        assert_eq!(game, copy);
    }

    #[test]
    fn test_game_serialization() {
        let game = Game::new("Checkers");
        game.set_rating(2);

        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"title\":\"Checkers\""));
        assert!(json.contains("\"rating\":2"));
        assert!(json.contains(&game.id.to_string()));
    }
}
