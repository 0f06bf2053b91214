//! The `/move` request body of the public Battlesnake API, and how a request
//! board becomes an engine [`Board`](engine::Board).

use serde::Deserialize;

use crate::{
    engine::{self, EngineError},
    fightsnake::types::Coord,
};

#[derive(Deserialize, Debug, Clone)]
pub struct Ruleset {
    pub name:    String,
    pub version: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Game {
    pub id:      String,
    pub ruleset: Ruleset,
    pub timeout: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Board {
    pub height:  i64,
    pub width:   i64,
    pub food:    Vec<Coord>,
    #[serde(default)]
    pub hazards: Vec<Coord>,
    pub snakes:  Vec<Snake>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Snake {
    pub id:     String,
    pub name:   String,
    pub health: i64,
    pub body:   Vec<Coord>,
    pub head:   Coord,
    pub length: u64,
    #[serde(default)]
    pub shout:  Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GameState {
    pub game:  Game,
    pub turn:  u64,
    pub board: Board,
    pub you:   Snake,
}

impl TryFrom<Snake> for engine::Snake {
    type Error = EngineError;

    fn try_from(snake: Snake) -> Result<Self, Self::Error> {
        if snake.body.first().is_some_and(|c| *c != snake.head) {
            return Err(EngineError::InconsistentSnake {
                reason: format!(
                    "head {} is not the first body segment",
                    snake.head
                ),
                id:     snake.id,
            });
        }
        if snake.length != snake.body.len() as u64 {
            return Err(EngineError::InconsistentSnake {
                reason: format!(
                    "length {} but {} body segments",
                    snake.length,
                    snake.body.len()
                ),
                id:     snake.id,
            });
        }

        Self::new(snake.id, snake.health, snake.body)
    }
}

impl TryFrom<Board> for engine::Board {
    type Error = EngineError;

    /// Hazards have no engine counterpart and are dropped.
    fn try_from(board: Board) -> Result<Self, Self::Error> {
        let snakes = board
            .snakes
            .into_iter()
            .map(engine::Snake::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(board.width, board.height, board.food, snakes)
    }
}
