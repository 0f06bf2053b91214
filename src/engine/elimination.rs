use std::fmt;

use log::debug;

use super::{board::Board, error::Result};

/// Why a snake is out of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Elimination {
    Starved,
    OutOfBounds,
    SelfCollision,
    /// Met `other` head-on and was not strictly longer.
    HeadToHead { other: String },
    /// Ran into a segment of `other`.
    BodyCollision { other: String },
}

impl fmt::Display for Elimination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Starved => write!(f, "starved"),
            Self::OutOfBounds => write!(f, "went out of bounds"),
            Self::SelfCollision => write!(f, "hit its own body"),
            Self::HeadToHead { other } => {
                write!(f, "lost a head-on collision with {other}")
            },
            Self::BodyCollision { other } => write!(f, "hit {other}'s body"),
        }
    }
}

/// Decides whether snake `id` is out of the game, and why.
///
/// Meant to run once every snake has moved for the turn. Rules are applied
/// in order and the first match wins: starvation, bounds, the snake's own
/// body, then every other snake.
///
/// # Errors
///
/// Fails with [`EngineError::UnknownAgent`](super::error::EngineError) if
/// there is no snake with `id` on the board.
pub fn elimination(board: &Board, id: &str) -> Result<Option<Elimination>> {
    let snake = board.snake(id)?;
    let head = snake.head();

    let cause = if snake.health() <= 0 {
        Some(Elimination::Starved)
    } else if !board.contains(head) {
        Some(Elimination::OutOfBounds)
    } else if snake.tail_segments().any(|c| *c == head) {
        Some(Elimination::SelfCollision)
    } else {
        board
            .snakes()
            .iter()
            .filter(|other| other.id() != snake.id())
            .find_map(|other| {
                if other.head() == head {
                    // equal length is fatal for both
                    (snake.length() <= other.length()).then(|| {
                        Elimination::HeadToHead {
                            other: other.id().to_owned(),
                        }
                    })
                } else if other.body().contains(&head) {
                    Some(Elimination::BodyCollision {
                        other: other.id().to_owned(),
                    })
                } else {
                    None
                }
            })
    };

    if let Some(cause) = &cause {
        debug!("snake {id} is dying because it {cause}");
    }

    Ok(cause)
}

/// # Errors
///
/// Fails with [`EngineError::UnknownAgent`](super::error::EngineError) if
/// there is no snake with `id` on the board.
pub fn is_alive(board: &Board, id: &str) -> Result<bool> {
    Ok(elimination(board, id)?.is_none())
}

impl Board {
    /// Ids of every snake that survives this snapshot, in board order.
    #[must_use]
    pub fn survivors(&self) -> Vec<&str> {
        self.snakes()
            .iter()
            .map(|snake| snake.id())
            .filter(|id| matches!(elimination(self, id), Ok(None)))
            .collect()
    }
}
