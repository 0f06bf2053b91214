//! Single-snake transitions and the elimination rules of a standard
//! Battlesnake game.

pub mod board;
pub mod elimination;
pub mod error;
pub mod snake;
pub mod tick;

pub use board::{Board, Rules};
pub use elimination::{elimination, is_alive, Elimination};
pub use error::{EngineError, Result};
pub use snake::Snake;
pub use tick::advance;
