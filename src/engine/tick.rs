use log::trace;

use super::{board::Board, error::Result};
use crate::fightsnake::types::Direction;

impl Board {
    /// Moves snake `id` one cell in `direction` and lets it eat whatever food
    /// it lands on. Returns the new snapshot; `self` is left as it was.
    ///
    /// Nobody is eliminated here. Move every snake for the turn from the same
    /// snapshot, merge the results, and only then ask [`is_alive`] about each
    /// of them.
    ///
    /// [`is_alive`]: super::elimination::is_alive
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::UnknownAgent`](super::error::EngineError) if
    /// there is no snake with `id` on the board.
    pub fn advance(&self, id: &str, direction: Direction) -> Result<Board> {
        let mut next = self.clone();
        let max_health = next.rules().max_health;

        let head = {
            let snake = next.snake_mut(id)?;
            snake.step(direction);
            snake.head()
        };

        if next.take_food(head) {
            trace!("snake {id} eating food at {head}");
            next.snake_mut(id)?.grow_to(max_health);
        }

        Ok(next)
    }
}

/// Free-function form of [`Board::advance`].
///
/// # Errors
///
/// Fails with [`EngineError::UnknownAgent`](super::error::EngineError) if
/// there is no snake with `id` on the board.
pub fn advance(board: &Board, id: &str, direction: Direction) -> Result<Board> {
    board.advance(id, direction)
}
