use std::{collections::HashSet, fmt};

use super::{
    error::{EngineError, Result},
    snake::Snake,
};
use crate::fightsnake::{constants::MAX_HEALTH, types::Coord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Health a snake is restored to when it eats.
    pub max_health: i64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_health: MAX_HEALTH,
        }
    }
}

/// A snapshot of the whole game at one instant.
///
/// Snapshots are plain owned values. Transitions clone and return a new
/// board, so an older snapshot is never affected by exploring a newer one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width:  i64,
    height: i64,
    food:   Vec<Coord>,
    snakes: Vec<Snake>,
    rules:  Rules,
}

impl Board {
    /// # Errors
    ///
    /// Fails if either extent is not positive, or if two snakes share an id.
    pub fn new(
        width: i64,
        height: i64,
        food: Vec<Coord>,
        snakes: Vec<Snake>,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let mut seen = HashSet::new();
        for snake in &snakes {
            if !seen.insert(snake.id()) {
                return Err(EngineError::DuplicateAgent(snake.id().to_owned()));
            }
        }

        Ok(Self {
            width,
            height,
            food,
            snakes,
            rules: Rules::default(),
        })
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i64 {
        self.height
    }

    #[must_use]
    pub fn food(&self) -> &[Coord] {
        &self.food
    }

    #[must_use]
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }

    /// # Errors
    ///
    /// Fails with [`EngineError::UnknownAgent`] if no snake has `id`.
    pub fn snake(&self, id: &str) -> Result<&Snake> {
        self.snakes
            .iter()
            .find(|snake| snake.id() == id)
            .ok_or_else(|| EngineError::UnknownAgent(id.to_owned()))
    }

    pub(super) fn snake_mut(&mut self, id: &str) -> Result<&mut Snake> {
        self.snakes
            .iter_mut()
            .find(|snake| snake.id() == id)
            .ok_or_else(|| EngineError::UnknownAgent(id.to_owned()))
    }

    /// Removes the first food entry at `coord`, if there is one.
    pub(super) fn take_food(&mut self, coord: Coord) -> bool {
        match self.food.iter().position(|food| *food == coord) {
            Some(index) => {
                self.food.remove(index);
                true
            },
            None => false,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let c = Coord { x, y };
                if self.snakes.iter().any(|snake| snake.head() == c) {
                    write!(f, "@")?;
                } else if self
                    .snakes
                    .iter()
                    .any(|snake| snake.body().contains(&c))
                {
                    write!(f, "#")?;
                } else if self.food.contains(&c) {
                    write!(f, "*")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
