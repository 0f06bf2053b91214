use std::{collections::VecDeque, fmt};

use itertools::Itertools;
use log::trace;

use super::error::{EngineError, Result};
use crate::fightsnake::{
    constants::MAX_HEALTH,
    types::{Coord, Direction},
};

/// One snake on the board.
///
/// The body is never empty and always starts at the head, so `head()` and
/// `length()` are read straight off it and cannot drift from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snake {
    id:     String,
    health: i64,
    body:   VecDeque<Coord>,
}

impl Snake {
    /// # Errors
    ///
    /// Fails with [`EngineError::EmptyBody`] if `body` has no segments, or
    /// with [`EngineError::HealthOutOfRange`] if `health` is above
    /// [`MAX_HEALTH`]. Zero and negative health are accepted: a starved snake
    /// is still a valid snapshot until it is eliminated.
    pub fn new(
        id: impl Into<String>,
        health: i64,
        body: impl IntoIterator<Item = Coord>,
    ) -> Result<Self> {
        let id = id.into();
        let body: VecDeque<_> = body.into_iter().collect();
        if body.is_empty() {
            return Err(EngineError::EmptyBody(id));
        }
        if health > MAX_HEALTH {
            return Err(EngineError::HealthOutOfRange {
                id,
                health,
                max: MAX_HEALTH,
            });
        }
        Ok(Self { id, health, body })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn health(&self) -> i64 {
        self.health
    }

    #[must_use]
    pub fn head(&self) -> Coord {
        self.body[0]
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub const fn body(&self) -> &VecDeque<Coord> {
        &self.body
    }

    /// Moves one cell in `direction`: the new head is pushed on, the tail
    /// cell is vacated and a point of health is spent. Health is not floored at
    /// zero; starvation is decided by the elimination rules.
    pub fn step(&mut self, direction: Direction) {
        let head = self.head().neighbour(direction);
        self.body.push_front(head);
        self.body.pop_back();
        self.health = self.health.saturating_sub(1);
        trace!(
            "snake {} moving {direction} to {head}, down to {} hp",
            self.id,
            self.health
        );
    }

    /// Eats: health goes back to [`MAX_HEALTH`] and the tail segment is
    /// doubled up, so the snake is one longer from the next move on.
    pub fn grow(&mut self) {
        self.grow_to(MAX_HEALTH);
    }

    pub fn grow_to(&mut self, max_health: i64) {
        self.health = max_health;
        if let Some(&tail) = self.body.back() {
            self.body.push_back(tail);
        }
        trace!(
            "snake {} grew to length {} at {max_health} hp",
            self.id,
            self.length()
        );
    }

    /// Cells after the head. A freshly grown tail shows up twice here.
    pub fn tail_segments(&self) -> impl Iterator<Item = &Coord> {
        self.body.iter().skip(1)
    }
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} @ {} hp [{}]",
            self.id,
            self.health,
            self.body.iter().join(", ")
        )
    }
}
