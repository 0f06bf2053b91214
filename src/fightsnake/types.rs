use std::{fmt, slice::Iter, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::engine::error::EngineError;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];
        DIRECTIONS.iter()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Right => "right",
                Direction::Down => "down",
                Direction::Left => "left",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            _ => Err(EngineError::UnknownDirection(s.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coord {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `direction`. Saturates at the edges of `i64`,
    /// which is far outside any board.
    #[must_use]
    pub const fn neighbour(&self, direction: Direction) -> Coord {
        match direction {
            Direction::Up => Coord::new(self.x, self.y.saturating_add(1)),
            Direction::Right => Coord::new(self.x.saturating_add(1), self.y),
            Direction::Down => Coord::new(self.x, self.y.saturating_sub(1)),
            Direction::Left => Coord::new(self.x.saturating_sub(1), self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_follow_the_unit_vectors() {
        let origin = Coord::new(1, 1);
        assert_eq!(origin.neighbour(Direction::Up), Coord::new(1, 2));
        assert_eq!(origin.neighbour(Direction::Right), Coord::new(2, 1));
        assert_eq!(origin.neighbour(Direction::Down), Coord::new(1, 0));
        assert_eq!(origin.neighbour(Direction::Left), Coord::new(0, 1));
    }

    #[test]
    fn neighbours_may_leave_the_grid() {
        assert_eq!(
            Coord::new(0, 0).neighbour(Direction::Down),
            Coord::new(0, -1)
        );
    }

    #[test]
    fn neighbours_saturate_at_the_edges_of_i64() {
        let corner = Coord::new(i64::MAX, i64::MIN);
        assert_eq!(corner.neighbour(Direction::Right), corner);
        assert_eq!(corner.neighbour(Direction::Down), corner);
        assert_eq!(
            corner.neighbour(Direction::Left),
            Coord::new(i64::MAX - 1, i64::MIN)
        );
    }

    #[test]
    fn directions_parse_from_their_wire_names() {
        for direction in Direction::iter() {
            let parsed: Direction = direction.to_string().parse().unwrap();
            assert_eq!(parsed, *direction);
        }
    }

    #[test]
    fn unknown_directions_are_rejected() {
        for input in ["", "UP", "north", " left"] {
            assert!(matches!(
                input.parse::<Direction>(),
                Err(EngineError::UnknownDirection(s)) if s == input
            ));
        }
    }
}
