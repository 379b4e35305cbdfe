use crate::error::{MirrorBoxError, Result};

/// One of the eight non-zero unit steps on the grid.
///
/// Both components are in `{-1, 0, 1}` and never both zero; the only way to build a
/// `Direction` from raw integers is [`Direction::new`], which checks this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    dx: i32,
    dy: i32,
}

impl Direction {
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    /// Towards increasing `y`, i.e. from the top row to the bottom row.
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    /// Towards decreasing `y`.
    pub const UP: Direction = Direction { dx: 0, dy: -1 };

    /// All eight valid directions.
    pub const ALL: [Direction; 8] = [
        Direction { dx: 1, dy: 0 },
        Direction { dx: 1, dy: 1 },
        Direction { dx: 0, dy: 1 },
        Direction { dx: -1, dy: 1 },
        Direction { dx: -1, dy: 0 },
        Direction { dx: -1, dy: -1 },
        Direction { dx: 0, dy: -1 },
        Direction { dx: 1, dy: -1 },
    ];

    /// Creates a direction, failing with `InvalidDirection` for anything that is not a unit step.
    pub fn new(dx: i32, dy: i32) -> Result<Self> {
        let unit = |v: i32| (-1..=1).contains(&v);
        if !unit(dx) || !unit(dy) || (dx == 0 && dy == 0) {
            return Err(MirrorBoxError::InvalidDirection { dx, dy });
        }
        Ok(Self { dx, dy })
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }

    /// Swaps the components: `(dx, dy) -> (dy, dx)`.
    pub(crate) fn transposed(self) -> Self {
        Self { dx: self.dy, dy: self.dx }
    }

    /// `(dx, dy) -> (-dx, -dy)`.
    pub fn reversed(self) -> Self {
        Self { dx: -self.dx, dy: -self.dy }
    }

    /// True for the four directions along a single axis.
    pub fn is_axial(&self) -> bool {
        self.dx == 0 || self.dy == 0
    }
}

/// The simulated light point: a grid position and a direction of travel.
///
/// Particles are plain values. A tick produces a new particle instead of mutating one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl Particle {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// Moves one step along the current direction.
    pub fn advance(self) -> Self {
        Self::new(self.x + self.direction.dx, self.y + self.direction.dy, self.direction)
    }

    /// `n` successive calls to [`Particle::advance`].
    pub fn advance_by(self, n: u32) -> Self {
        (0..n).fold(self, |p, _| p.advance())
    }

    /// Turns to `direction` and moves one step along it.
    pub fn turn_and_advance(self, direction: Direction) -> Self {
        Self::new(self.x, self.y, direction).advance()
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Free-function form of [`Particle::advance`].
pub fn advance(p: Particle) -> Particle {
    p.advance()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_validation() {
        assert!(Direction::new(0, 0).is_err());
        assert!(Direction::new(2, 0).is_err());
        assert!(Direction::new(0, -2).is_err());
        assert_eq!(
            Direction::new(1, 5),
            Err(MirrorBoxError::InvalidDirection { dx: 1, dy: 5 })
        );

        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Ok(d) = Direction::new(dx, dy) {
                    assert!(Direction::ALL.contains(&d));
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
    }

    #[test]
    fn test_advance_moves_by_direction() {
        for d in Direction::ALL {
            let start = Particle::new(3, -2, d);
            for n in 0..10 {
                let p = start.advance_by(n);
                assert_eq!(p.x, 3 + n as i32 * d.dx());
                assert_eq!(p.y, -2 + n as i32 * d.dy());
                assert_eq!(p.direction, d);
            }
        }
    }

    #[test]
    fn test_advance_is_pure() {
        let p = Particle::new(0, 0, Direction::RIGHT);
        let q = advance(p);
        assert_eq!(p.position(), (0, 0));
        assert_eq!(q.position(), (1, 0));
    }
}
