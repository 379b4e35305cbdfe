use crate::error::{MirrorBoxError, Result};
use crate::particle::{Direction, Particle};

/// The effect a grid cell has on a particle passing through it during one tick.
///
/// Each call to [`CellBehavior::step`] is a whole tick: a mirror reflects the particle and moves
/// it one cell along the new direction in the same call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellBehavior {
    /// No mirror; the particle keeps going.
    #[default]
    Empty,
    /// A `/` mirror: `(dx, dy) -> (-dy, -dx)`.
    ForwardSlashMirror,
    /// A `\` mirror: `(dx, dy) -> (dy, dx)`.
    BackSlashMirror,
}

impl CellBehavior {
    /// Character used when rendering the box.
    pub fn glyph(&self) -> char {
        match self {
            CellBehavior::Empty => ' ',
            CellBehavior::ForwardSlashMirror => '/',
            CellBehavior::BackSlashMirror => '\\',
        }
    }

    /// Parses a rendering glyph back into a behavior.
    pub fn from_glyph(glyph: char) -> Result<Self> {
        match glyph {
            ' ' => Ok(CellBehavior::Empty),
            '/' => Ok(CellBehavior::ForwardSlashMirror),
            '\\' => Ok(CellBehavior::BackSlashMirror),
            other => Err(MirrorBoxError::InvalidMirrorDescription(other.to_string())),
        }
    }

    pub fn is_mirror(&self) -> bool {
        !matches!(self, CellBehavior::Empty)
    }

    /// Direction a particle leaves this cell with, given the one it arrived with.
    pub fn reflect(&self, incoming: Direction) -> Direction {
        match self {
            CellBehavior::Empty => incoming,
            CellBehavior::ForwardSlashMirror => incoming.transposed().reversed(),
            CellBehavior::BackSlashMirror => incoming.transposed(),
        }
    }

    /// One tick for a particle sitting on this cell.
    pub fn step(&self, incoming: Particle) -> Particle {
        match self {
            CellBehavior::Empty => incoming.advance(),
            _ => incoming.turn_and_advance(self.reflect(incoming.direction)),
        }
    }
}
