use std::fmt;
use std::str::FromStr;

use crate::error::{MirrorBoxError, Result};
use crate::grid::MirrorBox;
use crate::letters::{index_to_letter, letter_to_index};
use crate::particle::{Direction, Particle};

/// A side of the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// `x = 0` side, indexed by row.
    Left,
    /// `x = width - 1` side, indexed by row.
    Right,
    /// `y = 0` side, indexed by column.
    Top,
    /// `y = height - 1` side, indexed by column.
    Bottom,
}

impl Side {
    /// Arrow pointing into the box from this side.
    pub fn marker(&self) -> char {
        match self {
            Side::Left => '>',
            Side::Right => '<',
            Side::Top => 'v',
            Side::Bottom => '^',
        }
    }

    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '>' => Some(Side::Left),
            '<' => Some(Side::Right),
            'v' => Some(Side::Top),
            '^' => Some(Side::Bottom),
            _ => None,
        }
    }

    /// Direction of a particle entering through this side.
    pub fn inward(&self) -> Direction {
        match self {
            Side::Left => Direction::RIGHT,
            Side::Right => Direction::LEFT,
            Side::Top => Direction::DOWN,
            Side::Bottom => Direction::UP,
        }
    }

    /// Left and right are indexed by row, top and bottom by column.
    pub fn is_row_side(&self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// Where a particle enters or leaves the box: a side plus the row or column index on it.
///
/// The textual form is two characters, the side's [`Side::marker`] followed by the index as a
/// letter: `">C"` is row 2 on the left side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeDescriptor {
    pub side: Side,
    pub index: usize,
}

impl EdgeDescriptor {
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }

    /// Checks that the index exists on this side of `mirror_box`.
    pub fn validate(&self, mirror_box: &MirrorBox) -> Result<()> {
        let limit = if self.side.is_row_side() { mirror_box.height() } else { mirror_box.width() };
        if self.index < limit {
            Ok(())
        } else {
            Err(MirrorBoxError::InvalidEdgeDescriptor(self.to_string()))
        }
    }

    /// The particle entering `mirror_box` through this edge cell, placed on the boundary cell
    /// and moving inward.
    pub fn entry_particle(&self, mirror_box: &MirrorBox) -> Result<Particle> {
        self.validate(mirror_box)?;
        let i = self.index as i32;
        let (x, y) = match self.side {
            Side::Left => (0, i),
            Side::Right => (mirror_box.width() as i32 - 1, i),
            Side::Top => (i, 0),
            Side::Bottom => (i, mirror_box.height() as i32 - 1),
        };
        Ok(Particle::new(x, y, self.side.inward()))
    }

    /// The edge a particle has left `mirror_box` through, or `None` while it is still inside.
    ///
    /// Only the position is used. The x axis is checked before the y axis, so a particle
    /// outside on both axes resolves to the left or right side.
    pub fn exit_of(mirror_box: &MirrorBox, particle: &Particle) -> Option<Self> {
        let (x, y) = particle.position();
        let (w, h) = (mirror_box.width() as i32, mirror_box.height() as i32);
        let (side, index) = if x < 0 {
            (Side::Left, y)
        } else if x >= w {
            (Side::Right, y)
        } else if y < 0 {
            (Side::Top, x)
        } else if y >= h {
            (Side::Bottom, x)
        } else {
            return None;
        };
        Some(Self::new(side, index.max(0) as usize))
    }
}

impl FromStr for EdgeDescriptor {
    type Err = MirrorBoxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || MirrorBoxError::InvalidEdgeDescriptor(s.to_string());
        let mut chars = s.chars();
        let (Some(marker), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let side = Side::from_marker(marker).ok_or_else(invalid)?;
        let index = letter_to_index(letter).ok_or_else(invalid)?;
        Ok(Self::new(side, index))
    }
}

impl fmt::Display for EdgeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match index_to_letter(self.index) {
            Some(letter) => write!(f, "{}{}", self.side.marker(), letter),
            None => write!(f, "{}#{}", self.side.marker(), self.index),
        }
    }
}
