use std::fmt;
use std::str::FromStr;

use crate::cell::CellBehavior;
use crate::error::MirrorBoxError;
use crate::letters::{index_to_letter, letter_to_index};

/// A mirror placed on one cell, written as `<column letter><row letter><kind>`, e.g. `"CB/"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MirrorPlacement {
    pub x: usize,
    pub y: usize,
    pub behavior: CellBehavior,
}

impl MirrorPlacement {
    pub fn new(x: usize, y: usize, behavior: CellBehavior) -> Self {
        Self { x, y, behavior }
    }
}

impl FromStr for MirrorPlacement {
    type Err = MirrorBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MirrorBoxError::InvalidMirrorDescription(s.to_string());
        let chars: Vec<char> = s.chars().collect();
        let &[column, row, kind] = chars.as_slice() else {
            return Err(invalid());
        };
        let x = letter_to_index(column).ok_or_else(invalid)?;
        let y = letter_to_index(row).ok_or_else(invalid)?;
        let behavior = match CellBehavior::from_glyph(kind) {
            Ok(b) if b.is_mirror() => b,
            _ => return Err(invalid()),
        };
        Ok(Self { x, y, behavior })
    }
}

impl fmt::Display for MirrorPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = index_to_letter(self.x).ok_or(fmt::Error)?;
        let row = index_to_letter(self.y).ok_or(fmt::Error)?;
        write!(f, "{}{}{}", column, row, self.behavior.glyph())
    }
}

impl From<MirrorPlacement> for (usize, usize, CellBehavior) {
    fn from(p: MirrorPlacement) -> Self {
        (p.x, p.y, p.behavior)
    }
}
