use std::fmt;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::cell::CellBehavior;
use crate::edge::{EdgeDescriptor, Side};
use crate::error::{MirrorBoxError, Result, MAX_DIMENSION, MIN_DIMENSION};
use crate::letters::{index_to_letter, labels};
use crate::particle::Particle;
use crate::placement::MirrorPlacement;

/// Glyph marking cells crossed by a path in [`MirrorBox::render_path`].
pub const PATH_GLYPH: char = '*';

/// The rectangular box the particle travels through.
///
/// Cells are stored densely, row major, and default to [`CellBehavior::Empty`]. The box is
/// built once and only read afterwards, so it can be shared freely across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorBox {
    width: usize,
    height: usize,
    cells: Vec<CellBehavior>,
}

impl MirrorBox {
    /// Builds a box from `(x, y, behavior)` placements.
    ///
    /// Fails with `InvalidDimension` unless both sides are within
    /// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`], and with `OutOfBounds` for a placement outside
    /// the grid. A later placement on the same cell replaces the earlier one.
    pub fn new<I, P>(width: usize, height: usize, placements: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<(usize, usize, CellBehavior)>,
    {
        check_dimension("width", width)?;
        check_dimension("height", height)?;

        let mut mirror_box = Self {
            width,
            height,
            cells: vec![CellBehavior::Empty; width * height],
        };
        for placement in placements {
            let (x, y, behavior) = placement.into();
            let index = mirror_box.index(x as i64, y as i64)?;
            mirror_box.cells[index] = behavior;
        }
        Ok(mirror_box)
    }

    /// A box without mirrors.
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, std::iter::empty::<MirrorPlacement>())
    }

    /// Builds a box from textual mirror descriptions such as `"CB/"`.
    pub fn parse<S: AsRef<str>>(width: usize, height: usize, mirrors: &[S]) -> Result<Self> {
        let placements = mirrors
            .iter()
            .map(|m| m.as_ref().parse::<MirrorPlacement>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(width, height, placements)
    }

    /// Parses a textual width or height, failing with `InvalidDimension` for non-numeric
    /// or out-of-range input.
    pub fn parse_dimension(axis: &'static str, text: &str) -> Result<usize> {
        let invalid = || MirrorBoxError::InvalidDimension { axis, value: text.to_string() };
        let trimmed = text.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: usize = trimmed.parse().map_err(|_| invalid())?;
        check_dimension(axis, value)?;
        Ok(value)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The behavior at `(x, y)`, `Empty` where nothing was placed.
    pub fn at(&self, x: i32, y: i32) -> Result<CellBehavior> {
        let index = self.index(x as i64, y as i64)?;
        Ok(self.cells[index])
    }

    /// Whether the particle's position lies inside the box.
    pub fn contains(&self, particle: &Particle) -> bool {
        self.contains_position(particle.x as i64, particle.y as i64)
    }

    fn contains_position(&self, x: i64, y: i64) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i64, y: i64) -> Result<usize> {
        if !self.contains_position(x, y) {
            return Err(MirrorBoxError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize + y as usize * self.width)
    }

    /// Placed mirrors in row-major order.
    pub fn mirrors(&self) -> impl Iterator<Item = MirrorPlacement> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_mirror())
            .map(|(i, cell)| MirrorPlacement::new(i % self.width, i / self.width, *cell))
    }

    pub fn mirror_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_mirror()).count()
    }

    /// Replaces all mirrors with `count` mirrors of random kind on distinct random cells.
    ///
    /// `count` is capped at the number of cells.
    pub fn random_mirrors(&mut self, count: usize) {
        let mut rng = StdRng::seed_from_u64(get_seed());
        let total = self.cells.len();
        self.cells.iter_mut().for_each(|c| *c = CellBehavior::Empty);
        for index in rand::seq::index::sample(&mut rng, total, count.min(total)).into_vec() {
            self.cells[index] = if rng.r#gen::<bool>() {
                CellBehavior::ForwardSlashMirror
            } else {
                CellBehavior::BackSlashMirror
            };
        }
    }

    /// Every edge cell a particle can enter through: left and right rows, then top and bottom
    /// columns.
    pub fn entries(&self) -> Vec<EdgeDescriptor> {
        let rows = (0..self.height)
            .flat_map(|y| [EdgeDescriptor::new(Side::Left, y), EdgeDescriptor::new(Side::Right, y)]);
        let columns = (0..self.width)
            .flat_map(|x| [EdgeDescriptor::new(Side::Top, x), EdgeDescriptor::new(Side::Bottom, x)]);
        rows.chain(columns).collect()
    }

    /// The bordered textual rendering, without a trailing newline.
    pub fn render(&self) -> String {
        self.render_with(|_, _, cell| cell.glyph())
    }

    /// Like [`MirrorBox::render`], with every empty cell visited by `path` shown as
    /// [`PATH_GLYPH`].
    pub fn render_path(&self, path: &[Particle]) -> String {
        let mut visited = vec![false; self.cells.len()];
        for p in path.iter().filter(|p| self.contains(p)) {
            visited[p.x as usize + p.y as usize * self.width] = true;
        }
        self.render_with(|x, y, cell| {
            if !cell.is_mirror() && visited[x + y * self.width] {
                PATH_GLYPH
            } else {
                cell.glyph()
            }
        })
    }

    fn render_with<F>(&self, glyph: F) -> String
    where
        F: Fn(usize, usize, CellBehavior) -> char,
    {
        let rule = format!(" {} ", labels(self.width));
        let mut lines = Vec::with_capacity(self.height + 2);
        lines.push(rule.clone());
        for y in 0..self.height {
            let letter = index_to_letter(y).unwrap_or('?');
            let mut line = String::with_capacity(self.width + 2);
            line.push(letter);
            for x in 0..self.width {
                line.push(glyph(x, y, self.cells[x + y * self.width]));
            }
            line.push(letter);
            lines.push(line);
        }
        lines.push(rule);
        lines.join("\n")
    }
}

impl fmt::Display for MirrorBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn check_dimension(axis: &'static str, value: usize) -> Result<()> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(MirrorBoxError::InvalidDimension { axis, value: value.to_string() })
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}
