use rayon::prelude::*;

use crate::edge::EdgeDescriptor;
use crate::error::Result;
use crate::grid::MirrorBox;
use crate::particle::Particle;

/// Result of a simulation run with a tick limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The particle left the box through `exit` after `ticks` ticks.
    Exit { exit: EdgeDescriptor, ticks: usize },
    /// The particle was still inside after `ticks` ticks.
    Trapped { ticks: usize },
}

impl Outcome {
    pub fn exit(&self) -> Option<EdgeDescriptor> {
        match self {
            Outcome::Exit { exit, .. } => Some(*exit),
            Outcome::Trapped { .. } => None,
        }
    }
}

/// Upper bound on the ticks any edge entry needs before it leaves `mirror_box`.
///
/// A tick never maps two distinct states to the same state, and nothing inside the box steps
/// onto an entry state, so a particle entering from an edge visits each (cell, axis direction)
/// pair at most once.
pub fn max_ticks(mirror_box: &MirrorBox) -> usize {
    4 * mirror_box.width() * mirror_box.height()
}

/// Sends a particle in through `entry` and returns the edge it leaves through.
///
/// Fails with `InvalidEdgeDescriptor` if `entry` does not exist on this box. The loop has no
/// tick limit; use [`simulate_with_limit`] to bound it.
pub fn simulate(mirror_box: &MirrorBox, entry: EdgeDescriptor) -> Result<EdgeDescriptor> {
    let mut particle = entry.entry_particle(mirror_box)?;
    while mirror_box.contains(&particle) {
        particle = tick(mirror_box, particle);
    }
    Ok(exit_edge(mirror_box, &particle))
}

/// Like [`simulate`], but stops after `limit` ticks.
pub fn simulate_with_limit(mirror_box: &MirrorBox, entry: EdgeDescriptor, limit: usize) -> Result<Outcome> {
    let mut particle = entry.entry_particle(mirror_box)?;
    let mut ticks = 0;
    while mirror_box.contains(&particle) {
        if ticks == limit {
            return Ok(Outcome::Trapped { ticks });
        }
        particle = tick(mirror_box, particle);
        ticks += 1;
    }
    Ok(Outcome::Exit { exit: exit_edge(mirror_box, &particle), ticks })
}

/// Every particle state from entry to the first position outside the box, at most
/// `limit + 1` states.
pub fn trace(mirror_box: &MirrorBox, entry: EdgeDescriptor, limit: usize) -> Result<Vec<Particle>> {
    let mut particle = entry.entry_particle(mirror_box)?;
    let mut path = vec![particle];
    while mirror_box.contains(&particle) && path.len() <= limit {
        particle = tick(mirror_box, particle);
        path.push(particle);
    }
    Ok(path)
}

/// Simulates every entry of the box in parallel, returning `(entry, exit)` pairs in
/// [`MirrorBox::entries`] order.
pub fn simulate_all(mirror_box: &MirrorBox) -> Vec<(EdgeDescriptor, EdgeDescriptor)> {
    mirror_box
        .entries()
        .into_par_iter()
        .filter_map(|entry| simulate(mirror_box, entry).ok().map(|exit| (entry, exit)))
        .collect()
}

fn tick(mirror_box: &MirrorBox, particle: Particle) -> Particle {
    match mirror_box.at(particle.x, particle.y) {
        Ok(cell) => cell.step(particle),
        Err(err) => unreachable!("ticked a particle outside the box: {}", err),
    }
}

fn exit_edge(mirror_box: &MirrorBox, particle: &Particle) -> EdgeDescriptor {
    match EdgeDescriptor::exit_of(mirror_box, particle) {
        Some(edge) => edge,
        None => unreachable!("particle {:?} is still in the box", particle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellBehavior;
    use crate::edge::Side;

    fn run(mirror_box: &MirrorBox, entry: &str) -> String {
        simulate(mirror_box, entry.parse().unwrap()).unwrap().to_string()
    }

    #[test]
    fn test_straight_through() {
        let b = MirrorBox::empty(5, 5).unwrap();
        assert_eq!(run(&b, ">C"), "<C");
        assert_eq!(run(&b, "<A"), ">A");
        assert_eq!(run(&b, "vD"), "^D");
        assert_eq!(run(&b, "^E"), "vE");
    }

    #[test]
    fn test_forward_mirror_in_center() {
        // Hits (2, 2) moving (1, 0), turns to (0, -1) and leaves through y = -1 at x = 2.
        let b = MirrorBox::new(5, 5, vec![(2, 2, CellBehavior::ForwardSlashMirror)]).unwrap();
        let exit = simulate(&b, EdgeDescriptor::new(Side::Left, 2)).unwrap();
        assert_eq!(exit, EdgeDescriptor::new(Side::Top, 2));
        assert_eq!(exit.to_string(), "vC");
    }

    #[test]
    fn test_back_mirror_in_center() {
        let b = MirrorBox::parse(5, 5, &["CC\\"]).unwrap();
        assert_eq!(run(&b, ">C"), "^C");
        assert_eq!(run(&b, "vC"), "<C");
    }

    #[test]
    fn test_mirror_on_entry_cell() {
        let b = MirrorBox::parse(3, 3, &["AA/"]).unwrap();
        assert_eq!(run(&b, ">A"), "vA");
    }

    #[test]
    fn test_invalid_entry() {
        let b = MirrorBox::empty(3, 4).unwrap();
        assert!(simulate(&b, EdgeDescriptor::new(Side::Top, 3)).is_err());
        assert!(simulate(&b, EdgeDescriptor::new(Side::Left, 3)).is_ok());
    }

    #[test]
    fn test_limit() {
        let b = MirrorBox::empty(5, 5).unwrap();
        let entry = EdgeDescriptor::new(Side::Left, 0);
        assert_eq!(
            simulate_with_limit(&b, entry, 5).unwrap(),
            Outcome::Exit { exit: EdgeDescriptor::new(Side::Right, 0), ticks: 5 }
        );
        assert_eq!(simulate_with_limit(&b, entry, 4).unwrap(), Outcome::Trapped { ticks: 4 });
        assert_eq!(simulate_with_limit(&b, entry, 4).unwrap().exit(), None);
    }

    #[test]
    fn test_trace() {
        let b = MirrorBox::parse(3, 3, &["BB/"]).unwrap();
        let path = trace(&b, ">B".parse().unwrap(), max_ticks(&b)).unwrap();
        let positions: Vec<_> = path.iter().map(|p| p.position()).collect();
        assert_eq!(positions, vec![(0, 1), (1, 1), (1, 0), (1, -1)]);

        let short = trace(&b, ">B".parse().unwrap(), 1).unwrap();
        assert_eq!(short.len(), 2);
    }

    #[test]
    fn test_simulate_all_matches_sequential() {
        let mut b = MirrorBox::empty(7, 6).unwrap();
        b.random_mirrors(15);
        let all = simulate_all(&b);
        assert_eq!(all.len(), b.entries().len());
        for (entry, exit) in all {
            assert_eq!(simulate(&b, entry).unwrap(), exit);
        }
    }
}
