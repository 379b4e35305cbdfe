use mirrorbox::{
    max_ticks, simulate, simulate_with_limit, CellBehavior, Direction, EdgeDescriptor, MirrorBox, Outcome, Particle,
};
use rand::Rng;

fn random_box(rng: &mut impl Rng) -> MirrorBox {
    let width = rng.gen_range(3..=26);
    let height = rng.gen_range(3..=26);
    let count = rng.gen_range(0..width * height);
    let placements: Vec<(usize, usize, CellBehavior)> = (0..count)
        .map(|_| {
            let kind = if rng.r#gen::<bool>() { CellBehavior::ForwardSlashMirror } else { CellBehavior::BackSlashMirror };
            (rng.gen_range(0..width), rng.gen_range(0..height), kind)
        })
        .collect();
    MirrorBox::new(width, height, placements).unwrap()
}

#[test]
fn test_every_entry_exits_within_bound() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let b = random_box(&mut rng);
        let limit = max_ticks(&b);
        for entry in b.entries() {
            match simulate_with_limit(&b, entry, limit).unwrap() {
                Outcome::Exit { exit, ticks } => {
                    assert!(ticks <= limit);
                    assert_eq!(simulate(&b, entry).unwrap(), exit);
                }
                Outcome::Trapped { ticks } => panic!("{} trapped after {} ticks in\n{}", entry, ticks, b),
            }
        }
    }
}

#[test]
fn test_paths_are_reversible() {
    // Entering where a particle left sends it back to where it came from.
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let b = random_box(&mut rng);
        for entry in b.entries() {
            let exit = simulate(&b, entry).unwrap();
            assert_eq!(simulate(&b, exit).unwrap(), entry, "in\n{}", b);
        }
    }
}

#[test]
fn test_steps_move_one_cell() {
    let mut rng = rand::thread_rng();
    let b = random_box(&mut rng);
    for entry in b.entries() {
        let mut p = entry.entry_particle(&b).unwrap();
        while b.contains(&p) {
            let next = b.at(p.x, p.y).unwrap().step(p);
            assert!((next.x - p.x).abs() <= 1 && (next.y - p.y).abs() <= 1);
            p = next;
        }
    }
}

#[test]
fn test_descriptor_text_round_trip() {
    let b = MirrorBox::empty(26, 26).unwrap();
    for entry in b.entries() {
        let text = entry.to_string();
        assert_eq!(text.chars().count(), 2);
        assert_eq!(text.parse::<EdgeDescriptor>().unwrap(), entry);
    }
}

#[test]
fn test_exit_position_round_trip() {
    // An exit descriptor taken as an entry starts on the last cell before the exit position.
    let b = MirrorBox::empty(6, 4).unwrap();
    for entry in b.entries() {
        let p = entry.entry_particle(&b).unwrap();
        let outside = Particle::new(p.x, p.y, p.direction.reversed()).advance();
        let exit = EdgeDescriptor::exit_of(&b, &outside).unwrap();
        assert_eq!(exit, entry);
        assert_eq!(exit.entry_particle(&b).unwrap(), p);
        assert!(Direction::ALL.contains(&p.direction));
    }
}
