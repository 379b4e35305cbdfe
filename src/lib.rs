//! # mirrorbox
//!
//! `mirrorbox` simulates a single particle of light entering a rectangular box through one of
//! its edges, bouncing off diagonal mirrors placed on grid cells, and leaving through some other
//! edge cell. It can be used from Rust as well as compiled to WebAssembly (WASM).
//!
//! ## Features
//!
//! - **Exact tick model**: every tick reflects (on a mirror) and moves the particle one cell.
//! - **Edge codec**: entries and exits are written as two characters, e.g. `">C"`.
//! - **Batch runs**: every entry of a box can be simulated in parallel with `rayon`.
//! - **WASM-first**: Built with `wasm-bindgen` for use from JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use mirrorbox::{simulate, EdgeDescriptor, MirrorBox};
//!
//! let mirror_box = MirrorBox::parse(5, 5, &["CC/"]).unwrap();
//! let entry: EdgeDescriptor = ">C".parse().unwrap();
//! assert_eq!(simulate(&mirror_box, entry).unwrap().to_string(), "vC");
//! ```
//!
//! ## Main Interface
//!
//! The primary entry points are the [`MirrorBox`] struct, which holds the grid, and the
//! [`simulate`] function.

mod cell;
mod config;
mod edge;
mod error;
mod grid;
pub mod letters;
mod particle;
mod placement;
mod simulation;
mod wasm;

pub use cell::CellBehavior;
pub use config::BoxConfig;
pub use edge::EdgeDescriptor;
pub use edge::Side;
pub use error::MirrorBoxError;
pub use error::Result;
pub use error::MAX_DIMENSION;
pub use error::MIN_DIMENSION;
pub use grid::MirrorBox;
pub use grid::PATH_GLYPH;
pub use particle::advance;
pub use particle::Direction;
pub use particle::Particle;
pub use placement::MirrorPlacement;
pub use simulation::max_ticks;
pub use simulation::simulate;
pub use simulation::simulate_all;
pub use simulation::simulate_with_limit;
pub use simulation::trace;
pub use simulation::Outcome;
pub use wasm::MirrorBoxWasm;
