//! Twisty Puzzle Core
//!
//! Models a 3x3x3 twisty puzzle: 27 pieces on an integer lattice, 9 named
//! slice groups (two outer layers plus one middle layer per axis) that turn
//! 90 degrees at a time, and a move queue that serializes turns so input,
//! animation and logical state never race. Rendering and animation live in
//! the binary; this library is fully headless and deterministic.

pub mod cube;
pub mod geometry;
pub mod pieces;
pub mod scheduler;

pub use cube::CubeState;
pub use geometry::SliceGroup;
pub use scheduler::{MoveQueue, Playback, QueuedMove};
