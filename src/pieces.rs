//! Piece definitions and coordinate types.
//!
//! A 3x3x3 twisty puzzle is made of 27 unit pieces. Each piece sits at an
//! integer lattice position with every coordinate in {-1, 0, 1} and belongs
//! to exactly one slice group per axis, derived from that position.

use crate::geometry::{classify, SliceGroup};

/// A 3D lattice position, each coordinate in {-1, 0, 1}.
pub type Coord = (i32, i32, i32);

/// Stable handle for a piece: its index in creation order.
///
/// Creation order is x-major, then y, then z, over {-1, 0, 1} each, so the
/// piece created at home position (x, y, z) has id
/// `(x + 1) * 9 + (y + 1) * 3 + (z + 1)`.
pub type PieceId = usize;

/// Total number of pieces in the puzzle.
pub const PIECE_COUNT: usize = 27;

/// One unit piece of the puzzle.
///
/// Pieces are created once and never destroyed; only `position` and the
/// derived `groups` change, and only through `CubeState::set_position`.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    /// Current lattice position.
    pub position: Coord,
    /// Current slice membership, one group per axis, always equal to
    /// `classify(position)`.
    pub groups: [SliceGroup; 3],
}

impl Piece {
    /// Creates a piece at the given position with its derived memberships.
    pub fn at(position: Coord) -> Self {
        Self {
            position,
            groups: classify(position),
        }
    }
}

/// The home position of a piece id, inverting the creation-order mapping.
pub fn home_position(id: PieceId) -> Coord {
    (
        (id / 9) as i32 - 1,
        ((id / 3) % 3) as i32 - 1,
        (id % 3) as i32 - 1,
    )
}

/// The id of the piece whose home is the given position.
pub fn home_id(position: Coord) -> PieceId {
    let (x, y, z) = position;
    ((x + 1) * 9 + (y + 1) * 3 + (z + 1)) as PieceId
}
