//! The cube state: piece registry and rotation engine.
//!
//! `CubeState` owns the 27 pieces, a member list per slice group and an
//! index from lattice position to occupying piece. All three views mutate
//! through a single entry point, `set_position`, which keeps them consistent
//! with the classification rule in `geometry::classify`. Nothing outside
//! this module touches the member lists directly.

use rustc_hash::FxHashMap;

use crate::geometry::{classify, transform, SliceGroup, GROUP_COUNT};
use crate::pieces::{home_position, Coord, Piece, PieceId, PIECE_COUNT};

/// Authoritative state of the puzzle.
pub struct CubeState {
    /// All 27 pieces, indexed by `PieceId`. Created once, never removed.
    pieces: Vec<Piece>,
    /// Member pieces of each slice group, indexed by `SliceGroup as usize`.
    members: [Vec<PieceId>; GROUP_COUNT],
    /// Which piece currently occupies each lattice position.
    occupant: FxHashMap<Coord, PieceId>,
}

impl CubeState {
    /// Creates the solved cube: one piece per lattice position, registered
    /// in the three slice groups its position classifies into.
    pub fn new() -> Self {
        let mut state = Self {
            pieces: Vec::with_capacity(PIECE_COUNT),
            members: Default::default(),
            occupant: FxHashMap::default(),
        };

        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    let id = state.pieces.len();
                    let piece = Piece::at((x, y, z));
                    for group in piece.groups {
                        state.members[group as usize].push(id);
                    }
                    state.occupant.insert(piece.position, id);
                    state.pieces.push(piece);
                }
            }
        }

        state
    }

    /// All pieces, indexed by id.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pieces currently lying in the given slice group.
    pub fn members(&self, group: SliceGroup) -> &[PieceId] {
        &self.members[group as usize]
    }

    /// The piece currently occupying a lattice position.
    pub fn piece_at(&self, position: Coord) -> Option<PieceId> {
        self.occupant.get(&position).copied()
    }

    /// Whether every piece is back at its home position.
    pub fn is_solved(&self) -> bool {
        self.pieces
            .iter()
            .enumerate()
            .all(|(id, piece)| piece.position == home_position(id))
    }

    /// Moves a piece and reconciles every derived view.
    ///
    /// This is the only mutation point for piece state: memberships are
    /// reclassified from the new position, the piece leaves groups it no
    /// longer holds and joins the ones it gained, and the occupancy index
    /// is updated.
    pub fn set_position(&mut self, id: PieceId, new_position: Coord) {
        let old_position = self.pieces[id].position;
        let old_groups = self.pieces[id].groups;
        let new_groups = classify(new_position);

        for group in old_groups {
            if !new_groups.contains(&group) {
                self.members[group as usize].retain(|&member| member != id);
            }
        }
        for group in new_groups {
            if !old_groups.contains(&group) {
                self.members[group as usize].push(id);
            }
        }

        // a turn permutes positions, so another piece may already have
        // claimed this cell; only clear the entry while it is still ours
        if self.occupant.get(&old_position) == Some(&id) {
            self.occupant.remove(&old_position);
        }
        self.occupant.insert(new_position, id);

        let piece = &mut self.pieces[id];
        piece.position = new_position;
        piece.groups = new_groups;
    }

    /// Turns one slice group 90 degrees.
    ///
    /// The member list is snapshotted before any piece moves: turning a
    /// slice changes which slices *other* pieces belong to, and those
    /// reclassifications must not affect which pieces this turn processes.
    pub fn apply_turn(&mut self, group: SliceGroup, reversed: bool) {
        let spec = group.spec();
        let matrix = if reversed {
            &spec.negative
        } else {
            &spec.positive
        };

        let turning: Vec<PieceId> = self.members[group as usize].clone();
        for id in turning {
            let new_position = transform(matrix, self.pieces[id].position);
            self.set_position(id, new_position);
        }
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Display character for a piece id: 0-9 then A-Q.
fn id_char(id: PieceId) -> char {
    if id < 10 {
        char::from(b'0' + id as u8)
    } else {
        char::from(b'A' + id as u8 - 10)
    }
}

/// Formats the cube as three z-slices side by side.
///
/// Each cell shows the id of the piece currently occupying it, so the solved
/// cube reads 0-9,A-Q in creation order and any turn is visible as a
/// permutation of those labels. Rows run from y = 1 down to y = -1, columns
/// from x = -1 to x = 1.
pub fn format_state(state: &CubeState) -> String {
    let mut output = String::new();

    for (i, z) in (-1..=1).enumerate() {
        if i > 0 {
            output.push_str("  ");
        }
        output.push_str(&format!("z={z:<3}"));
    }
    while output.ends_with(' ') {
        output.pop();
    }
    output.push('\n');

    for y in (-1..=1).rev() {
        for (i, z) in (-1..=1).enumerate() {
            if i > 0 {
                output.push_str("  ");
            }
            for x in -1..=1 {
                let cell = match state.piece_at((x, y, z)) {
                    Some(id) => id_char(id),
                    None => '?',
                };
                output.push(cell);
            }
        }
        output.push('\n');
    }

    output
}
