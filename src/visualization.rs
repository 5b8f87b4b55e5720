//! Interactive 3D viewer for the puzzle using kiss3d.
//!
//! One colored cube is rendered per piece. A queued turn plays back by
//! sweeping the affected slice 90 degrees about its axis over a fixed number
//! of frames; when the sweep completes the logical turn is committed and
//! every render position snaps to the committed lattice coordinates, so the
//! scene can never drift from `CubeState`.

use kiss3d::prelude::*;

use twisty::cube::CubeState;
use twisty::geometry::SliceGroup;
use twisty::pieces::{home_position, Coord, PieceId, PIECE_COUNT};
use twisty::scheduler::{MoveQueue, QueuedMove};

/// Stable display color for a piece, derived from its home position.
///
/// Home coordinates map to RGB channels, so neighbouring pieces get related
/// colors and every turn is visible as a permutation of a fixed palette.
fn piece_color(home: Coord) -> Color {
    let channel = |value: i32| 0.15 + (value + 1) as f32 * 0.35;
    Color::new(channel(home.0), channel(home.1), channel(home.2), 1.0)
}

fn coord_to_vec(position: Coord) -> Vec3 {
    Vec3::new(position.0 as f32, position.1 as f32, position.2 as f32)
}

/// Rotates `v` around the unit `axis` by `angle` radians (Rodrigues).
fn rotate_about(axis: Vec3, angle: f32, v: Vec3) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    v * cos + axis.cross(v) * sin + axis * axis.dot(v) * (1.0 - cos)
}

/// A slice turn currently being animated.
///
/// Members and start positions are snapshotted when the turn is cued; the
/// logical state only changes at commit time, after the sweep finishes.
struct ActiveTurn {
    members: Vec<PieceId>,
    start_positions: Vec<Vec3>,
    axis: Vec3,
    progress: f32,
}

impl ActiveTurn {
    fn cue(cube: &CubeState, mv: QueuedMove) -> Self {
        let members = cube.members(mv.group).to_vec();
        let start_positions = members
            .iter()
            .map(|&id| coord_to_vec(cube.pieces()[id].position))
            .collect();
        let spec = mv.group.spec();
        let mut axis = Vec3::new(spec.axis[0], spec.axis[1], spec.axis[2]);
        if mv.reversed {
            axis = -axis;
        }
        Self {
            members,
            start_positions,
            axis,
            progress: 0.0,
        }
    }
}

fn title(cube: &CubeState, queue: &MoveQueue) -> String {
    let status = if queue.is_running() {
        format!("playing, {} left", queue.len())
    } else if !queue.is_empty() {
        format!("{} queued - Return to play", queue.len())
    } else if cube.is_solved() {
        "solved".to_string()
    } else {
        "scrambled".to_string()
    };
    format!("twisty - {status}")
}

/// Opens the viewer with the given moves already queued.
pub fn display(initial_moves: Vec<QueuedMove>) {
    pollster::block_on(display_async(initial_moves));
}

async fn display_async(initial_moves: Vec<QueuedMove>) {
    /// Size of each rendered piece (smaller than 1.0 for visible gaps).
    const CUBE_SIZE: f32 = 0.9;
    /// Sweep progress added per frame; a turn takes about half a second.
    const TURN_STEP: f32 = 1.0 / 30.0;

    let mut cube = CubeState::new();
    let mut queue = MoveQueue::new();
    for mv in initial_moves {
        queue.enqueue(mv.group, mv.reversed);
    }

    let mut window = Window::new("twisty").await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(8.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    // one node per piece, indexed by PieceId
    let mut nodes: Vec<SceneNode3d> = (0..PIECE_COUNT)
        .map(|id| {
            let home = home_position(id);
            scene
                .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                .set_color(piece_color(home))
                .set_position(coord_to_vec(home))
        })
        .collect();

    let mut active_turn: Option<ActiveTurn> = None;
    let mut needs_title_update = true;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, modifiers) = event.value {
                use kiss3d::event::{Action, Key, Modifiers};
                if action != Action::Press {
                    continue;
                }
                let reversed = modifiers.contains(Modifiers::Shift);
                let group = match key {
                    Key::F => Some(SliceGroup::Front),
                    Key::B => Some(SliceGroup::Back),
                    Key::L => Some(SliceGroup::Left),
                    Key::R => Some(SliceGroup::Right),
                    Key::D => Some(SliceGroup::Down),
                    Key::U => Some(SliceGroup::Up),
                    Key::C => Some(SliceGroup::CentreFront),
                    Key::E => Some(SliceGroup::Equator),
                    Key::S => Some(SliceGroup::CentreRight),
                    _ => None,
                };
                let changed = match (group, key) {
                    // the queue itself rejects moves during playback
                    (Some(group), _) => queue.enqueue(group, reversed),
                    (None, Key::Return) => queue.start(),
                    (None, Key::Back) => queue.reset(),
                    _ => false,
                };
                if changed {
                    needs_title_update = true;
                }
            }
        }

        // cue the next queued move once the previous one has been committed
        if active_turn.is_none() {
            if let Some(mv) = queue.current() {
                active_turn = Some(ActiveTurn::cue(&cube, mv));
            }
        }

        if let Some(turn) = &mut active_turn {
            turn.progress = (turn.progress + TURN_STEP).min(1.0);
            let angle = turn.progress * std::f32::consts::FRAC_PI_2;
            for (&id, &start) in turn.members.iter().zip(&turn.start_positions) {
                nodes[id].set_position(rotate_about(turn.axis, angle, start));
            }

            if turn.progress >= 1.0 {
                queue.commit(&mut cube);
                // bake: snap every piece to its committed lattice position
                for (id, piece) in cube.pieces().iter().enumerate() {
                    nodes[id].set_position(coord_to_vec(piece.position));
                }
                active_turn = None;
                needs_title_update = true;
            }
        }

        if needs_title_update {
            window.set_title(&title(&cube, &queue));
            needs_title_update = false;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
