//! The move queue: ordered pending turns and the playback state machine.
//!
//! Moves are collected while the queue is idle, then played back strictly in
//! insertion order. Playback is cooperative: a driver (the interactive
//! viewer, or `run` when headless) asks for the current move, performs its
//! visual step, and calls `commit` to apply the logical turn and advance.
//! While playback runs the queue rejects new moves; the input gate lives
//! here rather than in the key bindings, so every front end gets it.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::cube::CubeState;
use crate::geometry::SliceGroup;

/// A single pending turn. Immutable once enqueued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueuedMove {
    pub group: SliceGroup,
    pub reversed: bool,
}

impl QueuedMove {
    pub fn new(group: SliceGroup, reversed: bool) -> Self {
        Self { group, reversed }
    }
}

impl fmt::Display for QueuedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.group, if self.reversed { "'" } else { "" })
    }
}

impl FromStr for QueuedMove {
    type Err = strum::ParseError;

    /// Parses move notation: a group name, with a trailing `'` for the
    /// reversed direction (`right`, `equator'`, ...).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (name, reversed) = match token.strip_suffix('\'') {
            Some(name) => (name, true),
            None => (token, false),
        };
        Ok(Self {
            group: name.parse()?,
            reversed,
        })
    }
}

/// Playback state of the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Accepting new moves.
    Idle,
    /// Playing queued moves back; new moves are rejected.
    Running,
}

/// An appendable FIFO of pending turns plus the `Idle`/`Running` gate.
pub struct MoveQueue {
    pending: VecDeque<QueuedMove>,
    state: Playback,
}

impl MoveQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            state: Playback::Idle,
        }
    }

    pub fn state(&self) -> Playback {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == Playback::Running
    }

    /// Number of moves not yet committed.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Appends a move while idle. Returns whether the move was accepted;
    /// during playback the move is dropped, not buffered for later.
    pub fn enqueue(&mut self, group: SliceGroup, reversed: bool) -> bool {
        let mv = QueuedMove::new(group, reversed);
        if self.is_running() {
            debug!("ignoring {mv}: playback in progress");
            return false;
        }
        debug!("queued {mv} ({} pending)", self.pending.len() + 1);
        self.pending.push_back(mv);
        true
    }

    /// Begins playback. No-op (returns false) when already running or when
    /// nothing is queued.
    pub fn start(&mut self) -> bool {
        if self.is_running() || self.pending.is_empty() {
            return false;
        }
        debug!("playback started: {} moves", self.pending.len());
        self.state = Playback::Running;
        true
    }

    /// The move currently being played back, if any.
    ///
    /// This is the cue for the animation collaborator: it stays the same
    /// until `commit` is called, so a driver may take several frames over it.
    pub fn current(&self) -> Option<QueuedMove> {
        if self.is_running() {
            self.pending.front().copied()
        } else {
            None
        }
    }

    /// Applies the current move to the cube and advances the queue.
    ///
    /// Called by the driver once the visual step for the move has finished
    /// (immediately, when headless). Draining the last move returns the
    /// queue to `Idle`, reopening the input gate. Returns the committed
    /// move, or `None` when not running.
    pub fn commit(&mut self, cube: &mut CubeState) -> Option<QueuedMove> {
        if !self.is_running() {
            return None;
        }
        let mv = self.pending.pop_front()?;
        cube.apply_turn(mv.group, mv.reversed);
        debug!("committed {mv} ({} remaining)", self.pending.len());
        if self.pending.is_empty() {
            self.state = Playback::Idle;
            debug!("playback finished");
        }
        Some(mv)
    }

    /// Discards all pending moves. Only valid while idle; nothing has
    /// executed yet, so the cube is untouched. Returns whether a reset
    /// happened.
    pub fn reset(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        debug!("queue reset: {} moves discarded", self.pending.len());
        self.pending.clear();
        true
    }

    /// Headless playback: starts and commits every queued move in order.
    pub fn run(&mut self, cube: &mut CubeState) {
        if !self.start() {
            return;
        }
        while self.commit(cube).is_some() {}
    }
}

impl Default for MoveQueue {
    fn default() -> Self {
        Self::new()
    }
}
