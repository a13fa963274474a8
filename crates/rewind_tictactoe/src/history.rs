//! Board snapshots and the branchable history that holds them.

use super::{Board, Move, SessionError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One immutable board configuration at a point in the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Move>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// The snapshot produced by playing `mv` on `self`.
    pub(crate) fn after(&self, mv: Move) -> Self {
        Self {
            board: self.board.with_mark(mv.position, mv.player),
            last_move: Some(mv),
        }
    }

    /// The board at this point.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, `None` for the starting board.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// Ordered snapshots; index 0 is always the empty board.
///
/// Only [`GameState`](crate::GameState) appends to a history, and only
/// through [`History::branch`], which drops everything after the branch
/// point first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

/// Wire form of [`History`], checked before it becomes one.
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
}

impl TryFrom<RawHistory> for History {
    type Error = SessionError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.snapshots.is_empty() {
            return Err(SessionError::EmptyHistory);
        }
        Ok(Self {
            snapshots: raw.snapshots,
        })
    }
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots, always at least 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the starting snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // `snapshots` starts with one entry and is only ever truncated to a
        // non-zero length.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Iterates snapshots from the start of the game.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// All snapshots as a slice.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Keeps `[0..=step]` and appends `snapshot`, returning its step.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, step: usize, snapshot: Snapshot) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(
                dropped = self.snapshots.len() - keep,
                "Discarding future snapshots"
            );
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
