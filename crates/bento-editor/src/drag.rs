//! Drag reorder engine.
//!
//! Translates one drag gesture (`begin → over* → drop? → end`) into at most
//! one relocation of the dragged tile. The engine only tracks the gesture
//! and its visual state; persisting after a move is the controller's job.
//!
//! Exactly one gesture is tracked. A second `begin` while one is active
//! replaces it, and `end` always clears visual state — it is cleanup, not
//! rollback: a completed drop stays applied.

use bento_core::{TileGrid, TileKey};

/// Outcome of a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged tile moved from one position to another.
    Moved { from: usize, to: usize },
    /// Dropped on itself. Nothing changes and nothing is saved.
    SelfDrop,
    /// No gesture in progress.
    NoGesture,
    /// The dragged or target tile is not in the grid.
    UnknownTile,
}

/// Where the dragged tile lands relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    BeforeTarget,
    AfterTarget,
}

impl DropOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// For a move, which side of the target the dragged tile now sits on:
    /// after it when moving forward, before it when moving backward. A view
    /// only needs to shift the one dragged element to match.
    pub fn placement(&self) -> Option<Placement> {
        match *self {
            Self::Moved { from, to } if from < to => Some(Placement::AfterTarget),
            Self::Moved { .. } => Some(Placement::BeforeTarget),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct DragReorderEngine {
    /// Tile being dragged (rendered with the `dragging` class).
    dragged: Option<TileKey>,
    /// Tile showing the insertion cue (`drag-over` class).
    cue: Option<TileKey>,
}

impl DragReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged(&self) -> Option<TileKey> {
        self.dragged
    }

    pub fn drop_cue(&self) -> Option<TileKey> {
        self.cue
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    /// Start dragging `tile`. Implicitly ends any gesture in progress.
    pub fn begin(&mut self, tile: TileKey) {
        if let Some(prev) = self.dragged.replace(tile) {
            log::debug!("drag of {prev:?} superseded by {tile:?}");
        }
        self.cue = None;
    }

    /// Pointer is over `target`. Moves the insertion cue; never mutates
    /// order. Returns whether the cue changed.
    pub fn over(&mut self, target: TileKey) -> bool {
        let Some(dragged) = self.dragged else {
            return false;
        };
        let cue = (target != dragged).then_some(target);
        let changed = cue != self.cue;
        self.cue = cue;
        changed
    }

    /// Drop on `target`, relocating the dragged tile next to it.
    pub fn drop(&mut self, grid: &mut TileGrid, target: TileKey) -> DropOutcome {
        let Some(dragged) = self.dragged else {
            return DropOutcome::NoGesture;
        };
        self.cue = None;
        if dragged == target {
            return DropOutcome::SelfDrop;
        }
        let Some(from) = grid.position(dragged) else {
            return DropOutcome::UnknownTile;
        };
        if !grid.relocate(dragged, target) {
            return DropOutcome::UnknownTile;
        }
        // `relocate` succeeded, so the dragged tile is present.
        let to = grid.position(dragged).unwrap_or(from);
        DropOutcome::Moved { from, to }
    }

    /// Finish the gesture, clearing all visual state. Returns whether there
    /// was anything to clear.
    pub fn end(&mut self) -> bool {
        let had_state = self.dragged.is_some() || self.cue.is_some();
        self.dragged = None;
        self.cue = None;
        had_state
    }
}
