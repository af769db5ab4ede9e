//! Per-grid controller.
//!
//! One `GridController` per grid instance owns everything that changes at
//! runtime: the ordered tile list, the layout store, the edit-mode gate and
//! the in-progress drag. Hosts drive it from their input callbacks and then
//! project `grid().keys()` and the visual state onto their document.
//!
//! Startup is `new` + `restore`. Each completed drop saves; leaving edit
//! mode does not.

use crate::drag::{DragReorderEngine, DropOutcome};
use crate::edit_mode::{EditAffordances, EditMode, EditModeController, EditTransition};
use crate::input::GestureEvent;
use bento_core::{
    ApplyReport, GridConfig, LayoutStorage, LayoutStore, LintDiagnostic, TileGrid, TileId,
    TileKey, TileSource, lint_grid,
};

pub struct GridController<S> {
    grid: TileGrid,
    store: LayoutStore<S>,
    edit: EditModeController,
    drag: DragReorderEngine,
}

impl<S: LayoutStorage> GridController<S> {
    /// Build a controller over tiles given in authored order. Does not
    /// touch storage; call [`restore`](Self::restore) to apply a saved
    /// layout.
    pub fn new<I>(config: GridConfig, storage: S, sources: I) -> Self
    where
        I: IntoIterator<Item = TileSource>,
    {
        let GridConfig {
            storage_key,
            snapshot_len,
            edit_label,
            done_label,
            ..
        } = config;
        Self {
            grid: TileGrid::from_sources(sources, snapshot_len),
            store: LayoutStore::new(storage, storage_key),
            edit: EditModeController::with_labels(edit_label, done_label),
            drag: DragReorderEngine::new(),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn store(&self) -> &LayoutStore<S> {
        &self.store
    }

    /// Identities in current order.
    pub fn order(&self) -> Vec<TileId> {
        self.grid.identities()
    }

    pub fn mode(&self) -> EditMode {
        self.edit.mode()
    }

    pub fn affordances(&self) -> EditAffordances<'_> {
        self.edit.affordances()
    }

    pub fn has_handlers(&self, tile: TileKey) -> bool {
        self.edit.is_attached(tile)
    }

    pub fn dragged(&self) -> Option<TileKey> {
        self.drag.dragged()
    }

    pub fn drop_cue(&self) -> Option<TileKey> {
        self.drag.drop_cue()
    }

    pub fn lint(&self) -> Vec<LintDiagnostic> {
        lint_grid(&self.grid)
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    /// Apply the saved layout, if any. `None` means the authored order
    /// stands (nothing saved, or the payload was unusable).
    pub fn restore(&mut self) -> Option<ApplyReport> {
        let record = self.store.load()?;
        Some(record.apply(&mut self.grid))
    }

    /// Persist the current order explicitly.
    pub fn save(&mut self) -> bool {
        self.store.save(&self.grid)
    }

    // ─── Edit mode ───────────────────────────────────────────────────────

    pub fn toggle_edit(&mut self) -> EditTransition {
        let transition = self.edit.toggle(&self.grid);
        if matches!(transition, EditTransition::Left { .. }) {
            // No cancel path exists; clean up any gesture still in flight.
            self.drag.end();
        }
        transition
    }

    /// Discard the saved layout and return to the authored order. Only
    /// acts while editing. Returns whether the reset happened.
    pub fn reset(&mut self) -> bool {
        if !self.edit.reset() {
            return false;
        }
        self.drag.end();
        self.store.reset();
        self.grid.restore_authored_order();
        log::debug!("layout `{}` reset to authored order", self.store.key());
        true
    }

    // ─── Gestures ────────────────────────────────────────────────────────

    /// Start dragging `tile`. Ignored unless editing.
    pub fn begin_drag(&mut self, tile: TileKey) -> bool {
        if !self.edit.is_editing() || self.grid.get(tile).is_none() {
            return false;
        }
        self.drag.begin(tile);
        true
    }

    /// Move the insertion cue. Returns whether visual state changed.
    pub fn drag_over(&mut self, target: TileKey) -> bool {
        self.edit.is_editing() && self.drag.over(target)
    }

    /// Drop the dragged tile on `target`; saves when the order changed.
    pub fn drop_on(&mut self, target: TileKey) -> DropOutcome {
        if !self.edit.is_editing() {
            return DropOutcome::NoGesture;
        }
        let outcome = self.drag.drop(&mut self.grid, target);
        if outcome.moved() {
            self.store.save(&self.grid);
        }
        outcome
    }

    /// Close the gesture. Always clears visual state.
    pub fn end_drag(&mut self) -> bool {
        self.drag.end()
    }

    /// Dispatch a gesture event. Returns whether the order or the visual
    /// state changed.
    pub fn handle(&mut self, event: &GestureEvent) -> bool {
        match *event {
            GestureEvent::DragStart { tile } => self.begin_drag(tile),
            GestureEvent::DragOver { tile } => self.drag_over(tile),
            GestureEvent::Drop { tile } => self.drop_on(tile).moved(),
            GestureEvent::DragEnd | GestureEvent::Cancel => self.end_drag(),
        }
    }
}
