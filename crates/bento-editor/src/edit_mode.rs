//! Edit-mode controller.
//!
//! A two-state gate: reorder gestures only reach the drag engine while the
//! grid is `Editing`.
//!
//! ```text
//!   Idle ──toggle──▶ Editing      attach handlers, show reset control
//!   Editing ──toggle──▶ Idle      detach handlers, hide reset control
//!   Editing ──reset──▶ Idle       caller clears the store + restores order
//! ```
//!
//! Leaving edit mode never saves; saving happens per completed drop.

use bento_core::{TileGrid, TileKey};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing,
}

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTransition {
    /// Now editing; `attached` handlers were newly attached.
    Entered { attached: usize },
    /// Now idle; `detached` handlers were removed.
    Left { detached: usize },
}

/// Visual affordances implied by the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditAffordances<'a> {
    /// Grid carries the `edit-mode` class.
    pub grid_editable: bool,
    /// Tiles are `draggable`.
    pub tiles_draggable: bool,
    /// Reset control is shown.
    pub reset_visible: bool,
    /// Label of the toggle control.
    pub toggle_label: &'a str,
}

#[derive(Debug)]
pub struct EditModeController {
    mode: EditMode,
    /// Tiles that currently have gesture handlers attached.
    attached: HashSet<TileKey>,
    /// Toggle label shown while idle.
    edit_label: String,
    /// Toggle label shown while editing.
    done_label: String,
}

impl Default for EditModeController {
    fn default() -> Self {
        Self::with_labels("Edit", "Done")
    }
}

impl EditModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(edit_label: impl Into<String>, done_label: impl Into<String>) -> Self {
        Self {
            mode: EditMode::Idle,
            attached: HashSet::new(),
            edit_label: edit_label.into(),
            done_label: done_label.into(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn is_attached(&self, tile: TileKey) -> bool {
        self.attached.contains(&tile)
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Flip between `Idle` and `Editing`.
    pub fn toggle(&mut self, grid: &TileGrid) -> EditTransition {
        match self.mode {
            EditMode::Idle => EditTransition::Entered {
                attached: self.enter(grid),
            },
            EditMode::Editing => EditTransition::Left {
                detached: self.leave(),
            },
        }
    }

    /// Enter `Editing`, attaching handlers to every tile that lacks one.
    /// Returns how many were attached; already-attached tiles are skipped.
    pub fn enter(&mut self, grid: &TileGrid) -> usize {
        self.mode = EditMode::Editing;
        let attached = grid
            .keys()
            .into_iter()
            .filter(|key| self.attached.insert(*key))
            .count();
        log::debug!("edit mode on: {attached} handlers attached");
        attached
    }

    /// Enter `Idle`, detaching all handlers. Returns how many were removed.
    pub fn leave(&mut self) -> usize {
        self.mode = EditMode::Idle;
        let detached = self.attached.len();
        self.attached.clear();
        log::debug!("edit mode off: {detached} handlers detached");
        detached
    }

    /// The `Editing → Idle` reset transition. Ignored while idle, where the
    /// reset control is hidden. Returns whether the transition happened.
    pub fn reset(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.leave();
        true
    }

    pub fn affordances(&self) -> EditAffordances<'_> {
        let editing = self.is_editing();
        let toggle_label = if editing {
            &self.done_label
        } else {
            &self.edit_label
        };
        EditAffordances {
            grid_editable: editing,
            tiles_draggable: editing,
            reset_visible: editing,
            toggle_label,
        }
    }
}
