//! Input abstraction layer.
//!
//! Normalizes HTML5 drag events and pointer gestures into a unified
//! `GestureEvent` enum consumed by the drag engine. Tiles are addressed by
//! their [`TileKey`] handle; the bridge resolves event targets to keys.

use bento_core::TileKey;

/// A normalized reorder gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Drag started on a tile (`dragstart`, pointer-down + move threshold).
    DragStart { tile: TileKey },

    /// Dragged tile is over another tile (`dragover`).
    DragOver { tile: TileKey },

    /// Released over a tile (`drop`).
    Drop { tile: TileKey },

    /// Gesture finished, whether or not it dropped on a tile (`dragend`).
    DragEnd,

    /// Gesture interrupted (focus lost, `pointercancel`). Cleans up like
    /// `DragEnd`.
    Cancel,
}
