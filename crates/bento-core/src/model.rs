//! Tile grid data model.
//!
//! The grid keeps an explicit ordered list of tiles as the single source of
//! truth. Document mutation is a projection of this list: the DOM bridge
//! re-appends elements in `TileGrid::keys()` order after every change.
//!
//! Two kinds of handle exist for a tile:
//!
//! - [`TileKey`] — a unique per-grid handle, equal to the tile's authored
//!   (document construction) index. Gestures and element lookups use it.
//! - [`TileId`] — the persisted identity. Not necessarily unique.

use crate::id::TileId;
use crate::resolve::{IdentityOrigin, TileSource, resolve_identity};
use std::fmt;

// ─── Tiles ───────────────────────────────────────────────────────────────

/// Unique handle for one live tile. Equals the tile's authored index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey(pub u32);

impl TileKey {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile[{}]", self.0)
    }
}

/// A visual unit in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub key: TileKey,
    pub id: TileId,
    pub origin: IdentityOrigin,
}

// ─── Grid ────────────────────────────────────────────────────────────────

/// An ordered set of tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
}

impl TileGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from tile sources in authored order, resolving each
    /// identity once.
    pub fn from_sources<I>(sources: I, snapshot_len: usize) -> Self
    where
        I: IntoIterator<Item = TileSource>,
    {
        let tiles = sources
            .into_iter()
            .enumerate()
            .map(|(i, source)| {
                let (id, origin) = resolve_identity(&source, snapshot_len);
                log::trace!("tile[{i}] resolved to {id:?} ({origin:?})");
                Tile {
                    key: TileKey(i as u32),
                    id,
                    origin,
                }
            })
            .collect();
        Self { tiles }
    }

    /// Build a grid of tiles with explicit identities, in authored order.
    pub fn from_ids<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_sources(ids.into_iter().map(TileSource::explicit), usize::MAX)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in current order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, key: TileKey) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.key == key)
    }

    /// Current 0-based position of a tile.
    pub fn position(&self, key: TileKey) -> Option<usize> {
        self.tiles.iter().position(|t| t.key == key)
    }

    /// Handles in current order.
    pub fn keys(&self) -> Vec<TileKey> {
        self.tiles.iter().map(|t| t.key).collect()
    }

    /// Identities in current order.
    pub fn identities(&self) -> Vec<TileId> {
        self.tiles.iter().map(|t| t.id).collect()
    }

    /// Move `dragged` next to `target`: after it when `dragged` currently
    /// precedes `target`, before it otherwise.
    ///
    /// This single relocation is the only reordering primitive. Returns
    /// `false` (and leaves the order untouched) for a self-drop or an
    /// unknown handle.
    pub fn relocate(&mut self, dragged: TileKey, target: TileKey) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return false;
        };
        let tile = self.tiles.remove(from);
        // Inserting at the target's old index lands after it when moving
        // forward (the target shifted left) and before it when moving back.
        self.tiles.insert(to, tile);
        log::debug!("relocate {dragged:?}: {from} -> {to}");
        true
    }

    /// Restore the authored order. Returns `true` if the order changed.
    pub fn restore_authored_order(&mut self) -> bool {
        let already = self.tiles.windows(2).all(|w| w[0].key < w[1].key);
        if already {
            return false;
        }
        self.tiles.sort_by_key(|t| t.key);
        true
    }

    /// Replace the order wholesale. The new order must be a permutation of
    /// the current tiles.
    pub(crate) fn set_order(&mut self, tiles: Vec<Tile>) {
        debug_assert_eq!(tiles.len(), self.tiles.len());
        self.tiles = tiles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(grid: &TileGrid) -> Vec<&str> {
        grid.tiles().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn from_sources_assigns_authored_keys() {
        let grid = TileGrid::from_sources(
            vec![TileSource::explicit("a"), TileSource::text("  Hello  world ")],
            50,
        );
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.keys(), vec![TileKey(0), TileKey(1)]);
        assert_eq!(names(&grid), vec!["a", "Hello world"]);
        assert_eq!(grid.tiles()[1].origin, IdentityOrigin::ContentSnapshot);
    }

    #[test]
    fn relocate_backward_inserts_before_target() {
        let mut grid = TileGrid::from_ids(["A", "B", "C", "D"]);
        assert!(grid.relocate(TileKey(2), TileKey(0)));
        assert_eq!(names(&grid), vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn relocate_forward_inserts_after_target() {
        let mut grid = TileGrid::from_ids(["A", "B", "C", "D"]);
        assert!(grid.relocate(TileKey(0), TileKey(2)));
        assert_eq!(names(&grid), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn relocate_adjacent_swaps() {
        let mut grid = TileGrid::from_ids(["A", "B", "C"]);
        assert!(grid.relocate(TileKey(1), TileKey(2)));
        assert_eq!(names(&grid), vec!["A", "C", "B"]);
        assert!(grid.relocate(TileKey(1), TileKey(2)));
        assert_eq!(names(&grid), vec!["A", "B", "C"]);
    }

    #[test]
    fn relocate_onto_self_is_noop() {
        let mut grid = TileGrid::from_ids(["A", "B"]);
        assert!(!grid.relocate(TileKey(1), TileKey(1)));
        assert_eq!(names(&grid), vec!["A", "B"]);
    }

    #[test]
    fn relocate_unknown_handle_is_noop() {
        let mut grid = TileGrid::from_ids(["A", "B"]);
        assert!(!grid.relocate(TileKey(7), TileKey(0)));
        assert!(!grid.relocate(TileKey(0), TileKey(7)));
        assert_eq!(names(&grid), vec!["A", "B"]);
    }

    #[test]
    fn restore_authored_order_after_moves() {
        let mut grid = TileGrid::from_ids(["A", "B", "C"]);
        assert!(!grid.restore_authored_order());
        grid.relocate(TileKey(0), TileKey(2));
        assert!(grid.restore_authored_order());
        assert_eq!(names(&grid), vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_grid_operations_are_noops() {
        let mut grid = TileGrid::new();
        assert!(grid.is_empty());
        assert!(!grid.relocate(TileKey(0), TileKey(1)));
        assert!(!grid.restore_authored_order());
        assert!(grid.identities().is_empty());
    }
}
