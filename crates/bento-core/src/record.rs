//! Persisted layout records.
//!
//! A [`LayoutRecord`] is one full intended arrangement: an ordered list of
//! tile identities, encoded as a plain JSON array of strings
//! (`["github","music","blog"]`). There is no version field — a schema
//! change must use a new storage key.
//!
//! A record need not be a permutation of the live tiles. Applying it:
//!
//! - walks the record in sequence and claims, for each identity, the first
//!   not-yet-claimed live tile carrying it (document order breaks ties);
//! - skips **stale** entries that match nothing;
//! - places unlisted live tiles after all matched ones, keeping their
//!   relative order.
//!
//! Applying the same record twice yields the same order.

use crate::id::TileId;
use crate::model::{Tile, TileGrid};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure decoding a stored payload.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed layout record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persisted unit: one saved arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutRecord {
    pub order: Vec<TileId>,
}

/// What happened when a record was applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Record entries that claimed a live tile.
    pub matched: usize,
    /// Record entries with no live match.
    pub stale: usize,
    /// Live tiles absent from the record (appended at the end).
    pub unlisted: usize,
    /// Whether the grid order changed.
    pub changed: bool,
}

impl LayoutRecord {
    pub fn new(order: Vec<TileId>) -> Self {
        Self { order }
    }

    /// Snapshot the grid's current order.
    pub fn capture(grid: &TileGrid) -> Self {
        Self {
            order: grid.identities(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Encode as a JSON array of identity strings.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON array of identity strings. Anything else — invalid
    /// JSON, `null`, an object, an array holding non-strings — is malformed.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reorder `grid` to follow this record.
    pub fn apply(&self, grid: &mut TileGrid) -> ApplyReport {
        let tiles = grid.tiles();
        let mut claimed = vec![false; tiles.len()];
        let mut arranged: Vec<Tile> = Vec::with_capacity(tiles.len());
        let mut report = ApplyReport::default();

        for id in &self.order {
            let slot = tiles
                .iter()
                .enumerate()
                .find(|(i, t)| !claimed[*i] && t.id == *id)
                .map(|(i, _)| i);
            match slot {
                Some(i) => {
                    claimed[i] = true;
                    arranged.push(tiles[i].clone());
                    report.matched += 1;
                }
                None => {
                    log::trace!("skipping stale layout entry {id:?}");
                    report.stale += 1;
                }
            }
        }

        for (i, tile) in tiles.iter().enumerate() {
            if !claimed[i] {
                arranged.push(tile.clone());
                report.unlisted += 1;
            }
        }

        report.changed = arranged
            .iter()
            .zip(tiles.iter())
            .any(|(a, b)| a.key != b.key);
        if report.changed {
            grid.set_order(arranged);
        }
        log::debug!(
            "applied layout: {} matched, {} stale, {} unlisted",
            report.matched,
            report.stale,
            report.unlisted
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TileKey;
    use crate::resolve::TileSource;
    use pretty_assertions::assert_eq;

    fn record(ids: &[&str]) -> LayoutRecord {
        LayoutRecord::new(ids.iter().map(|s| TileId::intern(s)).collect())
    }

    fn names(grid: &TileGrid) -> Vec<&str> {
        grid.tiles().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn json_is_a_plain_string_array() {
        let json = record(&["C", "A", "B", "D"]).to_json().unwrap();
        assert_eq!(json, r#"["C","A","B","D"]"#);
    }

    #[test]
    fn decode_rejects_wrong_shapes() {
        for bad in [
            "",
            "not json",
            "null",
            "42",
            r#"{"order":["a"]}"#,
            r#"[1,2,3]"#,
            r#"[{"text":"Hello","classes":"tile","index":0}]"#,
            r#"["a",null]"#,
        ] {
            assert!(
                LayoutRecord::from_json(bad).is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn decode_accepts_empty_array() {
        let rec = LayoutRecord::from_json("[]").unwrap();
        assert!(rec.is_empty());
    }

    #[test]
    fn apply_reorders_matched_tiles() {
        let mut grid = TileGrid::from_ids(["A", "B", "C", "D"]);
        let report = record(&["C", "A", "B", "D"]).apply(&mut grid);
        assert_eq!(names(&grid), vec!["C", "A", "B", "D"]);
        assert_eq!(report.matched, 4);
        assert!(report.changed);
    }

    #[test]
    fn apply_skips_stale_entries() {
        let mut grid = TileGrid::from_ids(["A", "B", "C"]);
        let report = record(&["C", "gone", "A", "B"]).apply(&mut grid);
        assert_eq!(names(&grid), vec!["C", "A", "B"]);
        assert_eq!(report.stale, 1);
        assert_eq!(report.unlisted, 0);
    }

    #[test]
    fn apply_appends_unlisted_tiles_in_relative_order() {
        let mut grid = TileGrid::from_ids(["A", "new1", "B", "new2", "C"]);
        let report = record(&["C", "B", "A"]).apply(&mut grid);
        assert_eq!(names(&grid), vec!["C", "B", "A", "new1", "new2"]);
        assert_eq!(report.unlisted, 2);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut grid = TileGrid::from_ids(["A", "x", "B", "C", "y"]);
        let rec = record(&["B", "stale", "C", "A"]);
        rec.apply(&mut grid);
        let first = grid.keys();
        let report = rec.apply(&mut grid);
        assert_eq!(grid.keys(), first);
        assert!(!report.changed);
    }

    #[test]
    fn duplicate_identities_claim_in_document_order() {
        let mut grid = TileGrid::from_sources(
            vec![
                TileSource::text("Same"),
                TileSource::explicit("A"),
                TileSource::text("Same"),
            ],
            50,
        );
        record(&["A", "Same"]).apply(&mut grid);
        // The first "Same" (authored first) claims the single entry.
        assert_eq!(grid.keys(), vec![TileKey(1), TileKey(0), TileKey(2)]);

        let mut grid = TileGrid::from_sources(
            vec![
                TileSource::text("Same"),
                TileSource::explicit("A"),
                TileSource::text("Same"),
            ],
            50,
        );
        record(&["Same", "A", "Same"]).apply(&mut grid);
        assert_eq!(grid.keys(), vec![TileKey(0), TileKey(1), TileKey(2)]);
    }

    #[test]
    fn apply_to_empty_grid_counts_everything_stale() {
        let mut grid = TileGrid::new();
        let report = record(&["A", "B"]).apply(&mut grid);
        assert_eq!(report.stale, 2);
        assert!(grid.is_empty());
    }

    #[test]
    fn capture_then_apply_roundtrips() {
        let mut grid = TileGrid::from_ids(["A", "B", "C", "D"]);
        grid.relocate(TileKey(3), TileKey(1));
        let rec = LayoutRecord::capture(&grid);
        let expected = grid.keys();

        let mut fresh = TileGrid::from_ids(["A", "B", "C", "D"]);
        rec.apply(&mut fresh);
        assert_eq!(fresh.keys(), expected);
    }
}
