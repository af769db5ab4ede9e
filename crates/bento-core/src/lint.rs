//! Lint diagnostics for tile identities.
//!
//! Reports identities that make persisted layouts fragile without changing
//! how layouts load: content-snapshot identities break when the text
//! changes, and colliding identities are matched by document order.

use crate::id::TileId;
use crate::model::{TileGrid, TileKey};
use crate::resolve::IdentityOrigin;
use serde::Serialize;
use std::collections::HashMap;

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Should be fixed — layouts may restore the wrong tile.
    Warning,
    /// Informational — works today, breaks on content edits.
    Info,
}

/// A single lint diagnostic for a tile.
#[derive(Debug, Clone, Serialize)]
pub struct LintDiagnostic {
    /// Authored index of the tile.
    pub tile: u32,
    pub identity: TileId,
    pub message: String,
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "content-identity", "duplicate-identity").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all identity rules over the grid, in current tile order.
#[must_use]
pub fn lint_grid(grid: &TileGrid) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_content_identities(grid, &mut diags);
    lint_duplicate_identities(grid, &mut diags);
    diags
}

// ─── Rules ───────────────────────────────────────────────────────────────

fn lint_content_identities(grid: &TileGrid, diags: &mut Vec<LintDiagnostic>) {
    for tile in grid.tiles() {
        if tile.origin == IdentityOrigin::ContentSnapshot {
            diags.push(LintDiagnostic {
                tile: tile.key.0,
                identity: tile.id,
                message: "tile has no explicit id; identity is derived from its text".to_string(),
                severity: LintSeverity::Info,
                rule: "content-identity",
            });
        }
    }
}

fn lint_duplicate_identities(grid: &TileGrid, diags: &mut Vec<LintDiagnostic>) {
    let mut first_seen: HashMap<TileId, TileKey> = HashMap::new();
    for tile in grid.tiles() {
        match first_seen.get(&tile.id) {
            Some(first) => diags.push(LintDiagnostic {
                tile: tile.key.0,
                identity: tile.id,
                message: format!(
                    "identity {:?} is also used by tile {}; saved layouts match the first one",
                    tile.id.as_str(),
                    first.0
                ),
                severity: LintSeverity::Warning,
                rule: "duplicate-identity",
            }),
            None => {
                first_seen.insert(tile.id, tile.key);
            }
        }
    }
}
