//! Tile identity resolution.
//!
//! A tile's identity is a pure function of its attributes and content:
//!
//! 1. An explicit author-assigned identifier (e.g. `data-id="github"`) wins.
//! 2. Otherwise the identity is a snapshot of the tile's visible text,
//!    whitespace-collapsed and truncated to the first `N` characters.
//!
//! The snapshot path is a legacy fallback. It breaks when the text changes
//! and collides when two tiles start with the same text; collisions are not
//! reported here and are tie-broken by document order when a layout is
//! applied (see [`crate::record`]).

use crate::id::TileId;

/// Default length of a content-snapshot identity, in characters.
pub const DEFAULT_SNAPSHOT_LEN: usize = 50;

/// The raw inputs identity is derived from, as read from the host document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSource {
    /// Value of the explicit identity attribute, if the tile carries one.
    pub explicit_id: Option<String>,
    /// The tile's visible text content.
    pub text: String,
}

impl TileSource {
    pub fn explicit(id: &str) -> Self {
        Self {
            explicit_id: Some(id.to_string()),
            text: String::new(),
        }
    }

    pub fn text(text: &str) -> Self {
        Self {
            explicit_id: None,
            text: text.to_string(),
        }
    }
}

/// Where a resolved identity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityOrigin {
    /// Author-assigned attribute.
    Explicit,
    /// Truncated, normalized text content.
    ContentSnapshot,
}

/// Resolve the identity of a tile.
///
/// A blank explicit attribute counts as absent.
#[must_use]
pub fn resolve_identity(source: &TileSource, snapshot_len: usize) -> (TileId, IdentityOrigin) {
    if let Some(explicit) = source.explicit_id.as_deref().map(str::trim)
        && !explicit.is_empty()
    {
        return (TileId::intern(explicit), IdentityOrigin::Explicit);
    }
    let snapshot = content_snapshot(&source.text, snapshot_len);
    (TileId::intern(&snapshot), IdentityOrigin::ContentSnapshot)
}

/// Collapse whitespace runs to a single space, trim, and keep the first
/// `len` characters.
#[must_use]
pub fn content_snapshot(text: &str, len: usize) -> String {
    let mut out = String::with_capacity(text.len().min(len.saturating_mul(4)));
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
        if out.chars().count() >= len {
            break;
        }
    }
    match out.char_indices().nth(len) {
        Some((cut, _)) => out[..cut].to_string(),
        None => out,
    }
}
