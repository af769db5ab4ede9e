//! Per-grid configuration.

use crate::resolve::DEFAULT_SNAPSHOT_LEN;
use serde::Deserialize;

/// Configuration for one grid instance.
///
/// Deserializable from JSON so the browser bridge can take it from the
/// page; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Storage slot for this grid's layout record. Distinct grids must use
    /// distinct keys. Default: **`bento-tile-order`**.
    pub storage_key: String,

    /// Length, in characters, of content-snapshot identities. Default: **50**.
    pub snapshot_len: usize,

    /// CSS selector (relative to the grid container) that finds tiles.
    /// Default: **`:scope > *`** (every direct child).
    pub tile_selector: String,

    /// Attribute holding an author-assigned identity. Default: **`data-id`**.
    pub id_attribute: String,

    /// Toggle control label while idle. Default: **`Edit`**.
    pub edit_label: String,

    /// Toggle control label while editing. Default: **`Done`**.
    pub done_label: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::bento()
    }
}

impl GridConfig {
    /// The main bento grid: every child is a tile, identities usually come
    /// from content.
    pub fn bento() -> Self {
        Self {
            storage_key: "bento-tile-order".to_string(),
            snapshot_len: DEFAULT_SNAPSHOT_LEN,
            tile_selector: ":scope > *".to_string(),
            id_attribute: "data-id".to_string(),
            edit_label: "Edit".to_string(),
            done_label: "Done".to_string(),
        }
    }

    /// The card-page widget grid: `.tile` children carrying `data-id`.
    pub fn widgets() -> Self {
        Self {
            storage_key: "bento-layout".to_string(),
            tile_selector: ".tile".to_string(),
            edit_label: "Edit Layout".to_string(),
            done_label: "Save Layout".to_string(),
            ..Self::bento()
        }
    }

    /// Parse a JSON config. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
