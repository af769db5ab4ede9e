//! Interned tile identities.
//!
//! Every identity string a grid sees is interned once in a process-wide
//! table and handled afterwards as a 4-byte `Copy` key. The table only
//! grows: identities read from saved records stay interned even when the
//! record entry turns out to be stale, and are freed only when the page
//! (or process) goes away.

use lasso::{Spur, ThreadedRodeo};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static IDENTITIES: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// What a tile is, as opposed to where it sits in the grid.
///
/// Not unique within a grid: two tiles whose identity falls back to the
/// same content snapshot share one `TileId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(Spur);

impl TileId {
    pub fn intern(identity: &str) -> Self {
        Self(IDENTITIES.get_or_intern(identity))
    }

    pub fn as_str(&self) -> &'static str {
        IDENTITIES.resolve(&self.0)
    }
}

impl fmt::Debug for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TileId").field(&self.as_str()).finish()
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TileId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct IdentityVisitor;

impl Visitor<'_> for IdentityVisitor {
    type Value = TileId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a tile identity string")
    }

    // Interns straight from the input buffer; no owned copy is made.
    fn visit_str<E: de::Error>(self, identity: &str) -> Result<TileId, E> {
        Ok(TileId::intern(identity))
    }
}

impl<'de> Deserialize<'de> for TileId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(IdentityVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_string_same_identity() {
        let a = TileId::intern("github");
        assert_eq!(a, TileId::intern("github"));
        assert_ne!(a, TileId::intern("GitHub"));
        assert_eq!(a.as_str(), "github");
    }

    #[test]
    fn display_is_the_raw_identity() {
        let id = TileId::intern("Now playing");
        assert_eq!(id.to_string(), "Now playing");
        assert_eq!(format!("{id:?}"), r#"TileId("Now playing")"#);
    }

    #[test]
    fn decodes_from_json_strings_only() {
        let id: TileId = serde_json::from_str(r#""blog \"post\"""#).unwrap();
        assert_eq!(id.as_str(), r#"blog "post""#);
        assert!(serde_json::from_str::<TileId>("7").is_err());
        assert!(serde_json::from_str::<TileId>("null").is_err());
    }
}
