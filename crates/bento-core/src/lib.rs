pub mod config;
pub mod id;
pub mod lint;
pub mod model;
pub mod record;
pub mod resolve;
pub mod storage;
pub mod store;

pub use config::GridConfig;
pub use id::TileId;
pub use lint::{LintDiagnostic, LintSeverity, lint_grid};
pub use model::{Tile, TileGrid, TileKey};
pub use record::{ApplyReport, LayoutRecord, RecordError};
pub use resolve::{IdentityOrigin, TileSource, resolve_identity};
pub use storage::{LayoutStorage, MemoryStorage, StorageError};
pub use store::LayoutStore;
