// crates/worldmark-core/src/lib.rs

pub mod error;
pub mod loader; // The dataset loader (network + local JSON)
pub mod model;
pub mod region;
pub mod state; // The application-state controller
pub mod text;
pub mod view; // The derived-view pipeline
pub mod visited;

// Re-exports
pub use crate::error::{Result, WorldmarkError};
pub use crate::model::Country;
pub use crate::region::unique_regions;
pub use crate::state::{App, LoadState};
pub use crate::view::{derive_view, SortDirection, SortField, ViewQuery};
pub use crate::visited::{FileStore, MemoryStore, VisitedSet, VisitedStore, STORAGE_KEY};
