//! `sp-store` — the storage collaborator for generated roadmaps.
//!
//! The scheduler hands over a fully-materialized [`sp_model::Roadmap`];
//! this crate persists it.  Two backends implement [`RoadmapStore`]:
//!
//! | Feature  | Backend       | Storage                                      |
//! |----------|---------------|----------------------------------------------|
//! | *(none)* | `MemoryStore` | process-local `HashMap`                      |
//! | `sqlite` | `SqliteStore` | normalized tables in a single database file  |
//!
//! [`write_plan_csv`] additionally exports one roadmap's calendar as a flat
//! CSV for spreadsheets.
//!
//! # Dumb-store contract
//!
//! Backends are plain key-value collaborators: they persist what they are
//! given and do not re-run domain rules.  In particular
//! [`RoadmapStore::set_entry_status`] writes the requested status verbatim —
//! the `Pending → Completed | Missed` state machine is enforced by the
//! application through `sp_model::Roadmap` before persisting.  The SQLite
//! backend does run [`sp_model::Roadmap::validate`] after re-assembling an
//! aggregate from rows, surfacing torn writes as [`StoreError::Corrupt`].

pub mod csv;
pub mod error;
pub mod memory;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::write_plan_csv;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::RoadmapStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
