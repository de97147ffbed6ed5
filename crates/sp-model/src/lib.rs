//! `sp-model` — the studyplan data model and upstream-input validation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`syllabus`]| `Syllabus`, `SyllabusModule`, `SyllabusTopic`              |
//! | [`outline`] | `ModuleOutline`, `TopicOutline` (validated scheduler input)|
//! | [`plan`]    | `PlanEntry`, `SessionKind`, `EntryStatus`, `ProgressEntry` |
//! | [`roadmap`] | `Roadmap` aggregate and its mutation surface               |
//! | [`loader`]  | JSON loader for the upstream generator payload             |
//! | [`error`]   | `ModelError`, `ModelResult<T>`                             |
//!
//! # Boundary rule
//!
//! Nothing downstream of this crate ever sees unvalidated upstream data.
//! The generator's loosely-typed JSON is parsed and checked in [`loader`],
//! producing [`outline::ModuleOutline`] values whose constructors enforce
//! the field invariants (difficulty 1–5, hours > 0, non-empty names).

pub mod error;
pub mod loader;
pub mod outline;
pub mod plan;
pub mod roadmap;
pub mod syllabus;

#[cfg(test)]
mod tests;

pub use error::{ModelError, ModelResult};
pub use loader::{load_outline_json, outline_from_reader, parse_outline};
pub use outline::{ModuleOutline, TopicOutline};
pub use plan::{EntryStatus, PlanEntry, ProgressEntry, SessionKind};
pub use roadmap::Roadmap;
pub use syllabus::{InputMethod, Syllabus, SyllabusModule, SyllabusStatus, SyllabusTopic};
