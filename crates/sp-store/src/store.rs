//! The `RoadmapStore` trait implemented by all backends.

use sp_core::{EntryId, RoadmapId, TopicId};
use sp_model::{EntryStatus, Roadmap};

use crate::error::StoreResult;

/// A read/write collaborator keyed by [`RoadmapId`].
///
/// See the crate docs for the dumb-store contract: backends persist
/// verbatim and never re-run domain rules.
pub trait RoadmapStore {
    /// Persist the whole aggregate.  Saving an existing ID replaces it.
    fn save(&mut self, roadmap: &Roadmap) -> StoreResult<()>;

    /// Load one aggregate, or `None` if the ID is unknown.
    fn load(&self, id: RoadmapId) -> StoreResult<Option<Roadmap>>;

    /// IDs of every stored roadmap, in unspecified order.
    fn list(&self) -> StoreResult<Vec<RoadmapId>>;

    /// Remove one aggregate.  Returns `false` if the ID was unknown.
    fn delete(&mut self, id: RoadmapId) -> StoreResult<bool>;

    /// Overwrite one plan entry's status in place.
    fn set_entry_status(
        &mut self,
        roadmap: RoadmapId,
        entry: EntryId,
        status: EntryStatus,
    ) -> StoreResult<()>;

    /// Overwrite one topic's mastered flag in place.
    fn set_topic_mastered(
        &mut self,
        roadmap: RoadmapId,
        topic: TopicId,
        mastered: bool,
    ) -> StoreResult<()>;
}
