//! In-memory backend.
//!
//! The default collaborator for tests and single-process use.  Aggregates
//! are cloned on load, so callers can mutate their copy and `save` it back
//! without aliasing the stored one.

use std::collections::HashMap;

use sp_core::{EntryId, RoadmapId, TopicId};
use sp_model::{EntryStatus, Roadmap};

use crate::error::{StoreError, StoreResult};
use crate::store::RoadmapStore;

/// Process-local roadmap storage.
#[derive(Default)]
pub struct MemoryStore {
    roadmaps: HashMap<RoadmapId, Roadmap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.roadmaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roadmaps.is_empty()
    }

    fn get_mut(&mut self, id: RoadmapId) -> StoreResult<&mut Roadmap> {
        self.roadmaps
            .get_mut(&id)
            .ok_or(StoreError::UnknownRoadmap(id))
    }
}

impl RoadmapStore for MemoryStore {
    fn save(&mut self, roadmap: &Roadmap) -> StoreResult<()> {
        self.roadmaps.insert(roadmap.id, roadmap.clone());
        Ok(())
    }

    fn load(&self, id: RoadmapId) -> StoreResult<Option<Roadmap>> {
        Ok(self.roadmaps.get(&id).cloned())
    }

    fn list(&self) -> StoreResult<Vec<RoadmapId>> {
        Ok(self.roadmaps.keys().copied().collect())
    }

    fn delete(&mut self, id: RoadmapId) -> StoreResult<bool> {
        Ok(self.roadmaps.remove(&id).is_some())
    }

    fn set_entry_status(
        &mut self,
        roadmap: RoadmapId,
        entry: EntryId,
        status: EntryStatus,
    ) -> StoreResult<()> {
        let stored = self.get_mut(roadmap)?;
        let found = stored
            .plan
            .iter_mut()
            .find(|e| e.id == entry)
            .ok_or(StoreError::UnknownEntry(entry))?;
        found.status = status;
        Ok(())
    }

    fn set_topic_mastered(
        &mut self,
        roadmap: RoadmapId,
        topic: TopicId,
        mastered: bool,
    ) -> StoreResult<()> {
        let stored = self.get_mut(roadmap)?;
        let found = stored
            .topics
            .iter_mut()
            .find(|t| t.id == topic)
            .ok_or(StoreError::UnknownTopic(topic))?;
        found.mastered = mastered;
        Ok(())
    }
}
