//! Stage 1 — topic prioritization.
//!
//! Produces the total order every downstream stage consumes: hardest
//! modules first (difficulty descending) while exam-time runway is longest,
//! ties broken by the syllabus-declared module order (`priority_rank`
//! ascending).  The sort is stable, so topics within one module keep their
//! declaration order.

use std::cmp::Reverse;
use std::collections::HashMap;

use sp_core::ModuleId;
use sp_model::{SyllabusModule, SyllabusTopic};

/// Fallbacks for a topic whose module cannot be resolved.  The assembler
/// guarantees integrity, so these only matter for hand-built inputs.
const DEFAULT_DIFFICULTY: u8 = 3;
const DEFAULT_RANK: u32 = u32::MAX;

/// Return indices into `topics` in allocation order.
///
/// An empty topic list yields an empty order.
pub fn prioritize(modules: &[SyllabusModule], topics: &[SyllabusTopic]) -> Vec<usize> {
    let by_module: HashMap<ModuleId, (u8, u32)> = modules
        .iter()
        .map(|m| (m.id, (m.difficulty, m.priority_rank)))
        .collect();

    let sort_key = |idx: &usize| {
        let (difficulty, rank) = by_module
            .get(&topics[*idx].module_id)
            .copied()
            .unwrap_or((DEFAULT_DIFFICULTY, DEFAULT_RANK));
        (Reverse(difficulty), rank)
    };

    let mut order: Vec<usize> = (0..topics.len()).collect();
    // Stable sort: equal-key topics keep declaration order.
    order.sort_by_key(sort_key);
    order
}
