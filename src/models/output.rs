//! Output mapping produced by a strategy call.

use serde::{Deserialize, Serialize};

use super::{PeId, TaskId};

/// Task-indexed PE assignment: `map[task] = pe`.
pub type TaskMap = Vec<PeId>;

/// Mapping from PE id to the task ids assigned to it.
///
/// After a successful strategy call every task id appears in exactly one
/// PE's set. Tasks are kept in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationElement {
    assigned: Vec<Vec<TaskId>>,
}

impl MigrationElement {
    /// Creates a mapping with `npes` empty sets.
    pub fn new(npes: usize) -> Self {
        Self {
            assigned: vec![Vec::new(); npes],
        }
    }

    /// Clears every set and resizes to `npes`.
    pub fn reset(&mut self, npes: usize) {
        self.assigned.clear();
        self.assigned.resize_with(npes, Vec::new);
    }

    /// Records `task` on `pe`.
    ///
    /// # Panics
    /// If `pe` is outside `0..npes()`.
    pub fn set(&mut self, pe: PeId, task: TaskId) {
        assert!(
            pe < self.assigned.len(),
            "PE {pe} out of range (npes = {})",
            self.assigned.len()
        );
        self.assigned[pe].push(task);
    }

    /// Tasks assigned to `pe` (empty for unknown PEs).
    pub fn tasks_of(&self, pe: PeId) -> &[TaskId] {
        self.assigned.get(pe).map(Vec::as_slice).unwrap_or(&[])
    }

    /// PE that received `task`, if any. Linear scan.
    pub fn pe_of(&self, task: TaskId) -> Option<PeId> {
        self.assigned
            .iter()
            .position(|tasks| tasks.contains(&task))
    }

    /// Number of PEs.
    #[inline]
    pub fn npes(&self) -> usize {
        self.assigned.len()
    }

    /// Total number of recorded assignments.
    pub fn task_count(&self) -> usize {
        self.assigned.iter().map(Vec::len).sum()
    }

    /// Whether no task has been assigned.
    pub fn is_empty(&self) -> bool {
        self.assigned.iter().all(Vec::is_empty)
    }

    /// Iterates `(pe, tasks)` in PE order.
    pub fn iter(&self) -> impl Iterator<Item = (PeId, &[TaskId])> {
        self.assigned
            .iter()
            .enumerate()
            .map(|(pe, tasks)| (pe, tasks.as_slice()))
    }

    /// Converts into a task-indexed map.
    ///
    /// Returns `None` if some task in `0..ntasks` is unassigned, assigned
    /// twice, or an assigned id lies outside that range.
    pub fn to_task_map(&self, ntasks: usize) -> Option<TaskMap> {
        let mut map: Vec<Option<PeId>> = vec![None; ntasks];
        for (pe, tasks) in self.iter() {
            for &task in tasks {
                let slot = map.get_mut(task)?;
                if slot.replace(pe).is_some() {
                    return None;
                }
            }
        }
        map.into_iter().collect()
    }
}
