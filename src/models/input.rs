//! Input adaptor contract and the owned load snapshot.
//!
//! A strategy never reads runtime state directly. The host hands it an
//! [`InputAdaptor`]: task and PE counts, per-id loads, and a setter for
//! PE loads. Ids are dense: tasks `0..ntasks()`, PEs `0..npes()`.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::Add;

/// Task identifier (dense, zero-based).
pub type TaskId = usize;

/// Processing element identifier (dense, zero-based).
pub type PeId = usize;

/// A load value: summable and ordered.
///
/// `Default` is the zero load. Nothing beyond addition and comparison is
/// assumed, so integer and floating loads both work.
pub trait Load: Copy + PartialOrd + Add<Output = Self> + Default + Debug {}

impl<T> Load for T where T: Copy + PartialOrd + Add<Output = T> + Default + Debug {}

/// Read/write view over one rebalancing snapshot.
///
/// Implemented by the host binding layer. Only PE loads are mutable, and
/// only the strategy running the current call mutates them.
pub trait InputAdaptor {
    /// Load representation.
    type Load: Load;

    /// Number of tasks.
    fn ntasks(&self) -> usize;

    /// Number of processing elements.
    fn npes(&self) -> usize;

    /// Load of a task.
    fn task_load(&self, task: TaskId) -> Self::Load;

    /// Current load of a PE.
    fn pe_load(&self, pe: PeId) -> Self::Load;

    /// Overwrites the load of a PE.
    fn set_pe_load(&mut self, pe: PeId, load: Self::Load);
}

/// Owned task and PE loads for one balancing call.
///
/// # Example
/// ```
/// use u_balance::models::{InputAdaptor, LoadSnapshot};
///
/// let mut input = LoadSnapshot::new(vec![5, 1, 3], vec![0, 0]);
/// assert_eq!(input.ntasks(), 3);
/// input.set_pe_load(1, 4);
/// assert_eq!(input.pe_load(1), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSnapshot<L> {
    /// Load per task, indexed by task id.
    pub task_loads: Vec<L>,
    /// Load per PE, indexed by PE id.
    pub pe_loads: Vec<L>,
}

impl<L: Load> LoadSnapshot<L> {
    /// Creates a snapshot from explicit loads.
    pub fn new(task_loads: Vec<L>, pe_loads: Vec<L>) -> Self {
        Self {
            task_loads,
            pe_loads,
        }
    }

    /// Creates a snapshot where every PE starts at zero load.
    pub fn with_idle_pes(task_loads: Vec<L>, npes: usize) -> Self {
        Self::new(task_loads, vec![L::default(); npes])
    }

    /// Sum of all task loads.
    pub fn total_task_load(&self) -> L {
        self.task_loads
            .iter()
            .fold(L::default(), |acc, &load| acc + load)
    }
}

impl<L: Load> InputAdaptor for LoadSnapshot<L> {
    type Load = L;

    #[inline]
    fn ntasks(&self) -> usize {
        self.task_loads.len()
    }

    #[inline]
    fn npes(&self) -> usize {
        self.pe_loads.len()
    }

    #[inline]
    fn task_load(&self, task: TaskId) -> L {
        self.task_loads[task]
    }

    #[inline]
    fn pe_load(&self, pe: PeId) -> L {
        self.pe_loads[pe]
    }

    #[inline]
    fn set_pe_load(&mut self, pe: PeId, load: L) {
        self.pe_loads[pe] = load;
    }
}
