//! Compact (contiguous block) policy.
//!
//! Load-agnostic baseline: task ids are split into `npes` contiguous,
//! as-equal-as-possible ranges, one per PE in id order. The first
//! `ntasks % npes` PEs take one extra task.

use super::Strategy;
use crate::models::{InputAdaptor, MigrationElement, TaskMap};

/// Compact task map: `map[task]` is the PE owning that task's block.
///
/// # Panics
/// If there are tasks but no PEs.
///
/// # Example
/// ```
/// use u_balance::strategy::compact_map;
///
/// assert_eq!(compact_map(7, 3), vec![0, 0, 0, 1, 1, 2, 2]);
/// ```
pub fn compact_map(ntasks: usize, npes: usize) -> TaskMap {
    if ntasks == 0 {
        return Vec::new();
    }
    assert!(npes >= 1, "cannot map {ntasks} tasks onto zero PEs");

    let base = ntasks / npes;
    let extra = ntasks % npes;
    let mut map = Vec::with_capacity(ntasks);
    for pe in 0..npes {
        let size = base + usize::from(pe < extra);
        map.extend(std::iter::repeat(pe).take(size));
    }
    map
}

/// Strategy wrapper around [`compact_map`]. Leaves PE loads untouched.
#[derive(Debug, Clone, Default)]
pub struct CompactStrategy {
    output: MigrationElement,
}

impl CompactStrategy {
    /// Creates a strategy with an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: InputAdaptor> Strategy<I> for CompactStrategy {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn output(&self) -> &MigrationElement {
        &self.output
    }

    fn output_mut(&mut self) -> &mut MigrationElement {
        &mut self.output
    }

    fn do_task_mapping(&mut self, input: &mut I) {
        for (task, pe) in compact_map(input.ntasks(), input.npes())
            .into_iter()
            .enumerate()
        {
            self.output.set(pe, task);
        }
    }
}
