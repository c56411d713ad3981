//! Greedy (LPT) balancing strategy.
//!
//! Binds [`map_greedy`] to the strategy protocol: heaviest task first,
//! lightest PE first, and a callback that records the pairing and adds the
//! task's load to the receiving PE.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use tracing::trace;

use super::Strategy;
use crate::algorithms::{map_greedy, Ascending, Descending, GreedyCallback};
use crate::models::{InputAdaptor, MigrationElement, PeId, TaskId};

/// Longest-processing-time-first balancer.
///
/// Ties between equal loads are broken by heap position, so the result is
/// reproducible for a given input but not ordered by id.
///
/// # Example
///
/// ```
/// use u_balance::models::LoadSnapshot;
/// use u_balance::strategy::{GreedyStrategy, Strategy};
///
/// let mut input = LoadSnapshot::new(vec![5, 1, 3], vec![0, 0]);
/// let mut strategy = GreedyStrategy::new();
///
/// let mapping = strategy.map_tasks(&mut input);
/// assert_eq!(mapping.tasks_of(0), &[0]);
/// assert_eq!(mapping.tasks_of(1), &[2, 1]);
/// assert_eq!(input.pe_loads, vec![5, 4]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyStrategy {
    output: MigrationElement,
}

impl GreedyStrategy {
    /// Creates a strategy with an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: InputAdaptor> GreedyCallback<I> for GreedyStrategy {
    type TaskOrder = Descending;
    type PeOrder = Ascending;

    fn algorithm_mapped(&mut self, input: &mut I, task: TaskId, pe: PeId) {
        self.output.set(pe, task);

        let new_load = input.pe_load(pe) + input.task_load(task);
        trace!(task, pe, load = ?new_load, "task mapped");
        input.set_pe_load(pe, new_load);
    }
}

impl<I: InputAdaptor> Strategy<I> for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn output(&self) -> &MigrationElement {
        &self.output
    }

    fn output_mut(&mut self) -> &mut MigrationElement {
        &mut self.output
    }

    fn do_task_mapping(&mut self, input: &mut I) {
        map_greedy(input, self);
    }
}
