//! Greedy longest-task-first assignment.
//!
//! # Algorithm
//!
//! 1. Build a task heap keyed by task load and a PE heap keyed by PE load,
//!    each under the order the caller supplies.
//! 2. Pop the extreme task (heaviest, for LPT).
//! 3. Peek the extreme PE (lightest, for LPT).
//! 4. Notify the caller, which records the pairing and raises the PE load.
//! 5. Re-key the PE at the root with its new load.
//!
//! Ties go to whichever entry the heap surfaces first. That is
//! deterministic for this heap, but not stable with respect to ids.
//!
//! # Complexity
//! O(n + m) heap builds, then O(n log m) for n tasks and m PEs.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use crate::models::{InputAdaptor, PeId, TaskId};

use super::heap::KeyedHeap;
use super::ordering::Order;

/// Caller side of the greedy algorithm.
///
/// Supplies the two comparators and reacts to each assignment.
pub trait GreedyCallback<I: InputAdaptor> {
    /// Order of the task heap; its root is assigned next.
    type TaskOrder: Order;
    /// Order of the PE heap; its root receives the next task.
    type PeOrder: Order;

    /// Called once per assignment.
    ///
    /// Must set the PE's load to `pe_load + task_load` through the
    /// adaptor; the next comparison reads the updated value.
    fn algorithm_mapped(&mut self, input: &mut I, task: TaskId, pe: PeId);
}

/// Assigns every task of `input` to one PE. Returns the number of
/// assignments made, which equals `input.ntasks()`.
///
/// # Panics
/// If there are tasks but no PEs.
pub fn map_greedy<I, C>(input: &mut I, callback: &mut C) -> usize
where
    I: InputAdaptor,
    C: GreedyCallback<I>,
{
    let ntasks = input.ntasks();
    let npes = input.npes();
    if ntasks == 0 {
        return 0;
    }
    assert!(npes >= 1, "cannot map {ntasks} tasks onto zero PEs");

    let task_loads = (0..ntasks).map(|t| input.task_load(t)).collect();
    let pe_loads = (0..npes).map(|p| input.pe_load(p)).collect();
    let mut tasks: KeyedHeap<I::Load, C::TaskOrder> = KeyedHeap::from_keys(task_loads);
    let mut pes: KeyedHeap<I::Load, C::PeOrder> = KeyedHeap::from_keys(pe_loads);

    let mut assigned = 0;
    while let Some((task, _)) = tasks.pop() {
        let Some((pe, _)) = pes.peek() else {
            unreachable!("PE heap holds {npes} entries for the whole run");
        };
        callback.algorithm_mapped(input, task, pe);
        pes.update_top(input.pe_load(pe));
        assigned += 1;
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::ordering::{Ascending, Descending};
    use crate::models::LoadSnapshot;

    /// Records every step and the PE loads seen around it.
    #[derive(Default)]
    struct Recorder {
        steps: Vec<(TaskId, PeId, i64, i64)>,
        min_violations: usize,
    }

    impl GreedyCallback<LoadSnapshot<i64>> for Recorder {
        type TaskOrder = Descending;
        type PeOrder = Ascending;

        fn algorithm_mapped(&mut self, input: &mut LoadSnapshot<i64>, task: TaskId, pe: PeId) {
            let before = input.pe_load(pe);
            if input.pe_loads.iter().any(|&l| l < before) {
                self.min_violations += 1;
            }
            let after = before + input.task_load(task);
            input.set_pe_load(pe, after);
            self.steps.push((task, pe, before, after));
        }
    }

    #[test]
    fn test_three_tasks_two_pes() {
        let mut input = LoadSnapshot::new(vec![5, 1, 3], vec![0, 0]);
        let mut rec = Recorder::default();
        let n = map_greedy(&mut input, &mut rec);

        assert_eq!(n, 3);
        let order: Vec<TaskId> = rec.steps.iter().map(|s| s.0).collect();
        assert_eq!(order, vec![0, 2, 1]);
        // Task 1 goes where task 2 went: that PE is lighter (3 < 5)
        assert_eq!(rec.steps[2].1, rec.steps[1].1);
        assert_ne!(rec.steps[0].1, rec.steps[1].1);

        let mut loads = input.pe_loads.clone();
        loads.sort_unstable();
        assert_eq!(loads, vec![4, 5]);
    }

    #[test]
    fn test_zero_tasks() {
        let mut input: LoadSnapshot<i64> = LoadSnapshot::new(Vec::new(), vec![0, 0]);
        let mut rec = Recorder::default();
        assert_eq!(map_greedy(&mut input, &mut rec), 0);
        assert!(rec.steps.is_empty());
    }

    #[test]
    fn test_zero_tasks_zero_pes() {
        let mut input: LoadSnapshot<i64> = LoadSnapshot::new(Vec::new(), Vec::new());
        let mut rec = Recorder::default();
        assert_eq!(map_greedy(&mut input, &mut rec), 0);
    }

    #[test]
    #[should_panic(expected = "zero PEs")]
    fn test_tasks_without_pes_panics() {
        let mut input = LoadSnapshot::new(vec![1i64], Vec::new());
        let mut rec = Recorder::default();
        map_greedy(&mut input, &mut rec);
    }

    #[test]
    fn test_lightest_pe_always_chosen() {
        let task_loads: Vec<i64> = (0..50).map(|i| (i * 37 % 23) + 1).collect();
        let mut input = LoadSnapshot::new(task_loads, vec![7, 0, 3, 12, 0]);
        let mut rec = Recorder::default();
        map_greedy(&mut input, &mut rec);

        assert_eq!(rec.min_violations, 0);
        for &(task, _, before, after) in &rec.steps {
            assert!(after > before);
            assert_eq!(after - before, input.task_load(task));
        }
    }

    #[test]
    fn test_tasks_in_nonincreasing_load_order() {
        let mut input = LoadSnapshot::new(vec![2, 9, 4, 9, 1, 6], vec![0, 0, 0]);
        let mut rec = Recorder::default();
        map_greedy(&mut input, &mut rec);

        let loads: Vec<i64> = rec.steps.iter().map(|s| input.task_load(s.0)).collect();
        assert!(loads.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_negative_loads() {
        let mut input = LoadSnapshot::new(vec![-2, 4, -1], vec![0, -10]);
        let mut rec = Recorder::default();
        map_greedy(&mut input, &mut rec);

        // Heaviest task lands on the most negative PE
        assert_eq!(rec.steps[0], (1, 1, -10, -6));
        assert_eq!(rec.steps.len(), 3);
        assert_eq!(rec.min_violations, 0);
    }
}
