//! Synthetic balancing inputs for benchmarks and tests.
//!
//! All generators start every PE idle.

use rand::Rng;

use crate::models::LoadSnapshot;

/// Linearly growing loads: task `i` has load `2 * i`.
///
/// # Example
/// ```
/// use u_balance::synthetic::linear_input;
///
/// let input = linear_input(2, 4);
/// assert_eq!(input.task_loads, vec![0, 2, 4, 6]);
/// assert_eq!(input.pe_loads, vec![0, 0]);
/// ```
pub fn linear_input(npes: usize, ntasks: usize) -> LoadSnapshot<u64> {
    let task_loads = (0..ntasks as u64).map(|i| i * 2).collect();
    LoadSnapshot::with_idle_pes(task_loads, npes)
}

/// Uniform random loads in `1..=max_load`.
///
/// # Panics
/// If `max_load` is zero.
pub fn random_input<R: Rng>(
    npes: usize,
    ntasks: usize,
    max_load: u64,
    rng: &mut R,
) -> LoadSnapshot<u64> {
    assert!(max_load >= 1, "max_load must be positive");
    let task_loads = (0..ntasks)
        .map(|_| rng.random_range(1..=max_load))
        .collect();
    LoadSnapshot::with_idle_pes(task_loads, npes)
}
