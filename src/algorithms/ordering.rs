//! Ordering utilities over parallel value/index arrays.
//!
//! Every routine here permutes a `values` slice and a `map` slice together,
//! so `map[i]` keeps naming the original position of whatever now sits in
//! slot `i`. Sorting would otherwise lose track of which task or PE a slot
//! refers to.
//!
//! # Order Policy
//! The direction is a compile-time parameter implementing [`Order`].
//! For heaps, the root is the element that precedes all others:
//! [`Ascending`] yields a min-heap, [`Descending`] a max-heap.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

use std::ops::Add;

/// Compile-time ordering policy.
pub trait Order {
    /// Whether `a` must come before `b`.
    fn precedes<T: PartialOrd>(a: &T, b: &T) -> bool;
}

/// Smallest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

/// Largest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

impl Order for Ascending {
    #[inline]
    fn precedes<T: PartialOrd>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl Order for Descending {
    #[inline]
    fn precedes<T: PartialOrd>(a: &T, b: &T) -> bool {
        a > b
    }
}

/// Shifted prefix sum.
///
/// Returns `sum` with `sum[0] = 0` and `sum[i] = sum[i - 1] + a[i - 1]`.
/// The last element of `a` is never added. Empty input gives an empty vector.
///
/// # Example
/// ```
/// use u_balance::algorithms::ordering::cumulative_sum;
///
/// assert_eq!(cumulative_sum(&[3, 1, 4, 1]), vec![0, 3, 4, 8]);
/// ```
pub fn cumulative_sum<T>(a: &[T]) -> Vec<T>
where
    T: Copy + Default + Add<Output = T>,
{
    let mut sum = Vec::with_capacity(a.len());
    if a.is_empty() {
        return sum;
    }
    sum.push(T::default());
    for i in 1..a.len() {
        let next = sum[i - 1] + a[i - 1];
        sum.push(next);
    }
    sum
}

/// Identity index map `[0, 1, ..., n - 1]`.
pub fn identity_map(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Insertion-style exchange sort. O(n²), intended for small inputs.
///
/// Sorts `values` by `O` and applies every swap to `map` as well.
/// Not stable.
///
/// # Panics
/// If `map` and `values` differ in length.
pub fn insertion_sort<O: Order, T: PartialOrd>(map: &mut [usize], values: &mut [T]) {
    assert_eq!(map.len(), values.len(), "map and values must be parallel");
    let n = values.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if O::precedes(&values[j], &values[i]) {
                values.swap(i, j);
                map.swap(i, j);
            }
        }
    }
}

/// Restores the heap invariant rooted at `i` within the first `n` slots.
///
/// Assumes both subtrees of `i` already are heaps. The entry that precedes
/// its children under `O` is moved up; `values` and `map` are swapped
/// together and the fix-up continues into the child that changed.
/// O(log n).
///
/// # Panics
/// If `n` exceeds either slice.
pub fn heapify<O: Order, T: PartialOrd>(map: &mut [usize], values: &mut [T], n: usize, i: usize) {
    assert!(n <= values.len() && n <= map.len(), "heap size out of bounds");
    sift_down(map, values, n, i, O::precedes::<T>);
}

/// Arranges `values` (and `map`) into a heap under `O`. O(n).
///
/// Only a heap-shaped partial order: the root precedes everything, the
/// remaining slots are not sorted. Use [`heap_sort`] for a full order.
pub fn build_heap<O: Order, T: PartialOrd>(map: &mut [usize], values: &mut [T]) {
    assert_eq!(map.len(), values.len(), "map and values must be parallel");
    let n = values.len();
    for i in (0..n / 2).rev() {
        sift_down(map, values, n, i, O::precedes::<T>);
    }
}

/// Heap sort. O(n log n), same contract as [`insertion_sort`].
///
/// Builds a heap under the reversed policy and repeatedly moves its root
/// to the shrinking tail, leaving `values` fully ordered by `O`.
pub fn heap_sort<O: Order, T: PartialOrd>(map: &mut [usize], values: &mut [T]) {
    assert_eq!(map.len(), values.len(), "map and values must be parallel");
    let n = values.len();
    let reversed = |a: &T, b: &T| O::precedes(b, a);
    for i in (0..n / 2).rev() {
        sift_down(map, values, n, i, reversed);
    }
    for end in (1..n).rev() {
        values.swap(0, end);
        map.swap(0, end);
        sift_down(map, values, end, 0, reversed);
    }
}

/// Whether the first `n` slots of `values` satisfy the heap invariant.
pub fn is_heap<O: Order, T: PartialOrd>(values: &[T], n: usize) -> bool {
    let n = n.min(values.len());
    (1..n).all(|child| !O::precedes(&values[child], &values[(child - 1) / 2]))
}

fn sift_down<T, F>(map: &mut [usize], values: &mut [T], n: usize, mut i: usize, precedes: F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        let mut top = i;

        if l < n && precedes(&values[l], &values[top]) {
            top = l;
        }
        if r < n && precedes(&values[r], &values[top]) {
            top = r;
        }
        if top == i {
            return;
        }
        values.swap(i, top);
        map.swap(i, top);
        i = top;
    }
}
