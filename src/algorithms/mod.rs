//! Balancing algorithms and their ordering primitives.
//!
//! - **`ordering`**: parallel value/index sorts, `heapify`, cumulative sum
//! - **`heap`**: `KeyedHeap`, extract-extreme and update-key over `heapify`
//! - **`greedy`**: longest-task-first assignment driven by a callback
//!
//! Algorithms here know nothing about output mappings. They report each
//! decision to the caller, which owns the result and the load updates.

pub mod greedy;
pub mod heap;
pub mod ordering;

pub use greedy::{map_greedy, GreedyCallback};
pub use heap::KeyedHeap;
pub use ordering::{Ascending, Descending, Order};
