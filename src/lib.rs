//! Load-balancing framework for the U-Engine ecosystem.
//!
//! Decides, at a rebalancing point, which task goes to which processing
//! element (PE). A host runtime supplies a snapshot of task and PE loads;
//! a pluggable strategy returns a fresh task-to-PE mapping. Nothing is
//! migrated and no state survives between calls.
//!
//! # Modules
//!
//! - **`algorithms`**: ordering utilities (`heapify`, parallel-index sorts,
//!   cumulative sum), `KeyedHeap`, and the greedy LPT algorithm
//! - **`models`**: `InputAdaptor`, `LoadSnapshot`, `MigrationElement`
//! - **`strategy`**: the `Strategy` protocol, `GreedyStrategy`,
//!   `CompactStrategy`, `BalanceKpi`
//! - **`runtime`**: `RuntimeConfig` and load-query callbacks producing snapshots
//! - **`synthetic`**: generated inputs for benchmarks and tests
//! - **`validation`**: total / single assignment checks on a mapping
//!
//! # Architecture
//!
//! Strategies are bound to their input adaptor at compile time through
//! generics. Algorithms report each decision through a callback trait and
//! leave load bookkeeping to the strategy.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6

pub mod algorithms;
pub mod models;
pub mod runtime;
pub mod strategy;
pub mod synthetic;
pub mod validation;
