//! Strategy protocol and built-in strategies.
//!
//! A strategy turns one [`InputAdaptor`] snapshot into a
//! [`MigrationElement`]. The host calls [`Strategy::map_tasks`]; each
//! strategy only implements [`Strategy::do_task_mapping`].
//!
//! # Strategies
//!
//! | Strategy | Uses loads | Assignment |
//! |----------|-----------|------------|
//! | `GreedyStrategy` | yes | heaviest task to lightest PE |
//! | `CompactStrategy` | no | contiguous id blocks per PE |
//!
//! # Binding
//!
//! The input is bound for exactly one call through the `&mut` borrow
//! passed to `do_task_mapping`, and released when `map_tasks` returns. A
//! strategy instance cannot serve two overlapping calls; concurrent
//! balancing needs one instance per caller.

mod compact;
mod greedy;
mod kpi;

pub use compact::{compact_map, CompactStrategy};
pub use greedy::GreedyStrategy;
pub use kpi::BalanceKpi;

use tracing::debug;

use crate::models::{InputAdaptor, MigrationElement};

/// A pluggable balancing strategy over input adaptors of type `I`.
pub trait Strategy<I: InputAdaptor> {
    /// Strategy name (e.g., "greedy").
    fn name(&self) -> &'static str;

    /// The mapping produced by the last call.
    fn output(&self) -> &MigrationElement;

    /// Mutable access to the mapping under construction.
    fn output_mut(&mut self) -> &mut MigrationElement;

    /// Strategy-specific mapping. Must assign every task of `input` to
    /// exactly one PE in [`Strategy::output_mut`].
    fn do_task_mapping(&mut self, input: &mut I);

    /// Entry point: maps every task of `input` and returns the mapping.
    ///
    /// The previous mapping is discarded. The returned reference stays
    /// valid until the next call.
    fn map_tasks(&mut self, input: &mut I) -> &MigrationElement {
        debug!(
            strategy = self.name(),
            ntasks = input.ntasks(),
            npes = input.npes(),
            "mapping tasks"
        );
        self.output_mut().reset(input.npes());
        self.do_task_mapping(input);
        self.output()
    }
}
