//! Balancing domain models.
//!
//! The data a strategy consumes and produces for one rebalancing call.
//!
//! | u-balance | OpenMP | Charm++ | MPI |
//! |-----------|--------|---------|-----|
//! | Task | Loop chunk | Chare | Work item |
//! | PE | Thread | Core | Rank |
//! | LoadSnapshot | Chunk timings | LB database | Gathered loads |
//! | MigrationElement | Chunk owners | Migration list | Redistribution plan |

mod input;
mod output;

pub use input::{InputAdaptor, Load, LoadSnapshot, PeId, TaskId};
pub use output::{MigrationElement, TaskMap};
