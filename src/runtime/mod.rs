//! Host runtime binding.
//!
//! Holds the runtime configuration and the two load-query callbacks a
//! host registers at initialization, and turns them into a
//! [`LoadSnapshot`] for each rebalancing call. Strategies never call the
//! callbacks themselves; they only see the snapshot.
//!
//! # Usage
//!
//! ```
//! use u_balance::runtime::{RuntimeBinding, RuntimeConfig};
//! use u_balance::strategy::GreedyStrategy;
//!
//! let binding = RuntimeBinding::new(RuntimeConfig::new().with_npes(2).with_ntasks(3))
//!     .with_task_load_fn(|| vec![5u64, 1, 3])
//!     .with_pe_load_fn(|| vec![0u64, 0]);
//!
//! let task_map = binding.rebalance(&mut GreedyStrategy::new()).unwrap();
//! assert_eq!(task_map, vec![0, 1, 1]);
//! ```

mod config;

pub use config::RuntimeConfig;

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::models::{Load, LoadSnapshot, TaskMap};
use crate::strategy::Strategy;
use crate::validation::{validate_mapping, ValidationError};

/// Errors raised while building a snapshot from the runtime binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// No task load callback registered.
    #[error("task load function not set")]
    MissingTaskLoadFn,
    /// No PE load callback registered.
    #[error("PE load function not set")]
    MissingPeLoadFn,
    /// Task load callback returned the wrong number of loads.
    #[error("task load function returned {actual} loads, expected {expected}")]
    TaskLoadCount { expected: usize, actual: usize },
    /// PE load callback returned the wrong number of loads.
    #[error("PE load function returned {actual} loads, expected {expected}")]
    PeLoadCount { expected: usize, actual: usize },
    /// Tasks were configured without any PE to run them.
    #[error("{ntasks} tasks configured but no processing elements")]
    NoProcessingElements { ntasks: usize },
    /// The strategy did not assign every task exactly once.
    #[error("strategy produced an invalid mapping: {} problem(s)", .0.len())]
    InvalidMapping(Vec<ValidationError>),
}

type LoadFn<L> = Box<dyn Fn() -> Vec<L> + Send + Sync>;

/// Runtime configuration plus load-query callbacks.
pub struct RuntimeBinding<L> {
    config: RuntimeConfig,
    task_loads: Option<LoadFn<L>>,
    pe_loads: Option<LoadFn<L>>,
}

impl<L: Load> RuntimeBinding<L> {
    /// Creates a binding with no callbacks registered.
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            task_loads: None,
            pe_loads: None,
        }
    }

    /// Registers the callback returning one load per task.
    pub fn with_task_load_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Vec<L> + Send + Sync + 'static,
    {
        self.task_loads = Some(Box::new(f));
        self
    }

    /// Registers the callback returning one load per PE.
    pub fn with_pe_load_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Vec<L> + Send + Sync + 'static,
    {
        self.pe_loads = Some(Box::new(f));
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Queries both callbacks and checks the results against the config.
    pub fn snapshot(&self) -> Result<LoadSnapshot<L>, BindingError> {
        let RuntimeConfig { npes, ntasks, .. } = self.config;
        if ntasks > 0 && npes == 0 {
            return Err(BindingError::NoProcessingElements { ntasks });
        }

        let task_fn = self
            .task_loads
            .as_ref()
            .ok_or(BindingError::MissingTaskLoadFn)?;
        let pe_fn = self.pe_loads.as_ref().ok_or(BindingError::MissingPeLoadFn)?;

        let task_loads = task_fn();
        if task_loads.len() != ntasks {
            return Err(BindingError::TaskLoadCount {
                expected: ntasks,
                actual: task_loads.len(),
            });
        }
        let pe_loads = pe_fn();
        if pe_loads.len() != npes {
            return Err(BindingError::PeLoadCount {
                expected: npes,
                actual: pe_loads.len(),
            });
        }

        Ok(LoadSnapshot::new(task_loads, pe_loads))
    }

    /// Takes a fresh snapshot, runs `strategy` on it and returns the
    /// task-indexed result.
    pub fn rebalance<S>(&self, strategy: &mut S) -> Result<TaskMap, BindingError>
    where
        S: Strategy<LoadSnapshot<L>>,
    {
        let mut input = self.snapshot()?;
        let ntasks = self.config.ntasks;
        let mapping = strategy.map_tasks(&mut input);
        validate_mapping(mapping, ntasks).map_err(BindingError::InvalidMapping)?;
        let task_map = mapping
            .to_task_map(ntasks)
            .ok_or(BindingError::InvalidMapping(Vec::new()))?;
        debug!(
            strategy = strategy.name(),
            chunk_size = self.config.chunk_size,
            "rebalance complete"
        );
        Ok(task_map)
    }
}

impl<L> fmt::Debug for RuntimeBinding<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeBinding")
            .field("config", &self.config)
            .field("task_loads", &self.task_loads.is_some())
            .field("pe_loads", &self.pe_loads.is_some())
            .finish()
    }
}
