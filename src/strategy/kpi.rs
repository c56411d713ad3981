//! Balance quality metrics (KPIs).
//!
//! Computed from PE loads after a strategy call.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Largest PE load |
//! | Min load | Smallest PE load |
//! | Total load | Sum of PE loads |
//! | Imbalance | Makespan / mean PE load |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 5: Parallel Machine Models

use serde::{Deserialize, Serialize};

use crate::models::{InputAdaptor, Load};

/// Load distribution summary over all PEs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceKpi<L> {
    /// Largest PE load.
    pub makespan: L,
    /// Smallest PE load.
    pub min_load: L,
    /// Sum of all PE loads.
    pub total_load: L,
    /// Number of PEs measured.
    pub npes: usize,
}

impl<L: Load> BalanceKpi<L> {
    /// Computes KPIs from the current PE loads of `input`.
    ///
    /// With no PEs every load metric is zero.
    pub fn calculate<I>(input: &I) -> Self
    where
        I: InputAdaptor<Load = L>,
    {
        let npes = input.npes();
        let mut loads = (0..npes).map(|pe| input.pe_load(pe));
        let Some(first) = loads.next() else {
            return Self {
                makespan: L::default(),
                min_load: L::default(),
                total_load: L::default(),
                npes: 0,
            };
        };

        let (mut makespan, mut min_load, mut total_load) = (first, first, first);
        for load in loads {
            if load > makespan {
                makespan = load;
            }
            if load < min_load {
                min_load = load;
            }
            total_load = total_load + load;
        }

        Self {
            makespan,
            min_load,
            total_load,
            npes,
        }
    }
}

impl<L: Copy + Into<f64>> BalanceKpi<L> {
    /// Makespan over mean load. `1.0` is perfect balance.
    ///
    /// Returns `1.0` when there are no PEs or the mean load is zero.
    pub fn imbalance(&self) -> f64 {
        if self.npes == 0 {
            return 1.0;
        }
        let mean = self.total_load.into() / self.npes as f64;
        if mean == 0.0 {
            1.0
        } else {
            self.makespan.into() / mean
        }
    }

    /// Whether the imbalance is at most `max_imbalance`.
    pub fn meets_threshold(&self, max_imbalance: f64) -> bool {
        self.imbalance() <= max_imbalance
    }
}
