//! Random workload generation.
//!
//! Produces valid process sets for what-if simulations and tests. Every
//! generated process has a positive burst time, so the output feeds the
//! runner without further filtering. A seeded RNG makes workloads
//! reproducible.
//!
//! # Usage
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use sched_sim::workload::{generate, WorkloadSpec};
//!
//! let spec = WorkloadSpec::new(8).with_max_arrival(20).with_max_burst(10);
//! let mut rng = StdRng::seed_from_u64(42);
//! let processes = generate(&spec, &mut rng);
//!
//! assert_eq!(processes.len(), 8);
//! assert!(processes.iter().all(|p| p.burst_time >= 1));
//! ```

use rand::Rng;

use crate::models::{Process, Ticks};

/// Shape of a generated workload.
#[derive(Debug, Clone)]
pub struct WorkloadSpec {
    /// Number of processes to generate.
    pub count: usize,
    /// Arrivals are drawn uniformly from `0..=max_arrival`.
    pub max_arrival: Ticks,
    /// Bursts are drawn uniformly from `1..=max_burst`.
    pub max_burst: Ticks,
    /// Priorities are drawn uniformly from `0..=max_priority`.
    pub max_priority: i32,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with modest default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest possible arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest possible burst. Clamped to at least 1.
    pub fn with_max_burst(mut self, max_burst: Ticks) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest possible priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }
}

/// Generates a process set matching `spec`. IDs are `P0..P{count-1}`.
pub fn generate<R: Rng>(spec: &WorkloadSpec, rng: &mut R) -> Vec<Process> {
    (0..spec.count)
        .map(|i| {
            let arrival = rng.random_range(0..=spec.max_arrival);
            let burst = rng.random_range(1..=spec.max_burst);
            let priority = rng.random_range(0..=spec.max_priority);
            Process::new(format!("P{i}"), arrival, burst).with_priority(priority)
        })
        .collect()
}
