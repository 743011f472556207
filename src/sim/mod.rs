//! Simulation entry point and policy engines.
//!
//! Drives one scheduling run: selects a policy engine, feeds it an
//! exclusively-owned process set, and returns the execution timeline,
//! the processes with their completion metrics filled in, and aggregate
//! KPIs.
//!
//! # Engines
//!
//! - `round_robin`: preemptive, fixed quantum
//! - `completion`: non-preemptive run-to-completion, shared by the
//!   shortest-remaining, shortest-job, and priority policies
//!
//! # Usage
//!
//! ```
//! use sched_sim::models::Process;
//! use sched_sim::sim::run_simulation;
//!
//! let processes = vec![Process::new("P0", 0, 5), Process::new("P1", 1, 3)];
//! let outcome = run_simulation("roundRobin", processes, Some(2)).unwrap();
//!
//! assert_eq!(outcome.timeline.busy_time(), 8);
//! assert!(outcome.processes.iter().all(|p| p.is_complete()));
//! ```

mod completion;
mod kpi;
mod round_robin;

pub use kpi::SimulationKpi;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Ticks, Timeline};
use crate::policies::{rules, Policy};

/// Why a simulation run could not be performed.
///
/// Scheduling is deterministic: a failed precondition cannot be resolved by
/// retrying with the same input, so every variant is fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The policy name matches no known engine.
    UnknownPolicy(String),
    /// Round robin was selected with an absent or non-positive quantum.
    InvalidQuantum(Option<Ticks>),
    /// No processes were left after the caller's filtering.
    EmptyProcessSet,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnknownPolicy(name) => {
                write!(f, "unknown scheduling policy '{name}'")
            }
            SimulationError::InvalidQuantum(None) => {
                write!(f, "round robin requires a time quantum")
            }
            SimulationError::InvalidQuantum(Some(q)) => {
                write!(f, "invalid time quantum {q}: round robin requires a positive quantum")
            }
            SimulationError::EmptyProcessSet => {
                write!(f, "no processes to schedule")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Everything one run produces: the Gantt timeline, the processes with
/// completion metrics populated, and aggregate KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Ordered execution intervals, ready for rendering.
    pub timeline: Timeline,
    /// The input processes, each with completion, turnaround, and waiting
    /// time filled in.
    pub processes: Vec<Process>,
    /// Aggregate metrics over the whole run.
    pub kpi: SimulationKpi,
}

/// Runs the policy selected by `policy_name` over `processes`.
///
/// The process list must already be filtered to positive burst times (see
/// [`crate::validation::filter_runnable`]); the runner normalizes runtime
/// state but does not re-validate input fields. `quantum` is required and
/// positive for `"roundRobin"`, ignored for the other policies.
pub fn run_simulation(
    policy_name: &str,
    processes: Vec<Process>,
    quantum: Option<Ticks>,
) -> Result<SimulationOutcome, SimulationError> {
    let policy = Policy::from_name(policy_name)
        .ok_or_else(|| SimulationError::UnknownPolicy(policy_name.to_string()))?;
    run_policy(policy, processes, quantum)
}

/// Typed-policy variant of [`run_simulation`].
///
/// Takes ownership of the process list: the run mutates it in place and
/// hands it back in the outcome. Concurrent what-if runs each need their
/// own copy of the input.
pub fn run_policy(
    policy: Policy,
    mut processes: Vec<Process>,
    quantum: Option<Ticks>,
) -> Result<SimulationOutcome, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }

    for process in &mut processes {
        process.reset();
    }

    let timeline = match policy {
        Policy::RoundRobin => {
            let q = quantum
                .filter(|&q| q > 0)
                .ok_or(SimulationError::InvalidQuantum(quantum))?;
            round_robin::simulate(&mut processes, q)
        }
        Policy::ShortestRemaining => {
            completion::simulate(&mut processes, &rules::ShortestRemaining)
        }
        Policy::ShortestJobNext => completion::simulate(&mut processes, &rules::ShortestJob),
        Policy::Priority => completion::simulate(&mut processes, &rules::ByPriority),
    };

    let kpi = SimulationKpi::calculate(&timeline, &processes)?;

    Ok(SimulationOutcome {
        timeline,
        processes,
        kpi,
    })
}
