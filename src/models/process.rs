//! Process model.
//!
//! A process is the unit of work dispatched by a policy engine: it becomes
//! eligible at its arrival time, needs `burst_time` ticks of CPU, and is
//! complete once its remaining time reaches zero.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

use super::Ticks;

/// A process to be scheduled.
///
/// Input fields (`id`, `arrival_time`, `burst_time`, `priority`) come from
/// the caller; the remaining fields are simulation state owned by the policy
/// engine that runs the process. The completion metrics are written exactly
/// once, at the instant `remaining_time` reaches zero.
///
/// # Invariants
/// - `remaining_time <= burst_time`
/// - completion metrics are `Some` iff `remaining_time == 0`
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible for scheduling.
    pub arrival_time: Ticks,
    /// Total CPU time required. Callers filter out zero-burst processes
    /// before simulation.
    pub burst_time: Ticks,
    /// Scheduling priority (lower = dispatched first).
    #[serde(default)]
    pub priority: i32,
    /// CPU time still owed. Initialized to `burst_time`, decremented as the
    /// process executes.
    #[serde(default)]
    pub remaining_time: Ticks,
    /// Tick at which the process finished. `None` until completion.
    #[serde(default)]
    pub completion_time: Option<Ticks>,
    /// Completion minus arrival. `None` until completion.
    #[serde(default)]
    pub turnaround_time: Option<Ticks>,
    /// Turnaround minus burst (time spent ready but not running).
    #[serde(default)]
    pub waiting_time: Option<Ticks>,
}

impl Process {
    /// Creates a process with the full burst still owed.
    pub fn new(id: impl Into<String>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Sets the scheduling priority (lower = dispatched first).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Re-arms the process for a fresh run: restores the full burst and
    /// clears any completion metrics from a previous run.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = None;
        self.turnaround_time = None;
        self.waiting_time = None;
    }

    /// Records completion at `now`, deriving turnaround and waiting time.
    ///
    /// Must be called exactly once per run, when the last tick of work has
    /// been consumed.
    pub fn complete_at(&mut self, now: Ticks) {
        debug_assert_eq!(
            self.remaining_time, 0,
            "process '{}' completed with work left",
            self.id
        );
        debug_assert!(
            self.completion_time.is_none(),
            "completion recorded twice for process '{}'",
            self.id
        );

        let turnaround = now - self.arrival_time;
        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    /// Whether the process has consumed its full burst.
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0 && self.completion_time.is_some()
    }

    /// Whether the process is eligible to run at `now`.
    pub fn is_ready(&self, now: Ticks) -> bool {
        self.arrival_time <= now && self.remaining_time > 0
    }
}
