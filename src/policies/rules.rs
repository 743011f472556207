//! Built-in selection rules.
//!
//! All rules return lower keys for processes that should be dispatched
//! first. The run-to-completion engine never executes a process partially
//! before selecting it, so shortest-remaining and shortest-job differ only
//! once a process has been preempted by some other mechanism.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use super::{RuleKey, SelectionRule};
use crate::models::Process;

/// Shortest Remaining Time.
///
/// Ranks by CPU time still owed. Evaluated at completion boundaries only;
/// running processes are not preempted on new arrivals.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.remaining_time as RuleKey
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Shortest Job Next.
///
/// Ranks by total burst time. Minimizes average waiting time on a single
/// CPU when all arrivals are known (Smith, 1956).
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl SelectionRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJN"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.burst_time as RuleKey
    }

    fn description(&self) -> &'static str {
        "Shortest Job Next"
    }
}

/// Priority scheduling.
///
/// Ranks by the caller-assigned priority value, lower value first.
#[derive(Debug, Clone, Copy)]
pub struct ByPriority;

impl SelectionRule for ByPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        RuleKey::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Priority (lower value first)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(id: &str, burst: u64, priority: i32) -> Process {
        Process::new(id, 0, burst).with_priority(priority)
    }

    #[test]
    fn test_shortest_remaining_tracks_remaining() {
        let mut half_done = make_process("half", 10, 0);
        half_done.remaining_time = 3;
        let fresh = make_process("fresh", 5, 0);

        // 3 remaining beats 5 remaining even though the burst is larger.
        assert!(ShortestRemaining.key(&half_done) < ShortestRemaining.key(&fresh));
    }

    #[test]
    fn test_shortest_job_ignores_remaining() {
        let mut half_done = make_process("half", 10, 0);
        half_done.remaining_time = 3;
        let fresh = make_process("fresh", 5, 0);

        assert!(ShortestJob.key(&fresh) < ShortestJob.key(&half_done));
    }

    #[test]
    fn test_by_priority_lower_value_first() {
        let high = make_process("high", 5, 1);
        let low = make_process("low", 5, 8);
        assert!(ByPriority.key(&high) < ByPriority.key(&low));
    }

    #[test]
    fn test_by_priority_negative_values() {
        let negative = make_process("neg", 5, -3);
        let zero = make_process("zero", 5, 0);
        assert!(ByPriority.key(&negative) < ByPriority.key(&zero));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestRemaining.name(), "SRT");
        assert_eq!(ShortestJob.name(), "SJN");
        assert_eq!(ByPriority.name(), "PRIORITY");
        assert_eq!(ByPriority.description(), "Priority (lower value first)");
    }
}
