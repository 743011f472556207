//! Scheduling policies and selection rules.
//!
//! Provides the closed set of simulated policies and the selection rules
//! used by the non-preemptive run-to-completion family.
//!
//! # Usage
//!
//! ```
//! use sched_sim::policies::Policy;
//!
//! let policy = Policy::from_name("sjn").unwrap();
//! assert_eq!(policy, Policy::ShortestJobNext);
//! assert!(!policy.requires_quantum());
//! assert!(Policy::from_name("bubbleSort").is_none());
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod rules;

use std::fmt;

use crate::models::Process;

/// Key returned by a selection rule.
///
/// Lower keys = dispatched first. This follows the convention where
/// shortest-job-first selects the smallest burst.
pub type RuleKey = i64;

/// A selection rule that ranks ready processes for dispatch.
///
/// # Key Convention
/// **Lower key = dispatched first.** Rules return smaller values for
/// processes that should get the CPU next. Ties are broken by input order.
pub trait SelectionRule: Send + Sync + fmt::Debug {
    /// Rule name (e.g., "SRT", "SJN").
    fn name(&self) -> &'static str;

    /// Ranks a process for dispatch; lower = sooner.
    fn key(&self, process: &Process) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The closed set of scheduling policies the simulator implements.
///
/// Dispatch goes through this enum rather than free-form strings, so an
/// unrecognized policy name is a typed error at the simulation boundary
/// instead of a lookup failure mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Preemptive round robin with a fixed quantum.
    RoundRobin,
    /// Shortest remaining time, re-evaluated at completion boundaries only.
    ShortestRemaining,
    /// Shortest job next (non-preemptive).
    ShortestJobNext,
    /// Priority scheduling, lower value first (non-preemptive).
    Priority,
}

impl Policy {
    /// Every supported policy, in display order.
    pub const ALL: [Policy; 4] = [
        Policy::RoundRobin,
        Policy::ShortestRemaining,
        Policy::ShortestJobNext,
        Policy::Priority,
    ];

    /// Resolves a caller-facing policy name. Returns `None` for names
    /// outside the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "roundRobin" => Some(Policy::RoundRobin),
            "srt" => Some(Policy::ShortestRemaining),
            "sjn" => Some(Policy::ShortestJobNext),
            "priority" => Some(Policy::Priority),
            _ => None,
        }
    }

    /// The caller-facing name this policy is selected by.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::RoundRobin => "roundRobin",
            Policy::ShortestRemaining => "srt",
            Policy::ShortestJobNext => "sjn",
            Policy::Priority => "priority",
        }
    }

    /// Whether the policy needs a positive time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        for policy in Policy::ALL {
            assert_eq!(Policy::from_name(policy.name()), Some(policy));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Policy::from_name("bubbleSort"), None);
        assert_eq!(Policy::from_name(""), None);
        // Names are case-sensitive.
        assert_eq!(Policy::from_name("RoundRobin"), None);
    }

    #[test]
    fn test_requires_quantum() {
        assert!(Policy::RoundRobin.requires_quantum());
        assert!(!Policy::ShortestRemaining.requires_quantum());
        assert!(!Policy::ShortestJobNext.requires_quantum());
        assert!(!Policy::Priority.requires_quantum());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Policy::RoundRobin.to_string(), "roundRobin");
        assert_eq!(Policy::Priority.to_string(), "priority");
    }
}
