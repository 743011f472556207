//! Run-level performance metrics (KPIs).
//!
//! Computes aggregate scheduling metrics from a completed run's timeline
//! and process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival), two decimals |
//! | Avg Waiting | mean(turnaround - burst), two decimals |
//! | Makespan | End of the last Gantt block |
//! | CPU Utilization | busy time / makespan (0.0..1.0) |
//! | Throughput | completed processes per tick of makespan |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::SimulationError;
use crate::models::{Process, Ticks, Timeline};

/// Aggregate metrics for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Mean turnaround time, rounded to two decimal places.
    pub average_turnaround: f64,
    /// Mean waiting time, rounded to two decimal places.
    pub average_waiting: f64,
    /// End of the last Gantt block (0 for an empty timeline).
    pub makespan: Ticks,
    /// Fraction of `[0, makespan)` the CPU spent executing.
    pub cpu_utilization: f64,
    /// Completed processes per tick of makespan.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished run.
    ///
    /// Fails with [`SimulationError::EmptyProcessSet`] when `processes` is
    /// empty: averaging over zero processes is an input error, not a NaN.
    pub fn calculate(
        timeline: &Timeline,
        processes: &[Process],
    ) -> Result<Self, SimulationError> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyProcessSet);
        }

        let count = processes.len() as f64;
        let total_turnaround: Ticks = processes.iter().filter_map(|p| p.turnaround_time).sum();
        let total_waiting: Ticks = processes.iter().filter_map(|p| p.waiting_time).sum();
        let completed = processes.iter().filter(|p| p.is_complete()).count();

        let makespan = timeline.makespan();
        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                timeline.busy_time() as f64 / makespan as f64,
                completed as f64 / makespan as f64,
            )
        };

        Ok(Self {
            average_turnaround: round2(total_turnaround as f64 / count),
            average_waiting: round2(total_waiting as f64 / count),
            makespan,
            cpu_utilization,
            throughput,
        })
    }
}

/// Rounds to two decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_process(id: &str, arrival: Ticks, burst: Ticks, completion: Ticks) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.remaining_time = 0;
        p.complete_at(completion);
        p
    }

    #[test]
    fn test_kpi_basic() {
        let mut timeline = Timeline::new();
        timeline.record("P0", 0, 3);
        timeline.record("P1", 3, 5);
        let processes = vec![
            completed_process("P0", 0, 3, 3), // turnaround 3, waiting 0
            completed_process("P1", 1, 2, 5), // turnaround 4, waiting 2
        ];

        let kpi = SimulationKpi::calculate(&timeline, &processes).unwrap();
        assert!((kpi.average_turnaround - 3.5).abs() < 1e-10);
        assert!((kpi.average_waiting - 1.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 5);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_rounds_to_two_decimals() {
        let mut timeline = Timeline::new();
        timeline.record("P0", 0, 1);
        timeline.record("P1", 1, 2);
        timeline.record("P2", 2, 3);
        let processes = vec![
            completed_process("P0", 0, 1, 1), // turnaround 1
            completed_process("P1", 0, 1, 2), // turnaround 2
            completed_process("P2", 0, 1, 3), // turnaround 3
        ];

        let kpi = SimulationKpi::calculate(&timeline, &processes).unwrap();
        // 6 / 3 = 2.0 exactly; 3 / 3 = 1.0 waiting
        assert_eq!(kpi.average_turnaround, 2.0);
        // (0 + 1 + 2) / 3 = 1.0
        assert_eq!(kpi.average_waiting, 1.0);

        let uneven = vec![
            completed_process("A", 0, 1, 1), // turnaround 1
            completed_process("B", 0, 1, 2), // turnaround 2
            completed_process("C", 0, 2, 4), // turnaround 4
        ];
        let kpi = SimulationKpi::calculate(&timeline, &uneven).unwrap();
        // 7 / 3 = 2.333... → 2.33
        assert_eq!(kpi.average_turnaround, 2.33);
    }

    #[test]
    fn test_kpi_empty_process_set() {
        let timeline = Timeline::new();
        assert_eq!(
            SimulationKpi::calculate(&timeline, &[]),
            Err(SimulationError::EmptyProcessSet)
        );
    }

    #[test]
    fn test_kpi_utilization_with_idle_gap() {
        let mut timeline = Timeline::new();
        timeline.record("P0", 0, 2);
        timeline.record("P1", 6, 8); // idle over [2, 6)
        let processes = vec![
            completed_process("P0", 0, 2, 2),
            completed_process("P1", 6, 2, 8),
        ];

        let kpi = SimulationKpi::calculate(&timeline, &processes).unwrap();
        assert_eq!(kpi.makespan, 8);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_timeline_guards_division() {
        // A process set with an empty timeline must not produce NaN.
        let processes = vec![Process::new("P0", 0, 1)];
        let kpi = SimulationKpi::calculate(&Timeline::new(), &processes).unwrap();
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.cpu_utilization, 0.0);
        assert_eq!(kpi.throughput, 0.0);
    }
}
