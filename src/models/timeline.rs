//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered record of CPU dispatches produced by one
//! policy run: one block per contiguous interval a process held the CPU.
//! Blocks never overlap; gaps between blocks are idle CPU time. Adjacent
//! blocks for the same process are kept separate, since round robin
//! legitimately dispatches the same process several times.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Ticks;

/// One contiguous interval during which a single process occupied the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBlock {
    /// Process that held the CPU.
    pub process_id: String,
    /// First tick of the interval (inclusive).
    pub start: Ticks,
    /// End of the interval (exclusive). Always greater than `start`.
    pub end: Ticks,
}

impl GanttBlock {
    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Append-only, time-ordered sequence of Gantt blocks for one run.
///
/// Policy engines append to it during simulation; the caller consumes it as
/// a read-only slice for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    blocks: Vec<GanttBlock>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the dispatch of `process_id` over `[start, end)`.
    pub fn record(&mut self, process_id: impl Into<String>, start: Ticks, end: Ticks) {
        debug_assert!(end > start, "Gantt block must have positive duration");
        debug_assert!(
            self.blocks.last().map_or(true, |b| start >= b.end),
            "Gantt blocks must be appended in time order without overlap"
        );

        self.blocks.push(GanttBlock {
            process_id: process_id.into(),
            start,
            end,
        });
    }

    /// Read-only view of the recorded blocks, in dispatch order.
    pub fn blocks(&self) -> &[GanttBlock] {
        &self.blocks
    }

    /// Number of recorded blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// End of the last block, or 0 for an empty timeline.
    pub fn makespan(&self) -> Ticks {
        self.blocks.last().map_or(0, |b| b.end)
    }

    /// Total CPU time spent executing (sum of block durations). Idle gaps
    /// do not count.
    pub fn busy_time(&self) -> Ticks {
        self.blocks.iter().map(GanttBlock::duration).sum()
    }

    /// Returns all blocks for a given process, in dispatch order.
    pub fn blocks_for(&self, process_id: &str) -> Vec<&GanttBlock> {
        self.blocks
            .iter()
            .filter(|b| b.process_id == process_id)
            .collect()
    }
}
