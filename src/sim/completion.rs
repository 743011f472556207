//! Non-preemptive run-to-completion engine.
//!
//! One engine serves shortest-remaining, shortest-job, and priority
//! scheduling; the policies differ only in the [`SelectionRule`] ranking
//! the ready set. The selected process always runs its full remaining time
//! in a single block: new arrivals never preempt it, and the ready set is
//! re-ranked only at completion boundaries.
//!
//! # Algorithm
//!
//! 1. Among arrived processes with work left, pick the smallest rule key;
//!    the first process in input order wins ties.
//! 2. No eligible process: advance the clock one tick (idle CPU bridging
//!    the gap to the next arrival) and retry.
//! 3. Run the pick to completion, record one Gantt block spanning its
//!    remaining time, and set its metrics at the new clock.

use crate::models::{Process, Ticks, Timeline};
use crate::policies::SelectionRule;

/// Runs the non-preemptive policy described by `rule` over `processes`,
/// mutating them in place and returning the execution timeline.
pub(super) fn simulate<R: SelectionRule + ?Sized>(
    processes: &mut [Process],
    rule: &R,
) -> Timeline {
    let mut timeline = Timeline::new();
    let mut pending = processes.iter().filter(|p| p.remaining_time > 0).count();
    let mut now: Ticks = 0;

    while pending > 0 {
        let Some(idx) = select(processes, now, rule) else {
            now += 1;
            continue;
        };

        let run = processes[idx].remaining_time;
        timeline.record(processes[idx].id.clone(), now, now + run);
        now += run;
        processes[idx].remaining_time = 0;
        processes[idx].complete_at(now);
        pending -= 1;
    }

    timeline
}

/// Index of the ready process with the smallest rule key, or `None` when
/// nothing has arrived. A strictly-less comparison keeps the first process
/// in input order on ties.
fn select<R: SelectionRule + ?Sized>(
    processes: &[Process],
    now: Ticks,
    rule: &R,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, process) in processes.iter().enumerate() {
        if !process.is_ready(now) {
            continue;
        }
        let better = match best {
            None => true,
            Some(b) => rule.key(process) < rule.key(&processes[b]),
        };
        if better {
            best = Some(i);
        }
    }
    best
}
