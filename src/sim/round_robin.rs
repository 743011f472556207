//! Preemptive round robin engine.
//!
//! # Algorithm
//!
//! 1. Admit every arrived, unfinished, not-yet-queued process to the back
//!    of a FIFO ready queue (ascending arrival order, input order on ties).
//! 2. If the queue is empty, advance the clock one tick (idle CPU waiting
//!    for the next arrival) and retry.
//! 3. Otherwise dispatch the front process for `min(quantum, remaining)`
//!    ticks and record the Gantt block.
//! 4. A finished process gets its metrics at the current clock; a preempted
//!    one re-enters the queue behind everything that arrived during its
//!    slice.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use crate::models::{Process, Ticks, Timeline};

/// Runs round robin over `processes`, mutating them in place and returning
/// the execution timeline. `quantum` must be positive; the simulation entry
/// point rejects anything else before we get here.
pub(super) fn simulate(processes: &mut [Process], quantum: Ticks) -> Timeline {
    debug_assert!(quantum > 0, "round robin needs a positive quantum");

    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    // Index i is true while process i sits in the queue or holds the CPU.
    let mut queued = vec![false; processes.len()];
    let mut pending = processes.iter().filter(|p| p.remaining_time > 0).count();
    let mut now: Ticks = 0;

    while pending > 0 {
        admit(processes, now, &mut queue, &mut queued);

        let Some(idx) = queue.pop_front() else {
            // Nothing runnable yet: idle until the next arrival. This is
            // the only place the clock advances without execution.
            now += 1;
            continue;
        };

        let exec = quantum.min(processes[idx].remaining_time);
        timeline.record(processes[idx].id.clone(), now, now + exec);
        now += exec;
        processes[idx].remaining_time -= exec;

        if processes[idx].remaining_time == 0 {
            processes[idx].complete_at(now);
            queued[idx] = false;
            pending -= 1;
        } else {
            // Anything that arrived during the slice queues ahead of the
            // preempted process.
            admit(processes, now, &mut queue, &mut queued);
            queue.push_back(idx);
        }
    }

    timeline
}

/// Appends every arrived, unfinished, unqueued process to the ready queue,
/// ordered by arrival time with input order breaking ties.
fn admit(processes: &[Process], now: Ticks, queue: &mut VecDeque<usize>, queued: &mut [bool]) {
    let mut arrivals: Vec<usize> = (0..processes.len())
        .filter(|&i| !queued[i] && processes[i].is_ready(now))
        .collect();
    arrivals.sort_by_key(|&i| processes[i].arrival_time);

    for i in arrivals {
        queued[i] = true;
        queue.push_back(i);
    }
}
