//! Simulation domain models.
//!
//! Provides the core data types for describing scheduling workloads and
//! their simulated execution.
//!
//! # Domain Mappings
//!
//! | sched-sim | OS textbook | Queueing theory |
//! |-----------|-------------|-----------------|
//! | Process | Process / PCB | Customer |
//! | GanttBlock | CPU dispatch interval | Service interval |
//! | Timeline | Gantt chart | Sample path |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{GanttBlock, Timeline};

/// Logical simulation time unit. All clocks, durations, and quanta count
/// whole ticks; what a tick means (ms, cycles) is up to the consumer.
pub type Ticks = u64;
