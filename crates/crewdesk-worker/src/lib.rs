//! # crewdesk-worker
//!
//! Scheduled background work: the approaching- and reached-deadline
//! sweeps and the retention cleanup, driven by a cron scheduler.

pub mod scheduler;

pub use scheduler::SweepScheduler;
