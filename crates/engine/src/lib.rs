//! Fixed-timestep scheduler.
//!
//! Drives the loop at a fixed logical rate on a monotonic clock. The schedule
//! is accumulator-based: each tick advances the deadline by exactly one
//! period instead of rescheduling from "now", so tick times form a drift-free
//! arithmetic sequence. All schedule arithmetic takes `Instant` parameters,
//! which keeps it testable without ever sleeping.

pub mod fixed_step;

pub use tui_cube_types as types;

pub use fixed_step::FixedStep;
