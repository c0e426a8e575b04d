//! Shared utilities.
//!
//! Frame pacing for host event loops.

pub mod frame_timing;
