//! Poll loop and the policy deciding when it fetches

pub mod poll_loop;
pub mod refresh_policy;

pub use poll_loop::{CycleOutcome, ScoreboardExporter};
pub use refresh_policy::{needs_refresh, needs_refresh_at};
