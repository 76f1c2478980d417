//! Diagnostics data model returned alongside restored images.
//!
//! `RestoreReport` records the reference colour, detected regions, sampled
//! edge colours, residual-fill counts, any degradations and per-stage
//! timings. It serialises to camelCase JSON for the demo tools.

pub mod restore;
pub mod timing;

pub use restore::{InputDescriptor, RestoreReport, RestoreStatus};
pub use timing::{StageTiming, TimingBreakdown};
