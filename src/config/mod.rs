//! JSON configuration for the demo binaries.
pub mod restore;
pub mod synth;
