//! Namelist permutation generator for the baroclinic wave channel test.
//!
//! Every combination of resolution, case, flux scheme and flux-correction
//! flag gets its own directory holding an `init.conf` and a `run.conf`.

pub mod combination;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod namelist;
pub mod params;
pub mod render;
pub mod template;

pub use combination::{all_combinations, Combination, Selection};
pub use config::{AtmosDynType, GenConfig, RunSchedule};
pub use error::{GenError, Result};
pub use generator::{ConfGenerator, GenerationReport, OutputArtifact};
