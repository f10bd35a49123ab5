// Configuration module
//
// - types: the per-run configuration resolved from the command line
// - settings: tool-level settings loaded from an optional JSON file

pub mod settings;
pub mod types;

pub use settings::RunnerSettings;
pub use types::{BuildType, RunConfiguration};
