pub mod cli;
pub mod config;
pub mod error;
pub mod invocation;
pub mod runner;
pub mod utils;

pub use cli::parse_arguments;
pub use config::{BuildType, RunConfiguration, RunnerSettings};
pub use error::RunnerError;
pub use invocation::{CommandSpec, build_invocation};
pub use runner::execute;
