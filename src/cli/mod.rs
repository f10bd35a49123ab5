mod arguments;

pub use arguments::RunnerArguments;

use crate::config::{BuildType, RunConfiguration};
use crate::error::Result;
use crate::utils::env::{Environment, is_flag_set};
use clap::Parser;
use std::ffi::OsString;

/// Parse `argv` (program name first) into a run configuration.
///
/// `DEBUG=1` in `env` selects the debug variant; `-D` does the same, so the two never conflict.
/// Unknown flags and value-taking flags without a value are rejected before anything runs.
pub fn parse_arguments<I, T>(argv: I, env: &Environment) -> Result<RunConfiguration>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = RunnerArguments::try_parse_from(argv)?;
    Ok(args.into_configuration(env))
}

impl RunnerArguments {
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn into_configuration(self, env: &Environment) -> RunConfiguration {
        let defaults = RunConfiguration::default();
        RunConfiguration {
            build_type: if self.debug || is_flag_set(env, "DEBUG") { BuildType::Dbg } else { BuildType::Opt },
            verbose: self.verbose,
            log_file: if self.no_log_file { None } else { defaults.log_file },
            filter_pattern: self.filter,
            build_only: self.build_only,
            remove_build_dir_after: !self.keep_build_dir,
            experimental_features: self.experimental.unwrap_or(defaults.experimental_features),
            remote_cache_enabled: self.remote_cache,
            settings_path: self.settings_path,
        }
    }
}
