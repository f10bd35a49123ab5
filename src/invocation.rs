use crate::config::{BuildType, RunConfiguration, RunnerSettings};
use crate::utils::env::{Environment, non_empty_var};
use std::collections::BTreeMap;
use std::fmt::Display;

pub const EXPERIMENTAL_ENV: &str = "XLA_EXPERIMENTAL";
pub const CREDENTIALS_ENV: &str = "GCLOUD_SERVICE_KEY_FILE";
pub const SILO_ENV: &str = "SILO_NAME";

/// A fully resolved build tool command line plus the variables exported to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub envs: BTreeMap<String, String>,
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.envs {
            write!(f, "{}={} ", key, value)?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Build the `bazel test` command for `config`. Only `GCLOUD_SERVICE_KEY_FILE` and `SILO_NAME` are read from `env`.
pub fn build_invocation(config: &RunConfiguration, settings: &RunnerSettings, env: &Environment) -> CommandSpec {
    let (program, leading) = settings.program();
    let mut args: Vec<String> = leading.to_vec();
    args.push("test".to_string());

    // Unset variables reach the tests as empty values
    args.extend(settings.passthrough_env.iter().map(|name| format!("--test_env={}", name)));

    if config.build_type == BuildType::Dbg {
        args.push(format!("--compilation_mode={}", config.build_type));
    }
    if config.verbose {
        args.push("-s".to_string());
    }

    if config.remote_cache_enabled {
        args.push("--config=remote_cache".to_string());
        if let Some(key_file) = non_empty_var(env, CREDENTIALS_ENV) {
            args.push(format!("--google_credentials={}", key_file));
        }
        if let Some(silo) = non_empty_var(env, SILO_ENV) {
            args.push(format!("--host_platform_remote_properties_override=properties:{{name:\"cache-silo-key\" value:\"{}\"}}", silo));
        }
    }

    args.extend(settings.targets.iter().cloned());

    if let Some(pattern) = &config.filter_pattern {
        args.push(format!("--test_filter={}", pattern));
    }

    let mut envs = BTreeMap::new();
    envs.insert(EXPERIMENTAL_ENV.to_string(), config.experimental_features.clone());

    CommandSpec { program: program.to_string(), args, envs }
}
