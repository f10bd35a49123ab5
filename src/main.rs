use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, error, trace};
use std::process;
use xla_cpp_test_runner::cli::RunnerArguments;
use xla_cpp_test_runner::utils::env::{Environment, capture_environment};
use xla_cpp_test_runner::{RunConfiguration, RunnerError, RunnerSettings, build_invocation, execute};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Prints usage, help or version and exits with clap's code
    let args = RunnerArguments::try_parse().unwrap_or_else(|e| e.exit());

    pretty_env_logger::env_logger::builder()
        .format_timestamp(None)
        .filter_level(if args.is_verbose() { LevelFilter::Trace } else { LevelFilter::Info })
        .parse_default_env()
        .init();

    let env = capture_environment();
    let config = args.into_configuration(&env);
    trace!("Configuration: {:#?}", config);

    match run(&config, &env).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{e:#}");
            process::exit(e.downcast_ref::<RunnerError>().map_or(1, RunnerError::exit_code));
        }
    }
}

async fn run(config: &RunConfiguration, env: &Environment) -> Result<i32> {
    let settings = RunnerSettings::try_load(config.settings_path.as_deref()).context("Failed to load runner settings")?;
    let spec = build_invocation(config, &settings, env);
    let code = execute(&spec, config).await.with_context(|| format!("Failed to run {}", spec.program))?;
    Ok(code)
}
