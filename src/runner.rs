use crate::config::RunConfiguration;
use crate::error::{Result, RunnerError};
use crate::invocation::CommandSpec;
use log::{debug, info, warn};
use std::fs::File;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Run the build tool once and report the exit code this process should use.
///
/// Build-only runs return 0 without spawning anything. When a log file is configured the child's
/// stderr is written to it (truncating any previous run); stdout is always inherited.
pub async fn execute(spec: &CommandSpec, config: &RunConfiguration) -> Result<i32> {
    if config.build_only {
        info!("Build only, skipping the test run");
        return Ok(0);
    }
    debug!("Remove build directory after run: {}", config.remove_build_dir_after);
    debug!("Running: {}", spec);

    let mut command = Command::new(&spec.program);
    command.args(&spec.args).envs(&spec.envs).stdin(Stdio::inherit()).stdout(Stdio::inherit());

    match &config.log_file {
        Some(path) => {
            let log_file = File::create(path).map_err(|source| RunnerError::LogFile { path: path.clone(), source })?;
            info!("Writing test stderr to {}", path.display());
            command.stderr(Stdio::from(log_file));
        }
        None => {
            command.stderr(Stdio::inherit());
        }
    }

    let status = command.status().await.map_err(|source| RunnerError::Spawn { program: spec.program.clone(), source })?;
    let code = exit_code(status);
    if code == 0 {
        info!("Test run finished successfully");
    } else {
        warn!("Test run failed with exit code {}", code);
    }
    Ok(code)
}

/// Map a child's status to a shell-style exit code (128 + signal when killed).
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
