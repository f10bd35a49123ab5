use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    /// Malformed or missing flag value. Carries clap's rendered usage.
    #[error(transparent)]
    Parse(#[from] clap::Error),

    #[error("invalid settings file {}: {reason}", path.display())]
    Settings { path: PathBuf, reason: String },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    /// Exit code this process reports for the error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::Parse(e) => e.exit_code(),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_spawn_error_names_program() {
        let err = RunnerError::Spawn { program: "bazel".to_string(), source: io::Error::new(io::ErrorKind::NotFound, "not found") };
        assert_eq!(err.to_string(), "failed to start bazel: not found");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_settings_error_message() {
        let err = RunnerError::Settings { path: PathBuf::from("/tmp/runner.json"), reason: "expected value".to_string() };
        assert_eq!(err.to_string(), "invalid settings file /tmp/runner.json: expected value");
    }
}
