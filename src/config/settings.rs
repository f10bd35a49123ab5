use crate::error::{Result, RunnerError};
use log::{debug, trace, warn};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Tool-level settings that rarely change between runs, optionally read from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunnerSettings {
    // Program followed by any leading arguments, e.g. ["bazelisk"] or ["tools/bazel", "--bazelrc=ci.bazelrc"]
    #[serde(deserialize_with = "build_command_or_default", default = "default_build_command")]
    pub build_command: Vec<String>,
    #[serde(deserialize_with = "targets_or_default", default = "default_targets")]
    pub targets: Vec<String>,
    // Forwarded to the tests even when unset here
    #[serde(deserialize_with = "passthrough_env_or_default", default = "default_passthrough_env")]
    pub passthrough_env: Vec<String>,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            build_command: default_build_command(),
            targets: default_targets(),
            passthrough_env: default_passthrough_env(),
        }
    }
}

impl RunnerSettings {
    /// Load settings from `path`, or the built-in defaults when no path was given.
    pub fn try_load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            trace!("No settings file given, using defaults");
            return Ok(Self::default());
        };
        debug!("Loading settings from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| RunnerError::Settings { path: path.to_owned(), reason: e.to_string() })?;
        let mut settings = serde_json::from_str::<RunnerSettings>(&content)
            .map_err(|e| RunnerError::Settings { path: path.to_owned(), reason: e.to_string() })?;
        if settings.build_command.is_empty() {
            warn!("Empty build_command in {}, using bazel", path.display());
            settings.build_command = default_build_command();
        }
        if settings.targets.is_empty() {
            warn!("No targets in {}, using the default test suites", path.display());
            settings.targets = default_targets();
        }
        trace!("Loaded settings: {:#?}", settings);
        Ok(settings)
    }

    /// Program to spawn and the arguments that precede the build verb.
    pub fn program(&self) -> (&str, &[String]) {
        match self.build_command.split_first() {
            Some((program, rest)) => (program.as_str(), rest),
            None => ("bazel", &[]),
        }
    }
}

fn default_build_command() -> Vec<String> {
    vec!["bazel".to_string()]
}

fn default_targets() -> Vec<String> {
    vec!["//third_party/xla_client:all".to_string(), "//test/cpp:all".to_string()]
}

fn default_passthrough_env() -> Vec<String> {
    ["XRT_DEVICE_MAP", "XRT_WORKERS", "XRT_TPU_CONFIG", "GPU_NUM_DEVICES"].iter().map(|s| s.to_string()).collect()
}

// Forgiving list: anything that isn't an array of strings falls back to the field's default.
fn strings_or<'de, D>(deserializer: D, field: &str, fallback: fn() -> Vec<String>) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Vec::<String>::deserialize(deserializer) {
        Ok(v) => Ok(v),
        Err(e) => {
            warn!("Failed to deserialize {}: {}, using default", field, e);
            Ok(fallback())
        }
    }
}

fn build_command_or_default<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    strings_or(deserializer, "build_command", default_build_command)
}

fn targets_or_default<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    strings_or(deserializer, "targets", default_targets)
}

fn passthrough_env_or_default<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    strings_or(deserializer, "passthrough_env", default_passthrough_env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_path() {
        let settings = RunnerSettings::try_load(None).unwrap();
        assert_eq!(settings, RunnerSettings::default());
        assert_eq!(settings.targets, vec!["//third_party/xla_client:all", "//test/cpp:all"]);
        assert_eq!(settings.passthrough_env.len(), 4);
        assert_eq!(settings.program().0, "bazel");
    }

    #[test]
    fn test_load_partial_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(&file, r#"{"build_command": ["bazelisk", "--bazelrc=ci.bazelrc"]}"#).unwrap();

        let settings = RunnerSettings::try_load(Some(file.path())).unwrap();
        let (program, leading) = settings.program();
        assert_eq!(program, "bazelisk");
        assert_eq!(leading, ["--bazelrc=ci.bazelrc".to_string()]);
        assert_eq!(settings.targets, default_targets());
    }

    #[test]
    fn test_empty_lists_fall_back() {
        let file = NamedTempFile::new().unwrap();
        fs::write(&file, r#"{"build_command": [], "targets": [], "passthrough_env": []}"#).unwrap();

        let settings = RunnerSettings::try_load(Some(file.path())).unwrap();
        assert_eq!(settings.build_command, vec!["bazel"]);
        assert_eq!(settings.targets, default_targets());
        assert!(settings.passthrough_env.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_forgiven() {
        let file = NamedTempFile::new().unwrap();
        fs::write(&file, r#"{"build_command": 42, "passthrough_env": ["PJRT_DEVICE"]}"#).unwrap();

        let settings = RunnerSettings::try_load(Some(file.path())).unwrap();
        assert_eq!(settings.build_command, vec!["bazel"]);
        assert_eq!(settings.passthrough_env, vec!["PJRT_DEVICE"]);
    }

    #[test]
    fn test_wrong_passthrough_type_keeps_default_variables() {
        let file = NamedTempFile::new().unwrap();
        fs::write(&file, r#"{"passthrough_env": "XRT_WORKERS", "targets": 7}"#).unwrap();

        let settings = RunnerSettings::try_load(Some(file.path())).unwrap();
        assert_eq!(settings.passthrough_env, vec!["XRT_DEVICE_MAP", "XRT_WORKERS", "XRT_TPU_CONFIG", "GPU_NUM_DEVICES"]);
        assert_eq!(settings.targets, default_targets());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        fs::write(&file, "{ not json").unwrap();

        let err = RunnerSettings::try_load(Some(file.path())).unwrap_err();
        assert!(matches!(err, RunnerError::Settings { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = RunnerSettings::try_load(Some(Path::new("/nonexistent/runner.json"))).unwrap_err();
        assert!(matches!(err, RunnerError::Settings { .. }));
    }
}
