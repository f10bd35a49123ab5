use std::fmt::Display;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "/tmp/pytorch_cpp_test.log";
pub const DEFAULT_EXPERIMENTAL_FEATURES: &str = "nonzero:masked_select";

/// Build variant handed to the build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    #[default]
    Opt,
    Dbg,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Opt => "opt",
            BuildType::Dbg => "dbg",
        }
    }
}

impl Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved settings for a single test run. Built once from the command line and consumed by the invocation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    pub build_type: BuildType,
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
    pub filter_pattern: Option<String>,
    pub build_only: bool,
    // Cleanup happens in the calling wrapper; only carried here.
    pub remove_build_dir_after: bool,
    pub experimental_features: String,
    pub remote_cache_enabled: bool,
    pub settings_path: Option<PathBuf>,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            build_type: BuildType::Opt,
            verbose: false,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            filter_pattern: None,
            build_only: false,
            remove_build_dir_after: true,
            experimental_features: DEFAULT_EXPERIMENTAL_FEATURES.to_string(),
            remote_cache_enabled: false,
            settings_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = RunConfiguration::default();
        assert_eq!(config.build_type, BuildType::Opt);
        assert!(!config.verbose);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/pytorch_cpp_test.log")));
        assert_eq!(config.filter_pattern, None);
        assert!(!config.build_only);
        assert!(config.remove_build_dir_after);
        assert_eq!(config.experimental_features, "nonzero:masked_select");
        assert!(!config.remote_cache_enabled);
        assert_eq!(config.settings_path, None);
    }

    #[test]
    fn test_build_type_display() {
        assert_eq!(BuildType::Opt.to_string(), "opt");
        assert_eq!(BuildType::Dbg.to_string(), "dbg");
    }
}
