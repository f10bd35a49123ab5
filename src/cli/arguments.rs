use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "run_cpp_tests",
    about = "Build and run the XLA client and C++ test suites with bazel",
    long_about = None,
    version,
    // -V is taken by verbose, so only the long form prints the version
    disable_version_flag = true,
    args_override_self = true
)]
pub struct RunnerArguments {
    #[arg(short = 'V', help = "Verbose build output")]
    pub(crate) verbose: bool,
    #[arg(short = 'L', help = "Do not redirect the test run's stderr into the log file")]
    pub(crate) no_log_file: bool,
    #[arg(short = 'D', help = "Use the debug build variant (also selected by DEBUG=1)")]
    pub(crate) debug: bool,
    #[arg(short = 'K', help = "Keep the build directory after the run")]
    pub(crate) keep_build_dir: bool,
    #[arg(short = 'B', help = "Build only, do not run the tests")]
    pub(crate) build_only: bool,
    #[arg(short = 'F', value_name = "PATTERN", help = "Only run tests matching the filter pattern")]
    pub(crate) filter: Option<String>,
    #[arg(short = 'X', value_name = "FEATURES", help = "Colon separated experimental feature list (default: nonzero:masked_select)")]
    pub(crate) experimental: Option<String>,
    #[arg(short = 'R', help = "Use the remote build cache")]
    pub(crate) remote_cache: bool,
    #[arg(short = 'c', long = "config", value_name = "PATH", help = "Path to a JSON settings file")]
    pub(crate) settings_path: Option<PathBuf>,
    #[allow(dead_code)]
    #[arg(long = "version", action = ArgAction::Version, help = "Print version")]
    pub(crate) version: Option<bool>,
}
