//! Run configuration.

use std::path::PathBuf;

/// Default location of the route database.
pub const DEFAULT_ROUTES_PATH: &str = "routes.yaml";

/// Default location searched for schedules.
pub const DEFAULT_SCHEDULES_PATH: &str = "schedules";

/// How findings are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `WARNING! ...` lines for people
    #[default]
    Text,
    /// One JSON object per line for tools
    Json,
}

/// Whether warnings alone make a run fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningsPolicy {
    /// Any warning gives a failing exit status
    #[default]
    Fail,
    /// Warnings are reported but the run still succeeds
    Allow,
}

/// Configuration for one checker run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Route database file.
    pub routes: PathBuf,

    /// Schedule files and directories to check.
    pub schedules: Vec<PathBuf>,

    pub format: OutputFormat,

    pub warnings: WarningsPolicy,
}

impl CheckConfig {
    /// Create a configuration for the given route database and schedule paths.
    pub fn new(routes: impl Into<PathBuf>, schedules: Vec<PathBuf>) -> Self {
        Self {
            routes: routes.into(),
            schedules,
            ..Self::default()
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the warnings policy.
    pub fn with_warnings(mut self, warnings: WarningsPolicy) -> Self {
        self.warnings = warnings;
        self
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            routes: PathBuf::from(DEFAULT_ROUTES_PATH),
            schedules: vec![PathBuf::from(DEFAULT_SCHEDULES_PATH)],
            format: OutputFormat::default(),
            warnings: WarningsPolicy::default(),
        }
    }
}
