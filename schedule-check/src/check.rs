//! Whole-run driver: load routes, find schedules, validate, report.

use std::io;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{CheckConfig, WarningsPolicy};
use crate::discover::{DiscoverError, schedule_paths};
use crate::report::Reporter;
use crate::routes::{RouteDbError, RouteIdSet};
use crate::schedule::{load_schedule, validate_schedule};

/// Errors that abort a run before all schedules are checked.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Routes(#[from] RouteDbError),

    #[error(transparent)]
    Discover(#[from] DiscoverError),

    /// The report could not be written
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Overall result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No findings
    Clean,
    /// Findings, but every schedule was checked
    Warnings,
    /// At least one schedule could not be loaded
    Errors,
}

/// Counts accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Schedules that were loaded and validated.
    pub schedules_checked: usize,
    /// Diagnostics reported across all schedules.
    pub warnings: usize,
    /// Schedules that could not be read or parsed.
    pub load_failures: usize,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Clean => "clean",
            Status::Warnings => "warnings",
            Status::Errors => "errors",
        }
    }
}

impl CheckSummary {
    pub fn status(&self) -> Status {
        if self.load_failures > 0 {
            Status::Errors
        } else if self.warnings > 0 {
            Status::Warnings
        } else {
            Status::Clean
        }
    }

    /// Process exit code for this run under a warnings policy.
    ///
    /// 0 for success, 1 for warnings under [`WarningsPolicy::Fail`], 2 when
    /// a schedule could not be loaded.
    pub fn exit_code(&self, policy: WarningsPolicy) -> u8 {
        match (self.status(), policy) {
            (Status::Clean, _) | (Status::Warnings, WarningsPolicy::Allow) => 0,
            (Status::Warnings, WarningsPolicy::Fail) => 1,
            (Status::Errors, _) => 2,
        }
    }
}

/// Run the checker as configured, streaming findings to `reporter`.
pub fn run(config: &CheckConfig, reporter: &mut dyn Reporter) -> Result<CheckSummary, CheckError> {
    let routes = RouteIdSet::load(&config.routes)?;
    let paths = schedule_paths(&config.schedules)?;

    let summary = check_schedules(&paths, &routes, reporter)?;
    reporter.finish(&summary)?;

    info!(
        schedules = summary.schedules_checked,
        warnings = summary.warnings,
        load_failures = summary.load_failures,
        "schedule check complete"
    );

    Ok(summary)
}

/// Validate each schedule in order against an already-built route index.
///
/// A schedule that fails to load is reported and counted; the remaining
/// schedules are still checked.
pub fn check_schedules(
    paths: &[PathBuf],
    routes: &RouteIdSet,
    reporter: &mut dyn Reporter,
) -> Result<CheckSummary, io::Error> {
    let mut summary = CheckSummary::default();

    for path in paths {
        let document = match load_schedule(path) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load schedule");
                reporter.load_failure(&e)?;
                summary.load_failures += 1;
                continue;
            }
        };

        let diagnostics = validate_schedule(path, &document, routes);
        debug!(path = %path.display(), diagnostics = diagnostics.len(), "checked schedule");

        for diagnostic in &diagnostics {
            reporter.diagnostic(diagnostic)?;
        }
        summary.schedules_checked += 1;
        summary.warnings += diagnostics.len();
    }

    Ok(summary)
}
