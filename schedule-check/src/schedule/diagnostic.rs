//! Validation findings.

use std::fmt;
use std::path::{Path, PathBuf};

/// What is wrong with a schedule.
///
/// Every kind is a warning: a finding never stops the rest of the
/// schedule (or the rest of the run) from being checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The document is not a list of entries
    NotAList,
    /// An entry is not a mapping
    EntryNotAMapping,
    /// An entry has no `plan`
    MissingPlan,
    /// An entry's `plan` is not a list
    PlanNotAList,
    /// A plan phase is not a mapping
    PhaseNotAMapping,
    /// A phase's `route_id` is present but not a string
    RouteIdNotString,
    /// A phase's `route_id` is not in the route database
    UnknownRouteId(String),
}

impl DiagnosticKind {
    /// Stable machine-readable code for this kind of finding.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::NotAList => "schedule-not-a-list",
            DiagnosticKind::EntryNotAMapping => "entry-not-a-mapping",
            DiagnosticKind::MissingPlan => "missing-plan",
            DiagnosticKind::PlanNotAList => "plan-not-a-list",
            DiagnosticKind::PhaseNotAMapping => "phase-not-a-mapping",
            DiagnosticKind::RouteIdNotString => "route-id-not-string",
            DiagnosticKind::UnknownRouteId(_) => "unknown-route-id",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::NotAList => f.write_str("schedule must be a list of entries"),
            DiagnosticKind::EntryNotAMapping => f.write_str("entry must be a mapping"),
            DiagnosticKind::MissingPlan => f.write_str("missing plan"),
            DiagnosticKind::PlanNotAList => f.write_str("plan must be a list of phases"),
            DiagnosticKind::PhaseNotAMapping => f.write_str("plan phase must be a mapping"),
            DiagnosticKind::RouteIdNotString => f.write_str("route_id must be a string"),
            DiagnosticKind::UnknownRouteId(id) => write!(f, "unknown route_id '{id}'"),
        }
    }
}

/// A single finding in one schedule.
///
/// `entry` and `phase` are zero-based positions within the document;
/// findings about the document as a whole carry neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub schedule: PathBuf,
    pub entry: Option<usize>,
    pub phase: Option<usize>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// A finding about the whole document.
    pub fn document(schedule: &Path, kind: DiagnosticKind) -> Self {
        Self {
            schedule: schedule.to_path_buf(),
            entry: None,
            phase: None,
            kind,
        }
    }

    /// A finding about one entry.
    pub fn entry(schedule: &Path, entry: usize, kind: DiagnosticKind) -> Self {
        Self {
            schedule: schedule.to_path_buf(),
            entry: Some(entry),
            phase: None,
            kind,
        }
    }

    /// A finding about one phase of an entry's plan.
    pub fn phase(schedule: &Path, entry: usize, phase: usize, kind: DiagnosticKind) -> Self {
        Self {
            schedule: schedule.to_path_buf(),
            entry: Some(entry),
            phase: Some(phase),
            kind,
        }
    }

    /// The human-readable message, e.g. `schedule a.yaml: missing plan`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schedule {}: {}", self.schedule.display(), self.kind)
    }
}
