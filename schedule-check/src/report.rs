//! Reporting findings to the user.
//!
//! Validation returns diagnostics; a [`Reporter`] decides how they are
//! shown. The text format prints one `WARNING!` line per finding; the JSON
//! format prints one object per line for CI tooling.

use std::io::{self, Write};

use serde::Serialize;

use crate::check::CheckSummary;
use crate::config::OutputFormat;
use crate::schedule::{Diagnostic, ScheduleLoadError};

/// Receives the findings of a run as they are produced.
pub trait Reporter {
    /// Report one validation finding.
    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;

    /// Report a schedule that could not be loaded.
    fn load_failure(&mut self, error: &ScheduleLoadError) -> io::Result<()>;

    /// Called once after every schedule has been checked.
    fn finish(&mut self, summary: &CheckSummary) -> io::Result<()>;
}

/// Build the reporter for an output format.
pub fn reporter_for<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn Reporter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(out)),
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
    }
}

/// Plain-text reporter.
pub struct TextReporter<W> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(self.out, "WARNING! {diagnostic}")
    }

    fn load_failure(&mut self, error: &ScheduleLoadError) -> io::Result<()> {
        writeln!(self.out, "ERROR! {error}")
    }

    fn finish(&mut self, summary: &CheckSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "checked {} schedule(s): {} warning(s), {} error(s)",
            summary.schedules_checked, summary.warnings, summary.load_failures
        )?;
        self.out.flush()
    }
}

/// One line of JSON output.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonRecord {
    Diagnostic {
        severity: &'static str,
        schedule: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        entry: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        phase: Option<usize>,
        code: &'static str,
        message: String,
    },
    LoadFailure {
        severity: &'static str,
        schedule: String,
        message: String,
    },
    Summary {
        schedules_checked: usize,
        warnings: usize,
        errors: usize,
        status: &'static str,
    },
}

/// JSON-lines reporter.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, record: &JsonRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.emit(&JsonRecord::Diagnostic {
            severity: "warning",
            schedule: diagnostic.schedule.display().to_string(),
            entry: diagnostic.entry,
            phase: diagnostic.phase,
            code: diagnostic.kind.code(),
            message: diagnostic.message(),
        })
    }

    fn load_failure(&mut self, error: &ScheduleLoadError) -> io::Result<()> {
        self.emit(&JsonRecord::LoadFailure {
            severity: "error",
            schedule: error.path().display().to_string(),
            message: error.to_string(),
        })
    }

    fn finish(&mut self, summary: &CheckSummary) -> io::Result<()> {
        self.emit(&JsonRecord::Summary {
            schedules_checked: summary.schedules_checked,
            warnings: summary.warnings,
            errors: summary.load_failures,
            status: summary.status().as_str(),
        })?;
        self.out.flush()
    }
}
