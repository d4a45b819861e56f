//! Schedule documents and their validation.
//!
//! A schedule is a YAML list of entries. Each entry carries a `plan`, a
//! list of phases, and a phase may name the route it runs on with
//! `route_id`. Validation checks that shape and that every referenced
//! route exists in the route database.

mod diagnostic;
mod error;
mod load;
mod shape;
mod validate;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::ScheduleLoadError;
pub use load::load_schedule;
pub use shape::{EntryShape, PhaseShape, PlanShape, RouteRef, ScheduleShape};
pub use validate::validate_schedule;
