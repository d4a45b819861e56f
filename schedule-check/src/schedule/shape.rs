//! Typed view of a parsed schedule document.
//!
//! Schedules arrive as generic YAML. Lowering them into these enums is
//! total: every shape a document can take maps onto some variant, so the
//! validator handles malformed input by matching rather than by failing
//! halfway through a traversal.

use serde_yaml::{Mapping, Value};

const PLAN_KEY: &str = "plan";
const ROUTE_ID_KEY: &str = "route_id";

/// A whole schedule document.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleShape<'a> {
    /// The expected list of entries
    Entries(Vec<EntryShape<'a>>),
    /// Anything other than a list, including an empty document
    NotAList,
}

/// One schedule entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryShape<'a> {
    /// An entry with a `plan` key
    Planned(PlanShape<'a>),
    /// A mapping without a `plan` key
    Unplanned,
    /// Not a mapping at all
    NotAMapping,
}

/// The value of an entry's `plan`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanShape<'a> {
    Phases(Vec<PhaseShape<'a>>),
    NotAList,
}

/// One phase of a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseShape<'a> {
    /// A phase naming its route
    Routed(RouteRef<'a>),
    /// A phase without `route_id`, which is allowed
    Unrouted,
    NotAMapping,
}

/// The value of a phase's `route_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRef<'a> {
    Id(&'a str),
    /// Present, but a number, list, null or other non-string value
    NotAString,
}

impl<'a> ScheduleShape<'a> {
    /// Lower a parsed document.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_check::schedule::{EntryShape, ScheduleShape};
    ///
    /// let doc: serde_yaml::Value = serde_yaml::from_str("- {}").unwrap();
    /// let ScheduleShape::Entries(entries) = ScheduleShape::from_value(&doc) else {
    ///     panic!("expected a list");
    /// };
    /// assert_eq!(entries, vec![EntryShape::Unplanned]);
    /// ```
    pub fn from_value(document: &'a Value) -> Self {
        match document {
            Value::Sequence(entries) => {
                ScheduleShape::Entries(entries.iter().map(EntryShape::from_value).collect())
            }
            _ => ScheduleShape::NotAList,
        }
    }
}

impl<'a> EntryShape<'a> {
    pub fn from_value(entry: &'a Value) -> Self {
        let Some(mapping) = entry.as_mapping() else {
            return EntryShape::NotAMapping;
        };

        match mapping.get(PLAN_KEY) {
            Some(plan) => EntryShape::Planned(PlanShape::from_value(plan)),
            None => EntryShape::Unplanned,
        }
    }
}

impl<'a> PlanShape<'a> {
    pub fn from_value(plan: &'a Value) -> Self {
        match plan.as_sequence() {
            Some(phases) => PlanShape::Phases(phases.iter().map(PhaseShape::from_value).collect()),
            None => PlanShape::NotAList,
        }
    }
}

impl<'a> PhaseShape<'a> {
    pub fn from_value(phase: &'a Value) -> Self {
        match phase.as_mapping() {
            Some(mapping) => Self::from_mapping(mapping),
            None => PhaseShape::NotAMapping,
        }
    }

    fn from_mapping(mapping: &'a Mapping) -> Self {
        match mapping.get(ROUTE_ID_KEY) {
            Some(Value::String(id)) => PhaseShape::Routed(RouteRef::Id(id)),
            Some(_) => PhaseShape::Routed(RouteRef::NotAString),
            None => PhaseShape::Unrouted,
        }
    }
}
