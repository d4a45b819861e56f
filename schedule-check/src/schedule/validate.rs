//! Schedule validation against the route index.

use std::path::Path;

use serde_yaml::Value;

use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::shape::{EntryShape, PhaseShape, PlanShape, RouteRef, ScheduleShape};
use crate::routes::RouteIdSet;

/// Check one parsed schedule document.
///
/// Returns every finding in document order. Validation never stops early:
/// an entry without a plan is skipped, but all other entries and all
/// phases are visited regardless of earlier findings. Identical findings
/// in different phases are reported separately.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use schedule_check::routes::{RouteRecord, build_route_index};
/// use schedule_check::schedule::validate_schedule;
///
/// let routes = build_route_index(&[RouteRecord::new("R1")]);
/// let doc = serde_yaml::from_str("- plan: [{route_id: R2}]").unwrap();
///
/// let diagnostics = validate_schedule(Path::new("s.yaml"), &doc, &routes);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].message(), "schedule s.yaml: unknown route_id 'R2'");
/// ```
pub fn validate_schedule(path: &Path, document: &Value, routes: &RouteIdSet) -> Vec<Diagnostic> {
    let entries = match ScheduleShape::from_value(document) {
        ScheduleShape::Entries(entries) => entries,
        ScheduleShape::NotAList => {
            return vec![Diagnostic::document(path, DiagnosticKind::NotAList)];
        }
    };

    let mut diagnostics = Vec::new();

    for (entry_idx, entry) in entries.into_iter().enumerate() {
        let phases = match entry {
            EntryShape::Planned(PlanShape::Phases(phases)) => phases,
            EntryShape::Planned(PlanShape::NotAList) => {
                diagnostics.push(Diagnostic::entry(path, entry_idx, DiagnosticKind::PlanNotAList));
                continue;
            }
            EntryShape::Unplanned => {
                diagnostics.push(Diagnostic::entry(path, entry_idx, DiagnosticKind::MissingPlan));
                continue;
            }
            EntryShape::NotAMapping => {
                diagnostics.push(Diagnostic::entry(
                    path,
                    entry_idx,
                    DiagnosticKind::EntryNotAMapping,
                ));
                continue;
            }
        };

        for (phase_idx, phase) in phases.into_iter().enumerate() {
            if let Some(kind) = check_phase(phase, routes) {
                diagnostics.push(Diagnostic::phase(path, entry_idx, phase_idx, kind));
            }
        }
    }

    diagnostics
}

/// Check a single phase. A phase produces at most one finding: a
/// non-string `route_id` is never also looked up.
fn check_phase(phase: PhaseShape<'_>, routes: &RouteIdSet) -> Option<DiagnosticKind> {
    match phase {
        PhaseShape::Routed(RouteRef::Id(id)) if routes.contains(id) => None,
        PhaseShape::Routed(RouteRef::Id(id)) => {
            Some(DiagnosticKind::UnknownRouteId(id.to_string()))
        }
        PhaseShape::Routed(RouteRef::NotAString) => Some(DiagnosticKind::RouteIdNotString),
        PhaseShape::NotAMapping => Some(DiagnosticKind::PhaseNotAMapping),
        PhaseShape::Unrouted => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{RouteRecord, build_route_index};

    fn routes(ids: &[&str]) -> RouteIdSet {
        let records: Vec<_> = ids.iter().map(|id| RouteRecord::new(*id)).collect();
        build_route_index(&records)
    }

    fn check(doc: &str, ids: &[&str]) -> Vec<String> {
        let document: Value = serde_yaml::from_str(doc).unwrap();
        validate_schedule(Path::new("s.yaml"), &document, &routes(ids))
            .iter()
            .map(Diagnostic::message)
            .collect()
    }

    #[test]
    fn known_route_is_clean() {
        assert!(check("[{plan: [{route_id: R1}]}]", &["R1"]).is_empty());
    }

    #[test]
    fn unknown_route_is_reported() {
        assert_eq!(
            check("[{plan: [{route_id: R2}]}]", &["R1"]),
            vec!["schedule s.yaml: unknown route_id 'R2'"]
        );
    }

    #[test]
    fn missing_plan_is_reported() {
        assert_eq!(check("[{}]", &[]), vec!["schedule s.yaml: missing plan"]);
    }

    #[test]
    fn non_string_route_id_is_reported_once() {
        assert_eq!(
            check("[{plan: [{route_id: 42}]}]", &["R1"]),
            vec!["schedule s.yaml: route_id must be a string"]
        );
    }

    #[test]
    fn phase_without_route_id_is_clean() {
        assert!(check("[{plan: [{}]}]", &[]).is_empty());
    }

    #[test]
    fn non_string_route_id_matching_a_known_id_is_still_reported() {
        assert_eq!(
            check("[{plan: [{route_id: 42}]}]", &["42"]),
            vec!["schedule s.yaml: route_id must be a string"]
        );
        assert!(check("[{plan: [{route_id: '42'}]}]", &["42"]).is_empty());
    }

    #[test]
    fn null_route_id_is_not_a_string() {
        assert_eq!(
            check("- plan:\n    - route_id:\n", &["R1"]),
            vec!["schedule s.yaml: route_id must be a string"]
        );
    }

    #[test]
    fn missing_plan_skips_only_that_entry() {
        let doc = "
- name: warmup
  notes: [route_id, R9]
- plan:
    - route_id: R9
";
        assert_eq!(
            check(doc, &["R1"]),
            vec![
                "schedule s.yaml: missing plan",
                "schedule s.yaml: unknown route_id 'R9'",
            ]
        );
    }

    #[test]
    fn every_phase_is_visited() {
        let doc = "
- plan:
    - route_id: R2
    - route_id: R1
    - route_id: R2
    - route_id: true
- plan:
    - route_id: R3
";
        assert_eq!(
            check(doc, &["R1"]),
            vec![
                "schedule s.yaml: unknown route_id 'R2'",
                "schedule s.yaml: unknown route_id 'R2'",
                "schedule s.yaml: route_id must be a string",
                "schedule s.yaml: unknown route_id 'R3'",
            ]
        );
    }

    #[test]
    fn positions_are_recorded() {
        let document: Value = serde_yaml::from_str(
            "
- plan: [{route_id: R1}]
- {}
- plan: [{}, {route_id: R5}]
",
        )
        .unwrap();
        let diagnostics = validate_schedule(Path::new("s.yaml"), &document, &routes(&["R1"]));

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].entry, Some(1));
        assert_eq!(diagnostics[0].phase, None);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::MissingPlan);
        assert_eq!(diagnostics[1].entry, Some(2));
        assert_eq!(diagnostics[1].phase, Some(1));
        assert_eq!(
            diagnostics[1].kind,
            DiagnosticKind::UnknownRouteId("R5".into())
        );
    }

    #[test]
    fn document_not_a_list() {
        assert_eq!(
            check("plan: [{route_id: R1}]", &["R1"]),
            vec!["schedule s.yaml: schedule must be a list of entries"]
        );
        assert_eq!(
            check("", &[]),
            vec!["schedule s.yaml: schedule must be a list of entries"]
        );
    }

    #[test]
    fn empty_list_is_clean() {
        assert!(check("[]", &[]).is_empty());
    }

    #[test]
    fn malformed_shapes_become_diagnostics() {
        let doc = "
- plan: not-a-list
- just a string
- plan:
    - R1
    - route_id: R1
";
        assert_eq!(
            check(doc, &["R1"]),
            vec![
                "schedule s.yaml: plan must be a list of phases",
                "schedule s.yaml: entry must be a mapping",
                "schedule s.yaml: plan phase must be a mapping",
            ]
        );
    }

    #[test]
    fn path_appears_in_messages() {
        let document: Value = serde_yaml::from_str("[{}]").unwrap();
        let diagnostics =
            validate_schedule(Path::new("schedules/relay.yaml"), &document, &routes(&[]));
        assert_eq!(
            diagnostics[0].message(),
            "schedule schedules/relay.yaml: missing plan"
        );
    }
}
