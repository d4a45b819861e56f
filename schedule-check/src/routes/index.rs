//! Route id index.

use std::collections::HashSet;
use std::path::Path;

use super::db::{RouteRecord, load_route_db};
use super::error::RouteDbError;

/// The set of route ids that schedules may reference.
///
/// Built once per run from the route database and never modified
/// afterwards; membership is the only question asked of it.
///
/// # Examples
///
/// ```
/// use schedule_check::routes::{RouteRecord, build_route_index};
///
/// let records = vec![RouteRecord::new("R1"), RouteRecord::new("R2")];
/// let index = build_route_index(&records);
///
/// assert!(index.contains("R1"));
/// assert!(!index.contains("R3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteIdSet {
    ids: HashSet<String>,
}

impl RouteIdSet {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a route database and index it.
    pub fn load(path: &Path) -> Result<Self, RouteDbError> {
        let records = load_route_db(path)?;
        Ok(build_route_index(&records))
    }

    /// Check whether a route id is known.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns the number of distinct route ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no routes are known.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<String> for RouteIdSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a RouteRecord> for RouteIdSet {
    fn from_iter<I: IntoIterator<Item = &'a RouteRecord>>(iter: I) -> Self {
        iter.into_iter().map(|record| record.id.clone()).collect()
    }
}

/// Build the route id index from the records of a route database.
///
/// Duplicate ids collapse into a single entry.
pub fn build_route_index(records: &[RouteRecord]) -> RouteIdSet {
    records.iter().collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        /// Every id in the database is in the index
        #[test]
        fn all_ids_present(ids in vec("[A-Za-z0-9_-]{1,12}", 0..32)) {
            let records: Vec<_> = ids.iter().map(|id| RouteRecord::new(id.as_str())).collect();
            let index = build_route_index(&records);
            for id in &ids {
                prop_assert!(index.contains(id));
            }
        }

        /// Ids absent from the database are absent from the index
        #[test]
        fn absent_ids_rejected(
            ids in vec("[A-Z][0-9]{1,4}", 0..32),
            probe in "[a-z]{1,8}",
        ) {
            let records: Vec<_> = ids.iter().map(|id| RouteRecord::new(id.as_str())).collect();
            let index = build_route_index(&records);
            prop_assert!(!index.contains(&probe));
        }

        /// Index size is the number of distinct ids
        #[test]
        fn size_is_distinct_count(ids in vec("[A-C]{1,2}", 0..32)) {
            let records: Vec<_> = ids.iter().map(|id| RouteRecord::new(id.as_str())).collect();
            let distinct: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(build_route_index(&records).len(), distinct.len());
        }
    }
}
