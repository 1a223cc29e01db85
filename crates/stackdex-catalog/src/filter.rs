//! Pure filter engine.
//!
//! Three independent predicates (free-text search, kind, build tool) are
//! ANDed over the collection. Deliberately no scoring or fuzziness: for a
//! small fixed catalog, exactness and predictability beat relevance
//! ranking. The engine never mutates records and preserves source order,
//! so the filtered view is always a stable subsequence of the catalog.

use crate::{StackKind, StackRecord};

/// Current filter state, derived from UI input. The three criteria compose
/// independently; there is no invariant across them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring over name and description. Empty matches all.
    pub search: String,
    /// Exact kind match. `None` matches all.
    pub kind: Option<StackKind>,
    /// Exact build-tool match. `None` matches all.
    pub tool: Option<String>,
}

impl FilterCriteria {
    /// True when no criterion is active, i.e. filtering is the identity.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.kind.is_none() && self.tool.is_none()
    }

    /// Whether a single record satisfies all three predicates.
    pub fn matches(&self, record: &StackRecord) -> bool {
        self.matches_search(record) && self.matches_kind(record) && self.matches_tool(record)
    }

    fn matches_search(&self, record: &StackRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
    }

    fn matches_kind(&self, record: &StackRecord) -> bool {
        match self.kind {
            None => true,
            Some(kind) => record.kind == kind,
        }
    }

    fn matches_tool(&self, record: &StackRecord) -> bool {
        match &self.tool {
            None => true,
            Some(tool) => &record.build_tool == tool,
        }
    }
}

/// Compute the filtered view: the ordered subsequence of `records`
/// satisfying all active criteria. Pure and total; an empty collection
/// yields an empty result. Triggering a re-render is the caller's job.
pub fn filter_records<'a>(
    records: &'a [StackRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a StackRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}
