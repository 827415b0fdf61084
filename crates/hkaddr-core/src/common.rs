use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a built hierarchy.
///
/// Returned by [`Hierarchy::stats`](crate::Hierarchy::stats). Counts are
/// taken after deduplication, so `buildings` is the number of distinct
/// entries that will appear in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyStats {
    pub cities: usize,
    pub areas: usize,
    pub roads: usize,
    pub buildings: usize,
}
