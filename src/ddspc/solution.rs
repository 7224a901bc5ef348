//! A DDSPC solution: two node sets D1 and D2.

use std::collections::BTreeSet;

use super::graph::NodeId;

/// Value snapshot of a candidate solution.
///
/// Ordered sets keep iteration deterministic, so a fixed seed reproduces
/// the whole search trajectory. Moves never mutate a solution in place;
/// they build a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    d1: BTreeSet<NodeId>,
    d2: BTreeSet<NodeId>,
}

impl Solution {
    /// Builds a solution from the two node sets.
    pub fn new(
        d1: impl IntoIterator<Item = NodeId>,
        d2: impl IntoIterator<Item = NodeId>,
    ) -> Self {
        Self {
            d1: d1.into_iter().collect(),
            d2: d2.into_iter().collect(),
        }
    }

    /// First dominating set.
    pub fn d1(&self) -> &BTreeSet<NodeId> {
        &self.d1
    }

    /// Second dominating set.
    pub fn d2(&self) -> &BTreeSet<NodeId> {
        &self.d2
    }

    /// Objective value `|D1| + |D2|`.
    pub fn value(&self) -> usize {
        self.d1.len() + self.d2.len()
    }

    /// Whether `node` belongs to either set.
    pub fn contains(&self, node: NodeId) -> bool {
        self.d1.contains(&node) || self.d2.contains(&node)
    }

    pub(crate) fn d1_mut(&mut self) -> &mut BTreeSet<NodeId> {
        &mut self.d1
    }

    pub(crate) fn d2_mut(&mut self) -> &mut BTreeSet<NodeId> {
        &mut self.d2
    }

    /// Splits into `(D1, D2)`.
    pub fn into_sets(self) -> (BTreeSet<NodeId>, BTreeSet<NodeId>) {
        (self.d1, self.d2)
    }
}
