//! Node count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once a number of nodes have been taken off the frontier.
///
/// A limit of zero stops the search before the start node is examined.
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.nodes_expanded() >= self.limit
    }
}
