// src/graph/workflow.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Node identifiers are assigned by the external system that owns the
/// workflow definition; they are opaque here.
pub type NodeId = i64;

/// One node of the workflow DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Name of the pipeline this node executes. Carried for consumers
    /// (log-view navigation); eligibility never looks at it.
    pub pipeline_name: String,
    /// Direct children, i.e. nodes triggered once this one finishes.
    #[serde(default)]
    pub children: Vec<NodeId>,
}

/// A workflow definition: a DAG of nodes with a single root.
///
/// Immutable for the duration of one evaluation. Graph edits are modeled as
/// a replacement `Workflow` value, never an in-place mutation, so a run
/// snapshot taken earlier may reference nodes that no longer exist here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub root_id: NodeId,
    pub nodes: HashMap<NodeId, Node>,
}

impl Workflow {
    /// Build a workflow from its root id and node set.
    pub fn from_nodes(root_id: NodeId, nodes: impl IntoIterator<Item = Node>) -> Self {
        let nodes = nodes.into_iter().map(|n| (n.id, n)).collect();
        Self { root_id, nodes }
    }

    /// Resolve a node by id. `None` is an expected outcome for ids taken
    /// from an older run snapshot (graph-edit skew).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Ids of the direct parents of `id`, derived by traversing every
    /// node's child edges.
    ///
    /// Unknown ids simply have no parents. The result is sorted so callers
    /// see a deterministic order regardless of map iteration.
    pub fn parent_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut parents: Vec<NodeId> = self
            .nodes
            .values()
            .filter(|n| n.children.contains(&id))
            .map(|n| n.id)
            .collect();
        parents.sort_unstable();
        parents
    }
}
