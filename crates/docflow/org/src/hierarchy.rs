//! The immutable org tree
//!
//! Built once per dialog open from the flat records the org service
//! returns, then read-only. The tree can be a partial view of the whole
//! organization, so an unknown id on lookup is `NotFound` ("absent from
//! this snapshot"), never a panic. Structural defects — cycles, dangling
//! parents, dangling leaders, duplicate ids — are rejected at build time.

use docflow_types::{ActorId, ActorRef, DocflowError, DocflowResult, OrgNodeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// The kind of a node in the org tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrgNodeKind {
    /// An organizational unit with members
    Organization,
    /// An individual person (a user account)
    Person,
}

/// A flat record as returned by the external org service
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlatOrgRecord {
    pub id: OrgNodeId,
    pub name: String,
    pub kind: OrgNodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<OrgNodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<OrgNodeId>,
}

impl FlatOrgRecord {
    /// An organization record
    pub fn org(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: OrgNodeId::new(id),
            name: name.into(),
            kind: OrgNodeKind::Organization,
            parent_id: None,
            leader_id: None,
        }
    }

    /// A person record
    pub fn person(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: OrgNodeId::new(id),
            name: name.into(),
            kind: OrgNodeKind::Person,
            parent_id: None,
            leader_id: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_id = Some(OrgNodeId::new(parent));
        self
    }

    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leader_id = Some(OrgNodeId::new(leader));
        self
    }
}

/// A node in the org tree
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrgNode {
    pub id: OrgNodeId,
    pub name: String,
    pub kind: OrgNodeKind,
    /// Matches the parent that lists this node as a child
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<OrgNodeId>,
    /// Child node ids in input order
    pub children: Vec<OrgNodeId>,
    /// Weak reference to this organization's leader (a Person node)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<OrgNodeId>,
}

impl OrgNode {
    pub fn is_person(&self) -> bool {
        self.kind == OrgNodeKind::Person
    }

    pub fn is_organization(&self) -> bool {
        self.kind == OrgNodeKind::Organization
    }

    /// An `ActorRef` for a person node. Person node ids double as actor ids.
    pub fn actor_ref(&self) -> Option<ActorRef> {
        if self.is_person() {
            Some(ActorRef::user(ActorId::new(&*self.id.0), &*self.name))
        } else {
            None
        }
    }
}

/// An immutable forest of org nodes with parent/child relations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrgHierarchy {
    nodes: HashMap<OrgNodeId, OrgNode>,
    roots: Vec<OrgNodeId>,
}

impl OrgHierarchy {
    /// Build a validated hierarchy from flat org records.
    ///
    /// Rejects duplicate ids, parents that are not in the snapshot,
    /// parent/child cycles, and leaders that do not reference a Person
    /// node in the snapshot. These indicate malformed input and fail the
    /// whole build.
    pub fn build(records: Vec<FlatOrgRecord>) -> DocflowResult<Self> {
        let mut nodes: HashMap<OrgNodeId, OrgNode> = HashMap::with_capacity(records.len());
        let mut roots = Vec::new();

        for record in &records {
            if nodes.contains_key(&record.id) {
                return Err(DocflowError::DuplicateNode(record.id.clone()));
            }
            nodes.insert(
                record.id.clone(),
                OrgNode {
                    id: record.id.clone(),
                    name: record.name.clone(),
                    kind: record.kind,
                    parent_id: record.parent_id.clone(),
                    children: Vec::new(),
                    leader_id: record.leader_id.clone(),
                },
            );
        }

        // Wire children in input order; parents must exist in the snapshot
        for record in &records {
            match &record.parent_id {
                Some(parent_id) => {
                    if !nodes.contains_key(parent_id) {
                        return Err(DocflowError::DanglingParent {
                            node: record.id.clone(),
                            parent: parent_id.clone(),
                        });
                    }
                    if let Some(parent) = nodes.get_mut(parent_id) {
                        parent.children.push(record.id.clone());
                    }
                }
                None => roots.push(record.id.clone()),
            }
        }

        // Every parent chain must terminate at a root
        for record in &records {
            let mut seen = HashSet::new();
            let mut current = record.id.clone();
            while let Some(parent_id) = nodes[&current].parent_id.clone() {
                if !seen.insert(current.clone()) {
                    return Err(DocflowError::CycleDetected(record.id.clone()));
                }
                current = parent_id;
            }
        }

        // Leaders must reference an existing Person node
        for record in &records {
            if let Some(leader_id) = &record.leader_id {
                let valid = nodes
                    .get(leader_id)
                    .map(|n| n.is_person())
                    .unwrap_or(false);
                if !valid {
                    return Err(DocflowError::DanglingLeader {
                        org: record.id.clone(),
                        leader: leader_id.clone(),
                    });
                }
            }
        }

        Ok(Self { nodes, roots })
    }

    /// Look up a node. `NotFound` means the id is absent from this
    /// snapshot, which callers treat as recoverable.
    pub fn find_node(&self, id: &OrgNodeId) -> DocflowResult<&OrgNode> {
        self.nodes
            .get(id)
            .ok_or_else(|| DocflowError::NotFound(id.to_string()))
    }

    /// Look up a node's parent. `Ok(None)` for roots; `NotFound` if the
    /// id itself is unknown.
    pub fn find_parent(&self, id: &OrgNodeId) -> DocflowResult<Option<&OrgNode>> {
        let node = self.find_node(id)?;
        match &node.parent_id {
            Some(parent_id) => Ok(self.nodes.get(parent_id)),
            None => Ok(None),
        }
    }

    /// All Person leaves under a node, in id order. A Person node yields
    /// itself.
    pub fn collect_descendant_person_ids(
        &self,
        id: &OrgNodeId,
    ) -> DocflowResult<BTreeSet<OrgNodeId>> {
        let node = self.find_node(id)?;
        let mut persons = BTreeSet::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if current.is_person() {
                persons.insert(current.id.clone());
            }
            for child_id in &current.children {
                if let Some(child) = self.nodes.get(child_id) {
                    stack.push(child);
                }
            }
        }
        Ok(persons)
    }

    /// Root nodes in input order
    pub fn roots(&self) -> Vec<&OrgNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id)).collect()
    }

    /// Preorder flattening of what the user can currently see: roots are
    /// always visible, a node's children only when it is in `expanded`.
    pub fn flatten_visible(&self, expanded: &BTreeSet<OrgNodeId>) -> Vec<OrgNodeId> {
        let mut visible = Vec::new();
        let mut stack: Vec<&OrgNodeId> = self.roots.iter().rev().collect();
        while let Some(id) = stack.pop() {
            visible.push(id.clone());
            if expanded.contains(id) {
                if let Some(node) = self.nodes.get(id) {
                    for child_id in node.children.iter().rev() {
                        stack.push(child_id);
                    }
                }
            }
        }
        visible
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrgNode> {
        self.nodes.values()
    }

    /// All organization nodes
    pub fn organizations(&self) -> impl Iterator<Item = &OrgNode> {
        self.nodes.values().filter(|n| n.is_organization())
    }
}
