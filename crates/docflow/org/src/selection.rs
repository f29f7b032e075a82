//! Cascading multi-select over an org hierarchy
//!
//! The selection stores Person node ids only. Toggling an Organization
//! node sets every descendant Person leaf to the same value in one atomic
//! step; whether the organization itself reads as selected is derived from
//! its members on every read, never stored. Deselecting a single member
//! therefore never cascades upward.

use crate::OrgHierarchy;
use docflow_types::{ActorRef, DocflowResult, OrgNodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mutable multi-select state for one recipient dialog
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    selected: BTreeSet<OrgNodeId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a node.
    ///
    /// Organization: every descendant Person leaf is set to the inverse of
    /// the org's current fully-selected state, as one bulk add/remove —
    /// never a partial update. Person: only that node toggles.
    pub fn toggle(&mut self, hierarchy: &OrgHierarchy, id: &OrgNodeId) -> DocflowResult<()> {
        let node = hierarchy.find_node(id)?;
        if node.is_person() {
            if !self.selected.remove(id) {
                self.selected.insert(id.clone());
            }
            return Ok(());
        }

        let members = hierarchy.collect_descendant_person_ids(id)?;
        let select = !members.iter().all(|m| self.selected.contains(m));
        if select {
            self.selected.extend(members);
        } else {
            for member in &members {
                self.selected.remove(member);
            }
        }
        Ok(())
    }

    /// Select-all / deselect-all over the currently visible flattened view.
    ///
    /// Visible organizations cascade to their members exactly as `toggle`
    /// does. If everything the user can see is already selected, the call
    /// deselects it all; otherwise it selects it all — one atomic update
    /// either way.
    pub fn toggle_all(
        &mut self,
        hierarchy: &OrgHierarchy,
        visible: &[OrgNodeId],
    ) -> DocflowResult<()> {
        let mut targets = BTreeSet::new();
        for id in visible {
            targets.extend(hierarchy.collect_descendant_person_ids(id)?);
        }
        let all_selected =
            !targets.is_empty() && targets.iter().all(|t| self.selected.contains(t));
        if all_selected {
            for target in &targets {
                self.selected.remove(target);
            }
        } else {
            self.selected.extend(targets);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: &OrgNodeId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected Person ids in id order
    pub fn selected_ids(&self) -> impl Iterator<Item = &OrgNodeId> {
        self.selected.iter()
    }

    /// Derived display state: an organization reads as fully selected when
    /// it has members and every descendant Person leaf is selected.
    pub fn is_fully_selected(
        &self,
        hierarchy: &OrgHierarchy,
        org_id: &OrgNodeId,
    ) -> DocflowResult<bool> {
        let members = hierarchy.collect_descendant_person_ids(org_id)?;
        Ok(!members.is_empty() && members.iter().all(|m| self.selected.contains(m)))
    }

    /// The selected persons as actor references, in id order
    pub fn selected_actors(&self, hierarchy: &OrgHierarchy) -> DocflowResult<Vec<ActorRef>> {
        let mut actors = Vec::with_capacity(self.selected.len());
        for id in &self.selected {
            let node = hierarchy.find_node(id)?;
            if let Some(actor) = node.actor_ref() {
                actors.push(actor);
            }
        }
        Ok(actors)
    }

    /// Partition the selection into main and supporting recipients.
    ///
    /// The leader of a fully-selected organization is the implied "main"
    /// contact for that organization; every other selected person is
    /// supporting. Selecting an organization's leader on their own does
    /// not make them main — the organization itself must be selected.
    pub fn recipient_selection(
        &self,
        hierarchy: &OrgHierarchy,
    ) -> DocflowResult<RecipientSelection> {
        let mut leader_ids = BTreeSet::new();
        for org in hierarchy.organizations() {
            if let Some(leader_id) = &org.leader_id {
                if self.selected.contains(leader_id)
                    && self.is_fully_selected(hierarchy, &org.id)?
                {
                    leader_ids.insert(leader_id.clone());
                }
            }
        }

        let mut selection = RecipientSelection::default();
        for id in &self.selected {
            let node = hierarchy.find_node(id)?;
            if let Some(actor) = node.actor_ref() {
                if leader_ids.contains(id) {
                    selection.main.push(actor);
                } else {
                    selection.supporting.push(actor);
                }
            }
        }
        Ok(selection)
    }
}

/// The outcome of a recipient dialog: who is main, who is supporting
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientSelection {
    /// Recipients designated as primarily responsible
    pub main: Vec<ActorRef>,
    /// Recipients asked to contribute without primary ownership
    pub supporting: Vec<ActorRef>,
}

impl RecipientSelection {
    pub fn new(main: Vec<ActorRef>, supporting: Vec<ActorRef>) -> Self {
        Self { main, supporting }
    }

    pub fn len(&self) -> usize {
        self.main.len() + self.supporting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.supporting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatOrgRecord;

    fn make_tree() -> OrgHierarchy {
        OrgHierarchy::build(vec![
            FlatOrgRecord::org("finance", "Finance").with_leader("alice"),
            FlatOrgRecord::person("alice", "Alice").with_parent("finance"),
            FlatOrgRecord::person("bob", "Bob").with_parent("finance"),
            FlatOrgRecord::person("carol", "Carol").with_parent("finance"),
            FlatOrgRecord::person("dave", "Dave"),
        ])
        .unwrap()
    }

    #[test]
    fn test_toggle_org_selects_all_members() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        selection.toggle(&tree, &OrgNodeId::new("finance")).unwrap();

        let actors = selection.selected_actors(&tree).unwrap();
        let names: Vec<&str> = actors.iter().map(|a| a.display_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_toggle_org_twice_is_idempotent() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        selection.toggle(&tree, &OrgNodeId::new("finance")).unwrap();
        selection.toggle(&tree, &OrgNodeId::new("finance")).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_partial_org_toggle_completes_the_set() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        selection.toggle(&tree, &OrgNodeId::new("bob")).unwrap();

        // Not all members selected, so toggling the org selects the rest
        selection.toggle(&tree, &OrgNodeId::new("finance")).unwrap();
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_deselecting_member_does_not_cascade_up() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        selection.toggle(&tree, &OrgNodeId::new("finance")).unwrap();
        selection.toggle(&tree, &OrgNodeId::new("bob")).unwrap();

        assert!(!selection
            .is_fully_selected(&tree, &OrgNodeId::new("finance"))
            .unwrap());
        assert!(selection.contains(&OrgNodeId::new("alice")));
        assert!(selection.contains(&OrgNodeId::new("carol")));
    }

    #[test]
    fn test_fully_selected_is_derived() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        for person in ["alice", "bob", "carol"] {
            selection.toggle(&tree, &OrgNodeId::new(person)).unwrap();
        }
        // Selected one by one, never via the org node — still fully selected
        assert!(selection
            .is_fully_selected(&tree, &OrgNodeId::new("finance"))
            .unwrap());
    }

    #[test]
    fn test_toggle_unknown_node() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(&tree, &OrgNodeId::new("ghost")).is_err());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_over_visible_view() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();

        // Collapsed view: finance org and dave
        let visible = vec![OrgNodeId::new("finance"), OrgNodeId::new("dave")];
        selection.toggle_all(&tree, &visible).unwrap();
        assert_eq!(selection.len(), 4);

        // Everything visible is selected, so the same call clears it
        selection.toggle_all(&tree, &visible).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        selection.toggle(&tree, &OrgNodeId::new("finance")).unwrap();
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_leader_implied_main() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        selection.toggle(&tree, &OrgNodeId::new("finance")).unwrap();

        let recipients = selection.recipient_selection(&tree).unwrap();
        assert_eq!(recipients.main.len(), 1);
        assert_eq!(recipients.main[0].display_name, "Alice");
        assert_eq!(recipients.supporting.len(), 2);
    }

    #[test]
    fn test_selection_serde_round_trip() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        selection.toggle(&tree, &OrgNodeId::new("finance")).unwrap();

        let json = serde_json::to_string(&selection).unwrap();
        let back: SelectionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), selection.len());
        assert!(back.contains(&OrgNodeId::new("alice")));
        assert!(back
            .is_fully_selected(&tree, &OrgNodeId::new("finance"))
            .unwrap());
    }

    #[test]
    fn test_leader_alone_is_not_main() {
        let tree = make_tree();
        let mut selection = SelectionSet::new();
        selection.toggle(&tree, &OrgNodeId::new("alice")).unwrap();

        // Alice leads finance, but finance is not fully selected
        let recipients = selection.recipient_selection(&tree).unwrap();
        assert!(recipients.main.is_empty());
        assert_eq!(recipients.supporting.len(), 1);
    }
}
