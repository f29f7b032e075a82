//! Identifier newtypes
//!
//! All ids are opaque strings. Org units and persons share one id space
//! (`OrgNodeId`) because the org tree mixes both node kinds; actors acting
//! on documents are identified separately by `ActorId`.

use serde::{Deserialize, Serialize};

/// Unique identifier for an actor (a user account)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a node in the org tree (organization or person)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrgNodeId(pub String);

impl OrgNodeId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for OrgNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a document
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The first eight characters, for log lines. Ids are opaque strings,
    /// so truncation counts characters, not bytes.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a task spawned from an issued document
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ActorId::generate(), ActorId::generate());
        assert_ne!(DocumentId::generate(), DocumentId::generate());
    }

    #[test]
    fn test_document_id_short() {
        let id = DocumentId::generate();
        assert!(id.short().len() <= 8);

        let tiny = DocumentId::new("doc");
        assert_eq!(tiny.short(), "doc");
    }

    #[test]
    fn test_document_id_short_is_char_safe() {
        let id = DocumentId::new("číslo-2026/184");
        assert_eq!(id.short(), "číslo-20");

        let short = DocumentId::new("čj");
        assert_eq!(short.short(), "čj");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", OrgNodeId::new("org-1")), "org-1");
        assert_eq!(format!("{}", TaskId::new("task-9")), "task-9");
    }
}
