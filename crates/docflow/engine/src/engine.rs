//! The document engine
//!
//! Holds document snapshots and applies validated actions to them. Every
//! submission runs the same gauntlet: version check, legality against the
//! action table, request validation, preconditions — and only when all of
//! it passes is the transition committed, as one unit: recipient-list
//! changes, status, history entry, version bump. A failed submission
//! mutates nothing.

use crate::{
    is_legal, legal_actions, resulting_status, ActionOutcome, ActionRequest, Document,
    ForwardRole, ProcessingAction, MAX_COMMENT_LEN,
};
use chrono::Utc;
use docflow_types::{
    ActionKind, ActorId, DocStatus, DocflowError, DocflowResult, DocumentId, Recipient, TaskId,
};
use std::collections::HashMap;

/// Which recipient list a transition appends to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TargetList {
    Main,
    Coordinators,
    ForInformation,
}

/// The workflow-state engine: documents in, validated transitions out
#[derive(Clone, Debug, Default)]
pub struct DocflowEngine {
    documents: HashMap<DocumentId, Document>,
}

impl DocflowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Snapshot management ──────────────────────────────────────────

    /// Insert (or replace) a document snapshot
    pub fn insert_document(&mut self, document: Document) -> DocumentId {
        let id = document.id.clone();
        self.documents.insert(id.clone(), document);
        id
    }

    /// Get a document by id
    pub fn document(&self, id: &DocumentId) -> DocflowResult<&Document> {
        self.documents
            .get(id)
            .ok_or_else(|| DocflowError::NotFound(id.to_string()))
    }

    /// Number of held documents
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Documents currently in a given status
    pub fn documents_with_status(&self, status: DocStatus) -> Vec<&Document> {
        self.documents.values().filter(|d| d.status == status).collect()
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The actions legal for a document right now
    pub fn available_actions(&self, id: &DocumentId) -> DocflowResult<&'static [ActionKind]> {
        Ok(legal_actions(self.document(id)?.status))
    }

    /// Check whether an (effective) actor participates in a document.
    ///
    /// Callers acting through a delegation grant resolve their acting
    /// identity first and pass the delegator's id here.
    pub fn is_participant(&self, id: &DocumentId, actor: &ActorId) -> DocflowResult<bool> {
        Ok(self.document(id)?.is_participant(actor))
    }

    // ── Action submission ────────────────────────────────────────────

    /// Submit an action against a document.
    ///
    /// `expected_version` is the version of the snapshot the caller acted
    /// on; a mismatch fails with `StaleState` and the caller must refetch.
    /// Illegal actions fail with `IllegalTransition`; validation and
    /// precondition failures name the violated rule. None of the failure
    /// paths mutate the document or its history.
    pub fn submit_action(
        &mut self,
        id: &DocumentId,
        request: ActionRequest,
        expected_version: u64,
    ) -> DocflowResult<ActionOutcome> {
        let document = self
            .documents
            .get(id)
            .ok_or_else(|| DocflowError::NotFound(id.to_string()))?;

        if document.version != expected_version {
            return Err(DocflowError::StaleState {
                expected: expected_version,
                actual: document.version,
            });
        }

        if !is_legal(document.status, request.kind) {
            return Err(DocflowError::IllegalTransition {
                status: document.status,
                action: request.kind,
            });
        }

        validate_request(document, &request)?;

        // Compute the entire transition before touching the document
        let old_status = document.status;
        let new_status = resulting_status(old_status, request.kind, request.forward_role);
        let additions = recipient_additions(old_status, &request);
        let task = matches!(request.kind, ActionKind::CreateTask).then(TaskId::generate);

        let document = self
            .documents
            .get_mut(id)
            .ok_or_else(|| DocflowError::NotFound(id.to_string()))?;

        for (target, recipient) in additions {
            match target {
                TargetList::Main => document.main_processors.push(recipient),
                TargetList::Coordinators => document.coordinators.push(recipient),
                TargetList::ForInformation => document.for_information.push(recipient),
            }
        }
        document.status = new_status;
        document.history.push(ProcessingAction {
            actor: request.actor.clone(),
            kind: request.kind,
            comment: request.comment.clone(),
            attachments: request.attachments.clone(),
            timestamp: Utc::now(),
            resulting_status: new_status,
        });
        document.version += 1;

        tracing::info!(
            document = %id,
            action = %request.kind,
            from = %old_status,
            to = %new_status,
            version = document.version,
            "Action committed"
        );

        Ok(ActionOutcome {
            new_status,
            new_version: document.version,
            task,
        })
    }
}

/// All request validation. Runs after legality, before any mutation.
fn validate_request(document: &Document, request: &ActionRequest) -> DocflowResult<()> {
    if let Some(comment) = &request.comment {
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(DocflowError::Validation(format!(
                "comment exceeds {} characters",
                MAX_COMMENT_LEN
            )));
        }
    }

    let has_recipients = request
        .recipients
        .as_ref()
        .map(|r| !r.is_empty())
        .unwrap_or(false);

    match request.kind {
        ActionKind::Consult => {
            if !has_recipients {
                return Err(DocflowError::Validation("no recipient selected".into()));
            }
            let mains = request.recipients.as_ref().map(|r| r.main.len()).unwrap_or(0);
            if mains == 0 {
                return Err(DocflowError::Validation(
                    "consult requires a main recipient".into(),
                ));
            }
        }
        ActionKind::Forward | ActionKind::ForwardReceivers => {
            if !has_recipients {
                return Err(DocflowError::Validation("no recipient selected".into()));
            }
            if !document.can_forward {
                return Err(DocflowError::PreconditionFailed(
                    "forwarding is disabled for this document".into(),
                ));
            }
        }
        ActionKind::Delegate => {
            if !has_recipients {
                return Err(DocflowError::Validation("no recipient selected".into()));
            }
            if !document.can_add_user {
                return Err(DocflowError::PreconditionFailed(
                    "adding participants is disabled for this document".into(),
                ));
            }
        }
        ActionKind::Finish => {
            // Business carve-out: Finish is legal from the table's point of
            // view but requires the document to be booked externally.
            if !document.is_booked() {
                return Err(DocflowError::PreconditionFailed(
                    "document has no number in book".into(),
                ));
            }
        }
        _ => {}
    }

    Ok(())
}

/// Where a transition's recipients land, per action kind and status
fn recipient_additions(
    status: DocStatus,
    request: &ActionRequest,
) -> Vec<(TargetList, Recipient)> {
    let Some(selection) = &request.recipients else {
        return Vec::new();
    };

    let mut additions = Vec::with_capacity(selection.len());
    match request.kind {
        // Submission and post-opinion approval: mains become main
        // processors, the rest coordinate
        ActionKind::Forward if matches!(status, DocStatus::Drafted | DocStatus::Returned) => {
            for actor in &selection.main {
                additions.push((TargetList::Main, Recipient::new(actor.clone())));
            }
            for actor in &selection.supporting {
                additions.push((TargetList::Coordinators, Recipient::new(actor.clone())));
            }
        }
        ActionKind::Approve if status == DocStatus::AwaitingOpinion => {
            for actor in &selection.main {
                additions.push((TargetList::Main, Recipient::new(actor.clone())));
            }
            for actor in &selection.supporting {
                additions.push((TargetList::Coordinators, Recipient::new(actor.clone())));
            }
        }
        // Mid-processing forward: one list, chosen by the forward role
        ActionKind::Forward => {
            let target = match request.forward_role {
                Some(ForwardRole::ForInformation) => TargetList::ForInformation,
                _ => TargetList::Coordinators,
            };
            for actor in selection.main.iter().chain(&selection.supporting) {
                additions.push((target, Recipient::new(actor.clone())));
            }
        }
        ActionKind::Consult => {
            for actor in selection.main.iter().chain(&selection.supporting) {
                additions.push((TargetList::Coordinators, Recipient::new(actor.clone())));
            }
        }
        ActionKind::Delegate => {
            for actor in &selection.main {
                additions.push((TargetList::Main, Recipient::via_delegate(actor.clone())));
            }
            for actor in &selection.supporting {
                additions.push((
                    TargetList::Coordinators,
                    Recipient::via_delegate(actor.clone()),
                ));
            }
        }
        ActionKind::ForwardReceivers => {
            for actor in selection.main.iter().chain(&selection.supporting) {
                additions.push((TargetList::ForInformation, Recipient::new(actor.clone())));
            }
        }
        _ => {}
    }
    additions
}
