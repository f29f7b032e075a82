//! The routing table
//!
//! One match expression replaces the notification `switch` that lived in
//! a UI callback. Dispatch is on `(category, status)`; the rejected-intake
//! status additionally disambiguates on the module the document currently
//! belongs to. Everything unmatched lands on the generic main-detail view
//! — availability over precision, since new statuses may appear before
//! the router is updated.

use crate::{Destination, DocCategory, ModuleCode, NotificationEvent, View};
use docflow_types::DocStatus;

/// Pure event-to-destination resolution
pub struct RoutingResolver;

impl RoutingResolver {
    /// Resolve an event to a destination. Deterministic and
    /// side-effect-free; never fails.
    pub fn resolve(event: &NotificationEvent) -> Destination {
        let view = Self::view_for(event);
        Destination::new(view, event.doc_id.clone())
    }

    fn view_for(event: &NotificationEvent) -> View {
        // Tasks carry no drafting/issuance pipeline; only their processing
        // statuses have dedicated screens.
        if event.category == DocCategory::Task {
            return match event.status {
                DocStatus::MainProcessing | DocStatus::Coordinating => View::ProcessingDesk {
                    delegated: event.via_delegate,
                },
                DocStatus::ForInformation => View::InformationFeed,
                _ => View::MainDetail,
            };
        }

        match event.status {
            DocStatus::Drafted | DocStatus::Returned => View::DraftEditor,
            DocStatus::PendingApproval => View::ApprovalQueue,
            DocStatus::AwaitingOpinion => View::OpinionQueue,
            DocStatus::MainProcessing | DocStatus::Coordinating => View::ProcessingDesk {
                delegated: event.via_delegate,
            },
            DocStatus::ForInformation => View::InformationFeed,
            DocStatus::PendingIssuance => View::IssuanceQueue,
            DocStatus::Issued => View::IssuedList,
            DocStatus::RecallRequested | DocStatus::Recalled => View::RecallQueue,
            DocStatus::AcceptancePending
            | DocStatus::AcceptanceApproved
            | DocStatus::AcceptanceRejected => View::AcceptanceReview,
            DocStatus::RejectedIntake => match event.module {
                Some(ModuleCode::Issued) => View::IssuedDetail,
                Some(ModuleCode::Handling) => View::HandlingDetail,
                None => View::MainDetail,
            },
            // Completed and anything the table does not know yet
            _ => View::MainDetail,
        }
    }
}
