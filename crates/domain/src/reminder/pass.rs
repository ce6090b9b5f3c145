use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// Counters collected during one reminder pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPassSummary {
    /// Pages of `Company`s that could not be read, ending the enumeration early
    pub company_pages_failed: u64,
    pub companies_scanned: u64,
    /// Companies whose reads failed so that their work was aborted
    pub companies_failed: u64,
    pub envelopes_scanned: u64,
    /// Envelopes skipped because the effective policy disabled reminders
    /// or the sender could not be found
    pub envelopes_skipped_by_policy: u64,
    /// Candidate signers that were reminded too recently
    pub signers_not_due: u64,
    pub reminders_sent: u64,
    pub dispatch_failures: u64,
}

impl ReminderPassSummary {
    pub fn merge(&mut self, other: &Self) {
        self.company_pages_failed += other.company_pages_failed;
        self.companies_scanned += other.companies_scanned;
        self.companies_failed += other.companies_failed;
        self.envelopes_scanned += other.envelopes_scanned;
        self.envelopes_skipped_by_policy += other.envelopes_skipped_by_policy;
        self.signers_not_due += other.signers_not_due;
        self.reminders_sent += other.reminders_sent;
        self.dispatch_failures += other.dispatch_failures;
    }
}

/// A finished reminder pass, kept for monitoring
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderPass {
    pub id: ID,
    pub started_at: i64,
    pub finished_at: i64,
    pub summary: ReminderPassSummary,
}

impl ReminderPass {
    pub fn new(started_at: i64, finished_at: i64, summary: ReminderPassSummary) -> Self {
        Self {
            id: Default::default(),
            started_at,
            finished_at,
            summary,
        }
    }
}

impl Entity for ReminderPass {
    fn id(&self) -> &ID {
        &self.id
    }
}
