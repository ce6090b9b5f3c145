mod candidates;
mod frequency;
mod pass;
mod policy;

pub use candidates::select_candidate_signers;
pub use frequency::{is_reminder_due, DAY_MILLIS};
pub use pass::{ReminderPass, ReminderPassSummary};
pub use policy::{resolve_effective_policy, EffectiveReminderPolicy, PolicySource};
use serde::{Deserialize, Serialize};

/// The kind of message sent to a `Signer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    /// The first notification asking the signer to sign
    SignRequest,
    /// A repeat notification to a signer that has not acted yet
    SignReminder,
}
