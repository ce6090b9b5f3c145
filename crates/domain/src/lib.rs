mod company;
mod document_collection;
pub mod reminder;
mod shared;
mod signer;
mod user;

pub use company::{Company, CompanySettings, CompanyStatus, ReminderPolicy};
pub use document_collection::{
    DocumentCollection, DocumentCollectionStatus, NotificationSettings, SigningMode,
};
pub use reminder::{
    EffectiveReminderPolicy, MessageType, PolicySource, ReminderPass, ReminderPassSummary,
};
pub use shared::entity::{Entity, ID};
pub use signer::{SendingMethod, Signer, SignerStatus};
pub use user::{ReminderPreference, User};
