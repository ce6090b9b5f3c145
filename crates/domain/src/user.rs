use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A `User` belongs to exactly one `Company` and is the sender of
/// the `DocumentCollection`s they own.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub company_id: ID,
    pub name: String,
    pub email: String,
    pub reminder_preference: ReminderPreference,
}

/// The reminder settings of a single `User`. These are only used when the
/// `Company` lets the senders control the settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPreference {
    pub notify_enabled: bool,
    pub frequency_days: i64,
}

impl Default for ReminderPreference {
    fn default() -> Self {
        Self {
            notify_enabled: true,
            frequency_days: 3,
        }
    }
}

impl User {
    pub fn new(company_id: ID) -> Self {
        Self {
            id: Default::default(),
            company_id,
            name: String::new(),
            email: String::new(),
            reminder_preference: Default::default(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
