use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A `Company` is the tenant that owns `User`s and their `DocumentCollection`s.
/// All reminder work for one `Company` is independent of every other `Company`.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: ID,
    pub name: String,
    pub status: CompanyStatus,
    pub reminder_policy: ReminderPolicy,
    pub settings: CompanySettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompanyStatus {
    Active,
    Suspended,
    Deleted,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Deleted => "deleted",
        }
    }
}

impl std::str::FromStr for CompanyStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "deleted" => Ok(Self::Deleted),
            _ => Err(anyhow::anyhow!("Unknown company status: {}", s)),
        }
    }
}

/// Company wide settings for repeat signing notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPolicy {
    /// When disabled no reminders are sent for any `User` of the `Company`
    pub enabled: bool,
    /// Minimum number of whole days between two reminders to the same signer
    pub frequency_days: i64,
    /// Lets every `User` decide with their own `ReminderPreference`
    /// instead of the `Company` wide values
    pub sender_controls_settings: bool,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            frequency_days: 3,
            sender_controls_settings: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    /// Name shown as the sender of outgoing messages. Falls back to the `Company` name
    pub message_sender_name: Option<String>,
    /// Optional text appended to every outgoing message
    pub message_signature: Option<String>,
}

impl Company {
    pub fn new(name: String) -> Self {
        Self {
            id: Default::default(),
            name,
            status: CompanyStatus::Active,
            reminder_policy: Default::default(),
            settings: Default::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CompanyStatus::Active
    }

    pub fn display_name(&self) -> &str {
        self.settings
            .message_sender_name
            .as_deref()
            .unwrap_or(&self.name)
    }
}

impl Entity for Company {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_creates_active_company_with_reminders_disabled() {
        let company = Company::new("Acme".into());
        assert!(company.is_active());
        assert!(!company.reminder_policy.enabled);
    }

    #[test]
    fn display_name_prefers_sender_name_setting() {
        let mut company = Company::new("Acme".into());
        assert_eq!(company.display_name(), "Acme");
        company.settings.message_sender_name = Some("Acme Legal".into());
        assert_eq!(company.display_name(), "Acme Legal");
    }

    #[test]
    fn status_roundtrips_through_str() {
        for status in &[
            CompanyStatus::Active,
            CompanyStatus::Suspended,
            CompanyStatus::Deleted,
        ] {
            assert_eq!(status.as_str().parse::<CompanyStatus>().unwrap(), *status);
        }
        assert!("archived".parse::<CompanyStatus>().is_err());
    }
}
