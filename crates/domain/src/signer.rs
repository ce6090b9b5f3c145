use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A recipient of a `DocumentCollection` who has to view and sign (or reject) it
#[derive(Debug, Clone)]
pub struct Signer {
    pub id: ID,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub status: SignerStatus,
    /// Channel used to notify the signer. `None` means there is no remote
    /// notification for this signer, e.g. when signing in person.
    pub sending_method: Option<SendingMethod>,
    /// Position of the signer in the signing sequence, lowest signs first.
    /// Only meaningful for `SigningMode::OrderedGroupSign`
    pub signing_order: i32,
    /// Timestamp in millis of the last notification sent to this signer,
    /// `None` if nothing has been sent yet
    pub time_last_sent: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignerStatus {
    /// Added to the document but the initial notification has not been sent
    Created,
    Sent,
    Viewed,
    Signed,
    Rejected,
}

impl SignerStatus {
    /// The signer is done with the document and will never act again
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Signed | Self::Rejected)
    }

    /// The signer has received the document and is expected to act on it
    pub fn is_awaiting_signature(&self) -> bool {
        matches!(self, Self::Sent | Self::Viewed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Sent => "sent",
            Self::Viewed => "viewed",
            Self::Signed => "signed",
            Self::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for SignerStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "sent" => Ok(Self::Sent),
            "viewed" => Ok(Self::Viewed),
            "signed" => Ok(Self::Signed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(anyhow::anyhow!("Unknown signer status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SendingMethod {
    Email,
    Sms,
}

impl SendingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }
}

impl std::str::FromStr for SendingMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            _ => Err(anyhow::anyhow!("Unknown sending method: {}", s)),
        }
    }
}

impl Signer {
    pub fn new(name: String, sending_method: Option<SendingMethod>, signing_order: i32) -> Self {
        Self {
            id: Default::default(),
            name,
            email: None,
            phone_number: None,
            status: SignerStatus::Created,
            sending_method,
            signing_order,
            time_last_sent: None,
        }
    }

    /// Address for the given `SendingMethod`, if the signer has one
    pub fn contact_address(&self) -> Option<&str> {
        match self.sending_method? {
            SendingMethod::Email => self.email.as_deref(),
            SendingMethod::Sms => self.phone_number.as_deref(),
        }
    }

    /// Records that a notification was sent at `timestamp`. The timestamp
    /// never moves backwards.
    pub fn mark_sent(&mut self, timestamp: i64) {
        self.time_last_sent = Some(match self.time_last_sent {
            Some(last_sent) if last_sent > timestamp => last_sent,
            _ => timestamp,
        });
    }
}

impl Entity for Signer {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn terminal_and_awaiting_states_are_disjoint() {
        let all = [
            SignerStatus::Created,
            SignerStatus::Sent,
            SignerStatus::Viewed,
            SignerStatus::Signed,
            SignerStatus::Rejected,
        ];
        for status in &all {
            assert!(!(status.is_terminal() && status.is_awaiting_signature()));
        }
        assert!(!SignerStatus::Created.is_terminal());
        assert!(!SignerStatus::Created.is_awaiting_signature());
    }

    #[test]
    fn mark_sent_is_monotonic() {
        let mut signer = Signer::new("Ann".into(), Some(SendingMethod::Email), 0);
        signer.mark_sent(100);
        assert_eq!(signer.time_last_sent, Some(100));
        signer.mark_sent(50);
        assert_eq!(signer.time_last_sent, Some(100));
        signer.mark_sent(200);
        assert_eq!(signer.time_last_sent, Some(200));
    }

    #[test]
    fn contact_address_follows_sending_method() {
        let mut signer = Signer::new("Ann".into(), Some(SendingMethod::Sms), 0);
        signer.email = Some("ann@example.com".into());
        assert_eq!(signer.contact_address(), None);
        signer.phone_number = Some("+4799999999".into());
        assert_eq!(signer.contact_address(), Some("+4799999999"));

        signer.sending_method = None;
        assert_eq!(signer.contact_address(), None);
    }
}
