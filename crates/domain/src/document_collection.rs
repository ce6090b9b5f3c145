use crate::{
    shared::entity::{Entity, ID},
    Signer,
};
use serde::{Deserialize, Serialize};

/// A set of documents sent out for signature by a `User` (the sender)
/// to one or more `Signer`s. Also known as an envelope.
#[derive(Debug, Clone)]
pub struct DocumentCollection {
    pub id: ID,
    pub company_id: ID,
    /// The `User` that sent the documents
    pub owner_id: ID,
    pub name: String,
    pub mode: SigningMode,
    pub status: DocumentCollectionStatus,
    pub notifications: NotificationSettings,
    pub signers: Vec<Signer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SigningMode {
    SingleSign,
    /// Every signer acts independently
    GroupSign,
    /// Signers act strictly in their `signing_order`
    OrderedGroupSign,
}

impl SigningMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleSign => "singleSign",
            Self::GroupSign => "groupSign",
            Self::OrderedGroupSign => "orderedGroupSign",
        }
    }
}

impl std::str::FromStr for SigningMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singleSign" => Ok(Self::SingleSign),
            "groupSign" => Ok(Self::GroupSign),
            "orderedGroupSign" => Ok(Self::OrderedGroupSign),
            _ => Err(anyhow::anyhow!("Unknown signing mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentCollectionStatus {
    Draft,
    Sent,
    Viewed,
    Signed,
    Rejected,
    Deleted,
}

impl DocumentCollectionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Signed | Self::Rejected | Self::Deleted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Viewed => "viewed",
            Self::Signed => "signed",
            Self::Rejected => "rejected",
            Self::Deleted => "deleted",
        }
    }
}

impl std::str::FromStr for DocumentCollectionStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "sent" => Ok(Self::Sent),
            "viewed" => Ok(Self::Viewed),
            "signed" => Ok(Self::Signed),
            "rejected" => Ok(Self::Rejected),
            "deleted" => Ok(Self::Deleted),
            _ => Err(anyhow::anyhow!("Unknown document collection status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub should_send_for_signing: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            should_send_for_signing: true,
        }
    }
}

impl DocumentCollection {
    pub fn new(company_id: ID, owner_id: ID, mode: SigningMode) -> Self {
        Self {
            id: Default::default(),
            company_id,
            owner_id,
            name: String::new(),
            mode,
            status: DocumentCollectionStatus::Sent,
            notifications: Default::default(),
            signers: Vec::new(),
        }
    }

    /// Whether the collection is still in flight and wants signing notifications
    pub fn accepts_reminders(&self) -> bool {
        !self.status.is_terminal() && self.notifications.should_send_for_signing
    }

    pub fn find_signer(&self, signer_id: &ID) -> Option<&Signer> {
        self.signers.iter().find(|s| &s.id == signer_id)
    }

    pub fn find_signer_mut(&mut self, signer_id: &ID) -> Option<&mut Signer> {
        self.signers.iter_mut().find(|s| &s.id == signer_id)
    }
}

impl Entity for DocumentCollection {
    fn id(&self) -> &ID {
        &self.id
    }
}
