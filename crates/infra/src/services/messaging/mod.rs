mod log;
mod registry;
mod webhook;

pub use self::log::LogMessageProvider;
pub use registry::{MessageProviderRegistry, MessageProviderType, ProviderFactory};
use serde::Serialize;
use signflow_domain::{MessageType, SendingMethod, ID};
pub use webhook::WebhookMessageProvider;

/// A rendered message ready to be handed over to a message provider
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderMessage {
    pub message_type: MessageType,
    pub sending_method: SendingMethod,
    pub company_id: ID,
    pub document_collection_id: ID,
    pub signer_id: ID,
    pub recipient_name: String,
    pub recipient_address: String,
    pub sender_display_name: String,
    pub subject: String,
    pub body: String,
}

/// Delivers `ReminderMessage`s over one channel
#[async_trait::async_trait]
pub trait IMessageProvider: Send + Sync {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()>;
}
