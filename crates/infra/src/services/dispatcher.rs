use super::messaging::{MessageProviderRegistry, ReminderMessage};
use crate::{repos::IDocumentCollectionRepo, system::ISys};
use signflow_domain::{
    Company, DocumentCollection, MessageType, SendingMethod, Signer, User,
};
use std::sync::Arc;
use thiserror::Error;

/// Everything needed to notify one `Signer` of one `DocumentCollection`
#[derive(Debug, Clone, Copy)]
pub struct DispatchRequest<'a> {
    pub collection: &'a DocumentCollection,
    pub signer: &'a Signer,
    pub sender: &'a User,
    pub company: &'a Company,
    pub is_reminder: bool,
    pub message_type: MessageType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    /// The new time last sent of the `Signer`
    pub sent_at: i64,
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Signer has no sending method")]
    NoDeliveryChannel,
    #[error("Signer has no address for sending method: {0:?}")]
    MissingContactAddress(SendingMethod),
    #[error("No message provider is configured for sending method: {0:?}")]
    ProviderNotConfigured(SendingMethod),
    #[error("Message delivery failed: {0}")]
    Delivery(anyhow::Error),
    #[error("Dispatch did not complete within {0} seconds")]
    Timeout(u64),
    #[error("Message was sent but storing the time last sent failed: {0}")]
    Storage(anyhow::Error),
}

/// Sends a notification to a `Signer` and records when it was sent.
///
/// On success the time last sent of the `Signer` has been advanced. On failure
/// it must be left untouched so that the `Signer` is picked up by a later pass.
#[async_trait::async_trait]
pub trait IReminderDispatcher: Send + Sync {
    async fn dispatch<'a>(
        &self,
        request: DispatchRequest<'a>,
    ) -> Result<DispatchOutcome, DispatchError>;
}

pub struct NotificationDispatcher {
    providers: MessageProviderRegistry,
    collections: Arc<dyn IDocumentCollectionRepo>,
    sys: Arc<dyn ISys>,
}

impl NotificationDispatcher {
    pub fn new(
        providers: MessageProviderRegistry,
        collections: Arc<dyn IDocumentCollectionRepo>,
        sys: Arc<dyn ISys>,
    ) -> Self {
        Self {
            providers,
            collections,
            sys,
        }
    }
}

fn render_message(
    request: &DispatchRequest<'_>,
    sending_method: SendingMethod,
    recipient_address: &str,
) -> ReminderMessage {
    let collection_name = if request.collection.name.is_empty() {
        "Your documents"
    } else {
        request.collection.name.as_str()
    };
    let sender_name = if request.sender.name.is_empty() {
        request.company.display_name()
    } else {
        request.sender.name.as_str()
    };
    let subject = if request.is_reminder {
        format!("Reminder: {} is waiting for your signature", collection_name)
    } else {
        format!("{} has sent you documents to sign", sender_name)
    };
    let mut body = format!(
        "Hi {},\n\n{} is waiting for you to sign \"{}\".",
        request.signer.name, sender_name, collection_name
    );
    if let Some(signature) = &request.company.settings.message_signature {
        body.push_str("\n\n");
        body.push_str(signature);
    }

    ReminderMessage {
        message_type: request.message_type,
        sending_method,
        company_id: request.company.id.clone(),
        document_collection_id: request.collection.id.clone(),
        signer_id: request.signer.id.clone(),
        recipient_name: request.signer.name.clone(),
        recipient_address: recipient_address.to_string(),
        sender_display_name: request.company.display_name().to_string(),
        subject,
        body,
    }
}

#[async_trait::async_trait]
impl IReminderDispatcher for NotificationDispatcher {
    async fn dispatch<'a>(
        &self,
        request: DispatchRequest<'a>,
    ) -> Result<DispatchOutcome, DispatchError> {
        let sending_method = request
            .signer
            .sending_method
            .ok_or(DispatchError::NoDeliveryChannel)?;
        let address = request
            .signer
            .contact_address()
            .ok_or(DispatchError::MissingContactAddress(sending_method))?;
        let provider = self
            .providers
            .get(sending_method)
            .ok_or(DispatchError::ProviderNotConfigured(sending_method))?;

        let message = render_message(&request, sending_method, address);
        provider
            .send(&message)
            .await
            .map_err(DispatchError::Delivery)?;

        let sent_at = self.sys.get_timestamp_millis();
        self.collections
            .set_signer_time_last_sent(&request.collection.id, &request.signer.id, sent_at)
            .await
            .map_err(DispatchError::Storage)?;

        Ok(DispatchOutcome { sent_at })
    }
}
