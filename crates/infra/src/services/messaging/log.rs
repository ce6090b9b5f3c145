use super::{IMessageProvider, ReminderMessage};
use crate::config::MessagingConfig;
use signflow_domain::SendingMethod;
use std::sync::Arc;
use tracing::info;

/// Provider that does not deliver anything, useful for local runs
pub struct LogMessageProvider {
    sending_method: SendingMethod,
}

impl LogMessageProvider {
    pub fn create(
        sending_method: SendingMethod,
        _config: &MessagingConfig,
    ) -> anyhow::Result<Arc<dyn IMessageProvider>> {
        Ok(Arc::new(Self { sending_method }))
    }
}

#[async_trait::async_trait]
impl IMessageProvider for LogMessageProvider {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        info!(
            "[{}] {:?} to signer: {} of document collection: {} with subject: {}",
            self.sending_method.as_str(),
            message.message_type,
            message.signer_id,
            message.document_collection_id,
            message.subject
        );
        Ok(())
    }
}
