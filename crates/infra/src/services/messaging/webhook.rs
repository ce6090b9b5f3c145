use super::{IMessageProvider, ReminderMessage};
use crate::config::MessagingConfig;
use reqwest::Client;
use signflow_domain::SendingMethod;
use std::sync::Arc;

const WEBHOOK_KEY_HEADER: &str = "signflow-webhook-key";

/// Provider that hands messages over to an external gateway (mail or sms service)
/// by posting them as json
pub struct WebhookMessageProvider {
    client: Client,
    url: String,
    key: String,
}

impl WebhookMessageProvider {
    pub fn new(url: String, key: String) -> Self {
        Self {
            client: Client::new(),
            url,
            key,
        }
    }

    pub fn create(
        sending_method: SendingMethod,
        config: &MessagingConfig,
    ) -> anyhow::Result<Arc<dyn IMessageProvider>> {
        let url = config.webhook_url(sending_method).ok_or_else(|| {
            anyhow::anyhow!("No webhook url configured for {}", sending_method.as_str())
        })?;
        Ok(Arc::new(Self::new(url.to_string(), config.webhook_key.clone())))
    }
}

#[async_trait::async_trait]
impl IMessageProvider for WebhookMessageProvider {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        self.client
            .post(&self.url)
            .header(WEBHOOK_KEY_HEADER, &self.key)
            .json(message)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
