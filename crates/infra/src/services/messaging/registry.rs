use super::{IMessageProvider, LogMessageProvider, WebhookMessageProvider};
use crate::config::MessagingConfig;
use signflow_domain::SendingMethod;
use std::{collections::HashMap, fmt::Display, str::FromStr, sync::Arc};
use tracing::error;

/// Builds the provider for one `SendingMethod` from the configuration
pub type ProviderFactory =
    fn(SendingMethod, &MessagingConfig) -> anyhow::Result<Arc<dyn IMessageProvider>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageProviderType {
    /// Posts the message as json to a configured url
    Webhook,
    /// Only writes the message to the log
    Log,
}

impl MessageProviderType {
    pub fn factory(&self) -> ProviderFactory {
        match self {
            Self::Webhook => WebhookMessageProvider::create,
            Self::Log => LogMessageProvider::create,
        }
    }
}

impl FromStr for MessageProviderType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "webhook" => Ok(Self::Webhook),
            "log" => Ok(Self::Log),
            _ => Err(anyhow::anyhow!("Unknown message provider: {}", s)),
        }
    }
}

impl Display for MessageProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Webhook => write!(f, "webhook"),
            Self::Log => write!(f, "log"),
        }
    }
}

/// The message provider to use for every `SendingMethod`
#[derive(Clone, Default)]
pub struct MessageProviderRegistry {
    providers: HashMap<SendingMethod, Arc<dyn IMessageProvider>>,
}

impl MessageProviderRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates the configured provider for every `SendingMethod`. A provider that
    /// cannot be created is left out and dispatches over that channel will fail.
    pub fn from_config(config: &MessagingConfig) -> Self {
        let mut registry = Self::new();
        for method in &[SendingMethod::Email, SendingMethod::Sms] {
            let provider_type = config.provider_type(*method);
            match provider_type.factory()(*method, config) {
                Ok(provider) => registry.register(*method, provider),
                Err(e) => error!(
                    "Unable to create {} message provider for {}: {:?}",
                    provider_type,
                    method.as_str(),
                    e
                ),
            }
        }
        registry
    }

    pub fn register(&mut self, method: SendingMethod, provider: Arc<dyn IMessageProvider>) {
        self.providers.insert(method, provider);
    }

    pub fn get(&self, method: SendingMethod) -> Option<Arc<dyn IMessageProvider>> {
        self.providers.get(&method).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_types() {
        assert_eq!(
            "webhook".parse::<MessageProviderType>().unwrap(),
            MessageProviderType::Webhook
        );
        assert_eq!(
            "LOG".parse::<MessageProviderType>().unwrap(),
            MessageProviderType::Log
        );
        assert!("smtp".parse::<MessageProviderType>().is_err());
    }

    #[test]
    fn registers_log_providers_by_default() {
        let registry = MessageProviderRegistry::from_config(&MessagingConfig::default());
        assert!(registry.get(SendingMethod::Email).is_some());
        assert!(registry.get(SendingMethod::Sms).is_some());
    }

    #[test]
    fn leaves_out_webhook_provider_without_url() {
        let config = MessagingConfig {
            sms_provider: MessageProviderType::Webhook,
            email_provider: MessageProviderType::Webhook,
            email_webhook_url: Some("https://example.com/email".into()),
            ..Default::default()
        };
        let registry = MessageProviderRegistry::from_config(&config);
        assert!(registry.get(SendingMethod::Email).is_some());
        assert!(registry.get(SendingMethod::Sms).is_none());
    }
}
