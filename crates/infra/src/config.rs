use crate::services::MessageProviderType;
use signflow_domain::SendingMethod;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    pub reminders: ReminderConfig,
    pub messaging: MessagingConfig,
}

#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Whether the periodic reminder job should be started
    pub job_enabled: bool,
    /// Seconds between two reminder passes
    pub pass_interval_secs: u64,
    /// Number of `Company`s read per page when enumerating tenants
    pub company_page_size: usize,
    /// Number of `Company`s processed at the same time within one pass
    pub tenant_concurrency: usize,
    /// Upper bound for a single dispatch. A dispatch exceeding it counts as failed.
    pub dispatch_timeout_secs: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            job_enabled: true,
            pass_interval_secs: 60 * 60,
            company_page_size: 100,
            tenant_concurrency: 4,
            dispatch_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessagingConfig {
    pub email_provider: MessageProviderType,
    pub sms_provider: MessageProviderType,
    pub email_webhook_url: Option<String>,
    pub sms_webhook_url: Option<String>,
    /// Sent with every webhook request so that the receiver can verify the sender
    pub webhook_key: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            email_provider: MessageProviderType::Log,
            sms_provider: MessageProviderType::Log,
            email_webhook_url: None,
            sms_webhook_url: None,
            webhook_key: String::new(),
        }
    }
}

impl MessagingConfig {
    pub fn provider_type(&self, method: SendingMethod) -> MessageProviderType {
        match method {
            SendingMethod::Email => self.email_provider,
            SendingMethod::Sms => self.sms_provider,
        }
    }

    pub fn webhook_url(&self, method: SendingMethod) -> Option<&str> {
        match method {
            SendingMethod::Email => self.email_webhook_url.as_deref(),
            SendingMethod::Sms => self.sms_webhook_url.as_deref(),
        }
    }
}

fn parse_env_or<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn webhook_url_from_env(name: &str) -> Option<String> {
    let url = std::env::var(name).ok()?;
    match url::Url::parse(&url) {
        Ok(parsed) if ["https", "http"].contains(&parsed.scheme()) => Some(url),
        _ => {
            warn!("The given {}: {} is not a valid http(s) url, ignoring it.", name, url);
            None
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", 5000);

        let defaults = ReminderConfig::default();
        let reminders = ReminderConfig {
            job_enabled: parse_env_or("REMINDER_JOB_ENABLED", defaults.job_enabled),
            pass_interval_secs: parse_env_or(
                "REMINDER_PASS_INTERVAL_SECS",
                defaults.pass_interval_secs,
            )
            .max(1),
            company_page_size: parse_env_or(
                "REMINDER_COMPANY_PAGE_SIZE",
                defaults.company_page_size,
            )
            .max(1),
            tenant_concurrency: parse_env_or(
                "REMINDER_TENANT_CONCURRENCY",
                defaults.tenant_concurrency,
            )
            .max(1),
            dispatch_timeout_secs: parse_env_or(
                "REMINDER_DISPATCH_TIMEOUT_SECS",
                defaults.dispatch_timeout_secs,
            )
            .max(1),
        };

        let messaging = MessagingConfig {
            email_provider: parse_env_or("EMAIL_PROVIDER", MessageProviderType::Log),
            sms_provider: parse_env_or("SMS_PROVIDER", MessageProviderType::Log),
            email_webhook_url: webhook_url_from_env("EMAIL_WEBHOOK_URL"),
            sms_webhook_url: webhook_url_from_env("SMS_WEBHOOK_URL"),
            webhook_key: std::env::var("MESSAGE_WEBHOOK_KEY").unwrap_or_default(),
        };
        info!(
            "Message providers configured. Email: {}, sms: {}",
            messaging.email_provider, messaging.sms_provider
        );

        Self {
            port,
            reminders,
            messaging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
