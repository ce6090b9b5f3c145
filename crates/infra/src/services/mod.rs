mod dispatcher;
mod messaging;

pub use dispatcher::{
    DispatchError, DispatchOutcome, DispatchRequest, IReminderDispatcher, NotificationDispatcher,
};
pub use messaging::{
    IMessageProvider, LogMessageProvider, MessageProviderRegistry, MessageProviderType,
    ProviderFactory, ReminderMessage, WebhookMessageProvider,
};
