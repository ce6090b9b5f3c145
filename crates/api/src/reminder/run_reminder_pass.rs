use super::orchestrator::ReminderOrchestrator;
use crate::shared::usecase::{Subscriber, UseCase};
use signflow_domain::ReminderPass;
use signflow_infra::SignflowContext;
use tracing::error;

/// Runs one pass of sign reminders over every `Company` with reminders enabled
#[derive(Debug)]
pub struct RunReminderPassUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for RunReminderPassUseCase {
    type Response = ReminderPass;

    type Error = UseCaseError;

    const NAME: &'static str = "RunReminderPass";

    async fn execute(&mut self, ctx: &SignflowContext) -> Result<Self::Response, Self::Error> {
        let started_at = ctx.sys.get_timestamp_millis();
        let summary = ReminderOrchestrator::from_context(ctx)
            .run_reminder_pass()
            .await;
        let finished_at = ctx.sys.get_timestamp_millis();

        Ok(ReminderPass::new(started_at, finished_at, summary))
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(StoreReminderPassSubscriber)]
    }
}

/// Keeps the result of every pass so that it can be monitored
pub struct StoreReminderPassSubscriber;

#[async_trait::async_trait(?Send)]
impl Subscriber<RunReminderPassUseCase> for StoreReminderPassSubscriber {
    async fn notify(&self, pass: &ReminderPass, ctx: &SignflowContext) {
        if let Err(e) = ctx.repos.reminder_passes.insert(pass).await {
            error!("Unable to store reminder pass: {:?}. Error: {:?}", pass, e);
        }
    }
}
