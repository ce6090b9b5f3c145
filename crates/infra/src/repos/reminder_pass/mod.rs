mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderPassRepo;
pub use postgres::PostgresReminderPassRepo;
use signflow_domain::ReminderPass;

/// Number of passes kept, older ones are pruned on insert
pub const RETAINED_REMINDER_PASSES: usize = 500;

#[async_trait::async_trait]
pub trait IReminderPassRepo: Send + Sync {
    /// Stores the pass and prunes all but the `RETAINED_REMINDER_PASSES` latest ones
    async fn insert(&self, pass: &ReminderPass) -> anyhow::Result<()>;
    /// The pass that finished last
    async fn find_latest(&self) -> Option<ReminderPass>;
}

#[cfg(test)]
mod tests {
    use crate::tests::create_contexts;
    use signflow_domain::{ReminderPass, ReminderPassSummary};

    #[tokio::test]
    async fn finds_latest_pass() {
        for ctx in create_contexts().await {
            let far_future = 4_000_000_000_000;
            let older = ReminderPass::new(far_future, far_future + 10, Default::default());
            let newer = ReminderPass::new(
                far_future + 100,
                far_future + 200,
                ReminderPassSummary {
                    reminders_sent: 3,
                    ..Default::default()
                },
            );
            assert!(ctx.repos.reminder_passes.insert(&newer).await.is_ok());
            assert!(ctx.repos.reminder_passes.insert(&older).await.is_ok());

            let latest = ctx.repos.reminder_passes.find_latest().await.unwrap();
            assert_eq!(latest, newer);
        }
    }
}
