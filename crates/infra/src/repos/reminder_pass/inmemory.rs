use super::{IReminderPassRepo, RETAINED_REMINDER_PASSES};
use crate::repos::shared::inmemory_repo::*;
use signflow_domain::ReminderPass;

pub struct InMemoryReminderPassRepo {
    passes: std::sync::Mutex<Vec<ReminderPass>>,
}

impl InMemoryReminderPassRepo {
    pub fn new() -> Self {
        Self {
            passes: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderPassRepo for InMemoryReminderPassRepo {
    async fn insert(&self, pass: &ReminderPass) -> anyhow::Result<()> {
        let mut passes = self.passes.lock().unwrap();
        passes.push(pass.clone());
        if passes.len() > RETAINED_REMINDER_PASSES {
            passes.sort_by_key(|p| std::cmp::Reverse(p.finished_at));
            passes.truncate(RETAINED_REMINDER_PASSES);
        }
        Ok(())
    }

    async fn find_latest(&self) -> Option<ReminderPass> {
        find_by(&self.passes, |_| true)
            .into_iter()
            .max_by_key(|p| p.finished_at)
    }
}
