use serde::{Deserialize, Serialize};
use signflow_domain::{ReminderPass, ReminderPassSummary, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPassDTO {
    pub id: ID,
    pub started_at: i64,
    pub finished_at: i64,
    pub summary: ReminderPassSummary,
}

impl ReminderPassDTO {
    pub fn new(pass: ReminderPass) -> Self {
        Self {
            id: pass.id,
            started_at: pass.started_at,
            finished_at: pass.finished_at,
            summary: pass.summary,
        }
    }
}
