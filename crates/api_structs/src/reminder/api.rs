use crate::dtos::ReminderPassDTO;
use serde::{Deserialize, Serialize};
use signflow_domain::ReminderPass;

pub mod get_latest_reminder_pass {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder_pass: ReminderPassDTO,
    }

    impl APIResponse {
        pub fn new(pass: ReminderPass) -> Self {
            Self {
                reminder_pass: ReminderPassDTO::new(pass),
            }
        }
    }
}
