mod get_latest_reminder_pass;
mod orchestrator;
pub mod run_reminder_pass;

use actix_web::web;
use get_latest_reminder_pass::get_latest_reminder_pass_controller;
pub use orchestrator::ReminderOrchestrator;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminders/passes/latest",
        web::get().to(get_latest_reminder_pass_controller),
    );
}
