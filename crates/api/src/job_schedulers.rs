use crate::{reminder::run_reminder_pass::RunReminderPassUseCase, shared::usecase::execute};
use actix_web::rt::time::{interval_at, Instant};
use signflow_infra::SignflowContext;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tracing::{info, warn};

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Makes sure that at most one reminder pass runs at a time. Two overlapping
/// passes could both find the same `Signer` due and remind it twice.
#[derive(Clone, Default)]
pub struct SingleFlight {
    running: Arc<AtomicBool>,
}

/// Held while a pass is running, releases the `SingleFlight` when dropped
pub struct SingleFlightPermit {
    running: Arc<AtomicBool>,
}

impl SingleFlight {
    pub fn try_acquire(&self) -> Option<SingleFlightPermit> {
        if self.running.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(SingleFlightPermit {
            running: self.running.clone(),
        })
    }
}

impl Drop for SingleFlightPermit {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

pub fn start_sign_reminders_job(ctx: SignflowContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);
        let period = Duration::from_secs(ctx.config.reminders.pass_interval_secs);

        let mut pass_interval = interval_at(start, period);
        let single_flight = SingleFlight::default();
        loop {
            pass_interval.tick().await;
            let permit = match single_flight.try_acquire() {
                Some(permit) => permit,
                None => {
                    warn!("Previous reminder pass is still running, skipping this run");
                    continue;
                }
            };
            let context = ctx.clone();
            actix_web::rt::spawn(async move {
                send_sign_reminders(context).await;
                drop(permit);
            });
        }
    });
}

async fn send_sign_reminders(context: SignflowContext) {
    if let Ok(pass) = execute(RunReminderPassUseCase, &context).await {
        info!(
            "Sign reminders sent: {}, failed: {}, took {} ms",
            pass.summary.reminders_sent,
            pass.summary.dispatch_failures,
            pass.finished_at - pass.started_at
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(50 * 1000, 5), 5);
        assert_eq!(get_start_delay(50 * 1000, 10), 60);
        assert_eq!(get_start_delay(50 * 1000, 15), 55);
        assert_eq!(get_start_delay(60 * 1000, 60), 60);
        assert_eq!(get_start_delay(60 * 1000, 10), 50);
        assert_eq!(get_start_delay(59 * 1000, 0), 1);
        assert_eq!(get_start_delay(59 * 1000, 1), 60);
    }

    #[test]
    fn single_flight_allows_one_pass_at_a_time() {
        let single_flight = SingleFlight::default();
        let permit = single_flight.try_acquire();
        assert!(permit.is_some());
        assert!(single_flight.try_acquire().is_none());
        assert!(single_flight.clone().try_acquire().is_none());

        drop(permit);
        assert!(single_flight.try_acquire().is_some());
    }
}
