//! Nightly maintenance scheduling.
//!
//! One run starts immediately, then one per day at a fixed local time. Runs
//! never overlap, and a failed run is logged without stopping the loop.

use crate::error::SyncResult;
use crate::report::RunReport;
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

/// Work performed by each scheduled run.
#[async_trait]
pub trait MaintenanceJob: Send + Sync {
    async fn run(&self) -> SyncResult<RunReport>;
}

/// Source of the current local wall-clock time.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// First instant strictly after `now` whose time of day is `at`.
pub fn next_run_after(now: NaiveDateTime, at: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(at);
    if today > now {
        today
    } else {
        today + TimeDelta::days(1)
    }
}

pub struct MaintenanceScheduler {
    job: Arc<dyn MaintenanceJob>,
    run_time: NaiveTime,
    clock: Clock,
    state: RwLock<SchedulerState>,
    run_lock: Mutex<()>,
}

impl MaintenanceScheduler {
    pub fn new(job: Arc<dyn MaintenanceJob>, run_time: NaiveTime) -> Self {
        Self {
            job,
            run_time,
            clock: Arc::new(|| Local::now().naive_local()),
            state: RwLock::new(SchedulerState::Idle),
            run_lock: Mutex::new(()),
        }
    }

    /// Replaces the wall clock (for testing).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn state(&self) -> SchedulerState {
        *self.state.read().await
    }

    pub fn run_time(&self) -> NaiveTime {
        self.run_time
    }

    /// Performs one run, waiting for any run already in progress.
    ///
    /// Returns the report, or `None` if the job failed.
    pub async fn run_once(&self) -> Option<RunReport> {
        let _guard = self.run_lock.lock().await;
        *self.state.write().await = SchedulerState::Running;
        info!("maintenance run started");

        let result = self.job.run().await;

        *self.state.write().await = SchedulerState::Idle;
        match result {
            Ok(report) => {
                report.log_summary();
                Some(report)
            }
            Err(e) => {
                error!(error = %e, "maintenance run failed");
                None
            }
        }
    }

    /// Runs immediately, then nightly, forever.
    pub async fn run(&self) {
        loop {
            self.run_once().await;

            let now = (self.clock)();
            let next = next_run_after(now, self.run_time);
            let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
            info!(next_run = %next, wait_secs = wait.as_secs(), "next maintenance run scheduled");
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn later_today_is_kept() {
        let run_time = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        assert_eq!(next_run_after(at(15, 12, 0), run_time), at(15, 23, 30));
    }

    #[test]
    fn passed_time_rolls_to_tomorrow() {
        let run_time = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        assert_eq!(next_run_after(at(15, 23, 45), run_time), at(16, 23, 30));
        assert_eq!(next_run_after(at(15, 23, 30), run_time), at(16, 23, 30));
    }

    #[test]
    fn month_end_rolls_over() {
        let run_time = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
        assert_eq!(
            next_run_after(at(31, 2, 0), run_time),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(1, 0, 0).unwrap()
        );
    }
}
