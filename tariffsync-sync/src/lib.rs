//! Tariff synchronization.
//!
//! - [`SyncEngine`]: applies parsed change sets to the store in bounded atomic batches
//! - [`Synchronizer`]: lists, orders, filters and applies one category's files
//! - [`MaintenanceScheduler`]: one immediate run, then one per night
//! - [`TariffMaintenance`]: the production job wiring key import to the synchronizer
//!
//! ```no_run
//! use std::sync::Arc;
//! use tariffsync_store::TariffStore;
//! use tariffsync_sync::{MaintenanceScheduler, SyncConfig, TariffMaintenance};
//!
//! # async fn start() -> tariffsync_sync::SyncResult<()> {
//! let config = SyncConfig::default();
//! let store = TariffStore::open(&config.database_path)?;
//! let run_time = config.daily_run_time;
//! let job = TariffMaintenance::new(config, store)?;
//! MaintenanceScheduler::new(Arc::new(job), run_time).run().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
mod error;
pub mod job;
pub mod report;
pub mod scheduler;
pub mod synchronizer;

pub use config::SyncConfig;
pub use engine::{ApplyStats, BatchExecutor, EngineConfig, SyncEngine, plan_record};
pub use error::{SyncError, SyncResult};
pub use job::TariffMaintenance;
pub use report::{CategoryFailure, CategoryReport, RunReport};
pub use scheduler::{Clock, MaintenanceJob, MaintenanceScheduler, SchedulerState, next_run_after};
pub use synchronizer::Synchronizer;
