//! Runtime configuration for a synchronization deployment.

use crate::engine::EngineConfig;
use crate::error::{SyncError, SyncResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tariffsync_filedist::DistributionCategory;

pub const DEFAULT_PUBLIC_KEY_URL: &str =
    "https://distr.tullverket.se/tulltaxan/Tulltaxan_Fildistribution.asc";
pub const DEFAULT_TOT_URL: &str = "https://distr.tullverket.se/tulltaxan/xml/tot/";
pub const DEFAULT_DIF_URL: &str = "https://distr.tullverket.se/tulltaxan/xml/dif/";
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Everything a run needs besides the store handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// SQLite database file.
    pub database_path: String,
    /// Armored public key of the distribution authority.
    pub public_key_url: String,
    /// Feeds to synchronize, processed in this order.
    pub categories: Vec<DistributionCategory>,
    /// Extension of signed files on listing pages.
    pub signed_extension: String,
    /// Local wall-clock time of the nightly run, `HH:MM`.
    #[serde(with = "run_time")]
    pub daily_run_time: NaiveTime,
    /// Mutations per atomic store batch.
    pub batch_size: usize,
    pub http_timeout_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            database_path: "tulltaxan.db".to_string(),
            public_key_url: DEFAULT_PUBLIC_KEY_URL.to_string(),
            categories: vec![
                DistributionCategory::new("tot", DEFAULT_TOT_URL),
                DistributionCategory::new("dif", DEFAULT_DIF_URL),
            ],
            signed_extension: "pgp".to_string(),
            daily_run_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap_or_default(),
            batch_size: DEFAULT_BATCH_SIZE,
            http_timeout_secs: 120,
        }
    }
}

impl SyncConfig {
    /// Rejects settings no run could succeed with.
    pub fn validate(&self) -> SyncResult<()> {
        if self.batch_size == 0 {
            return Err(SyncError::Config("batch_size must be at least 1".into()));
        }
        if self.http_timeout_secs == 0 {
            return Err(SyncError::Config("http_timeout_secs must be at least 1".into()));
        }
        if self.signed_extension.trim().is_empty() {
            return Err(SyncError::Config("signed_extension is empty".into()));
        }
        let mut seen = std::collections::HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.name.as_str()) {
                return Err(SyncError::Config(format!(
                    "category {:?} is listed twice",
                    category.name
                )));
            }
        }
        Ok(())
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            batch_size: self.batch_size,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// `HH:MM` (seconds optional) serde form of the nightly run time.
mod run_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid run time {raw:?}: {e}")))
    }
}
