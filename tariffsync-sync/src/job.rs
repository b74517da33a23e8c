//! The production maintenance job: fetch the key, then synchronize.

use crate::config::SyncConfig;
use crate::error::SyncResult;
use crate::report::RunReport;
use crate::scheduler::MaintenanceJob;
use crate::synchronizer::Synchronizer;
use async_trait::async_trait;
use std::sync::Arc;
use tariffsync_filedist::DistributionClient;
use tariffsync_store::TariffStore;

/// Imports the authority's key once per run and hands it to the synchronizer.
///
/// A key that cannot be fetched or imported fails the whole run before any
/// file is looked at.
pub struct TariffMaintenance {
    synchronizer: Synchronizer,
}

impl TariffMaintenance {
    pub fn new(config: SyncConfig, store: TariffStore) -> SyncResult<Self> {
        config.validate()?;
        let client = DistributionClient::new(config.http_timeout())?;
        Ok(Self {
            synchronizer: Synchronizer::new(client, store, config),
        })
    }

    pub fn synchronizer(&self) -> &Synchronizer {
        &self.synchronizer
    }
}

#[async_trait]
impl MaintenanceJob for TariffMaintenance {
    async fn run(&self) -> SyncResult<RunReport> {
        let url = &self.synchronizer.config().public_key_url;
        let keyring = self.synchronizer.client().fetch_public_key(url).await?;
        Ok(self.synchronizer.run(Arc::new(keyring)).await)
    }
}
