//! Per-category synchronization: listing, ordering, registry filtering and
//! file-by-file application.

use crate::config::SyncConfig;
use crate::engine::{ApplyStats, SyncEngine};
use crate::error::{SyncError, SyncResult};
use crate::report::{CategoryFailure, CategoryReport, RunReport};
use chrono::Utc;
use std::sync::Arc;
use tariffsync_changeset::parse_change_set;
use tariffsync_filedist::{
    DatedFile, DistributionCategory, DistributionClient, EnvelopeOpener, open_plaintext,
    sort_by_embedded_date,
};
use tariffsync_store::TariffStore;
use tracing::{debug, info, warn};

/// Drives one pass over every configured category.
#[derive(Clone)]
pub struct Synchronizer {
    client: DistributionClient,
    store: TariffStore,
    config: SyncConfig,
}

impl Synchronizer {
    pub fn new(client: DistributionClient, store: TariffStore, config: SyncConfig) -> Self {
        Self {
            client,
            store,
            config,
        }
    }

    pub fn client(&self) -> &DistributionClient {
        &self.client
    }

    pub fn store(&self) -> &TariffStore {
        &self.store
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Synchronizes every category in configured order.
    ///
    /// A failing category is reported and the next one still runs.
    pub async fn run(&self, opener: Arc<dyn EnvelopeOpener>) -> RunReport {
        let started_at = Utc::now();
        let mut categories = Vec::with_capacity(self.config.categories.len());
        for category in &self.config.categories {
            categories.push(self.sync_category(category, opener.clone()).await);
        }
        RunReport {
            started_at,
            finished_at: Utc::now(),
            categories,
        }
    }

    /// Applies every not yet consumed file of one category, oldest first.
    ///
    /// The first failing file stops the category; files applied before it
    /// stay applied and recorded.
    pub async fn sync_category(
        &self,
        category: &DistributionCategory,
        opener: Arc<dyn EnvelopeOpener>,
    ) -> CategoryReport {
        info!(category = %category.name, url = %category.url, "synchronizing category");
        let mut report = CategoryReport::new(&category.name);
        if let Err(failure) = self.drive_category(category, opener, &mut report).await {
            warn!(
                category = %category.name,
                file = failure.file.as_deref().unwrap_or("-"),
                error = %failure.error,
                "category aborted"
            );
            report.failure = Some(failure);
        }
        report
    }

    async fn drive_category(
        &self,
        category: &DistributionCategory,
        opener: Arc<dyn EnvelopeOpener>,
        report: &mut CategoryReport,
    ) -> Result<(), CategoryFailure> {
        let listed = self
            .client
            .discover(category, &self.config.signed_extension)
            .await
            .map_err(CategoryFailure::listing)?;
        let sorted = sort_by_embedded_date(listed).map_err(CategoryFailure::listing)?;
        let listed_count = sorted.len();
        let pending = self
            .pending_files(&category.name, sorted)
            .await
            .map_err(CategoryFailure::listing)?;
        report.skipped = listed_count - pending.len();
        debug!(
            category = %category.name,
            listed = listed_count,
            pending = pending.len(),
            "registry filter applied"
        );

        for dated in pending {
            let name = dated.file.name.clone();
            let raw = self
                .client
                .fetch_file(&dated.file)
                .await
                .map_err(|e| CategoryFailure::file(&name, e))?;
            let stats = self
                .apply_file(&category.name, dated, raw, opener.clone())
                .await
                .map_err(|e| CategoryFailure::file(&name, e))?;
            report.stats.absorb(stats);
            report.applied.push(name);
        }
        Ok(())
    }

    /// Drops files the registry already covers: recorded ones, and any dated
    /// before the category's high-water mark.
    async fn pending_files(
        &self,
        category: &str,
        files: Vec<DatedFile>,
    ) -> SyncResult<Vec<DatedFile>> {
        let store = self.store.clone();
        let category = category.to_string();
        tokio::task::spawn_blocking(move || -> SyncResult<Vec<DatedFile>> {
            let mark = store.high_water_mark(&category)?;
            let mut pending = Vec::with_capacity(files.len());
            for dated in files {
                if mark.is_some_and(|mark| dated.date < mark) {
                    debug!(file = %dated.file.name, "older than high-water mark, skipping");
                    continue;
                }
                if store.is_consumed(&category, &dated.file.name)? {
                    debug!(file = %dated.file.name, "already consumed, skipping");
                    continue;
                }
                pending.push(dated);
            }
            Ok(pending)
        })
        .await?
    }

    /// Authenticates, decompresses, parses and applies one file, then records
    /// it as consumed. Runs on the blocking pool; the plaintext stream and
    /// parsed document are dropped there on every path.
    async fn apply_file(
        &self,
        category: &str,
        dated: DatedFile,
        raw: Vec<u8>,
        opener: Arc<dyn EnvelopeOpener>,
    ) -> SyncResult<ApplyStats> {
        let store = self.store.clone();
        let engine_config = self.config.engine_config();
        let category = category.to_string();
        tokio::task::spawn_blocking(move || -> SyncResult<ApplyStats> {
            let plaintext = open_plaintext(&raw, opener.as_ref())?;
            let change_set = parse_change_set(plaintext)?;
            info!(
                category = %category,
                file = %dated.file.name,
                export_id = change_set.header.id.as_deref().unwrap_or("-"),
                export_type = change_set.header.export_type.as_deref().unwrap_or("-"),
                query_date_start = change_set.header.query_date_start.as_deref().unwrap_or("-"),
                records = change_set.record_count(),
                "applying export file"
            );
            let engine = SyncEngine::new(store.clone(), engine_config);
            let stats = engine.apply_change_set(&change_set)?;
            store.record_consumed(&category, &dated.file.name, dated.date)?;
            Ok(stats)
        })
        .await
        .map_err(SyncError::from)?
    }
}
