//! Synchronization engine: turns parsed collections into batched store mutations.
//!
//! Records are walked depth-first in file order. An upsert queues its own row
//! and then its children's mutations, so a parent always precedes its children
//! within a batch. A delete queues only its own key; what happens to the
//! children is decided by the kind's declared delete policy in the store.
//!
//! Batches are cut only between root records, so a root record's whole tree
//! is committed atomically. The batch size is therefore a soft limit: a
//! single tree larger than it still goes out as one group. A failed batch aborts the rest of the collection;
//! earlier batches stay committed.

use crate::error::{SyncError, SyncResult};
use std::sync::Arc;
use tariffsync_model::{ChangeDirective, ChangeSet, EntityCollection, EntityRecord, Mutation, Value};
use tariffsync_store::{BatchOutcome, StoreResult, TariffStore};
use tracing::{debug, info, warn};

/// Executes one group of mutations as a single atomic unit.
pub trait BatchExecutor: Send + Sync {
    fn execute(&self, mutations: &[Mutation]) -> StoreResult<BatchOutcome>;
}

impl BatchExecutor for TariffStore {
    fn execute(&self, mutations: &[Mutation]) -> StoreResult<BatchOutcome> {
        self.execute_batch(mutations)
    }
}

impl<T: BatchExecutor + ?Sized> BatchExecutor for &T {
    fn execute(&self, mutations: &[Mutation]) -> StoreResult<BatchOutcome> {
        (**self).execute(mutations)
    }
}

impl<T: BatchExecutor + ?Sized> BatchExecutor for Arc<T> {
    fn execute(&self, mutations: &[Mutation]) -> StoreResult<BatchOutcome> {
        (**self).execute(mutations)
    }
}

/// Configuration for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Mutations after which the pending group is executed.
    ///
    /// Soft limit. The group is only cut after a complete root record, so a
    /// root whose tree alone exceeds this size is executed as one oversized
    /// group (logged at warn level).
    pub batch_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_size: crate::config::DEFAULT_BATCH_SIZE,
        }
    }
}

/// Counters for one applied collection or change set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Root records walked.
    pub records: usize,
    pub upserts: usize,
    pub deletes: usize,
    /// Atomic groups executed.
    pub batches: usize,
}

impl ApplyStats {
    pub fn absorb(&mut self, other: ApplyStats) {
        self.records += other.records;
        self.upserts += other.upserts;
        self.deletes += other.deletes;
        self.batches += other.batches;
    }
}

/// Queues the mutations for one record and, for upserts, its children.
///
/// `parent_key` is the parent's full natural key (empty for roots) and
/// `inherited` the parent's directive, taken by children without their own.
pub fn plan_record(
    record: &EntityRecord,
    parent_key: &[Value],
    inherited: Option<ChangeDirective>,
    out: &mut Vec<Mutation>,
) -> SyncResult<()> {
    let directive = record
        .directive(inherited)
        .map_err(|source| SyncError::Schema {
            collection: record.kind.element.to_string(),
            key: record.describe_key(),
            source,
        })?;

    match directive {
        ChangeDirective::Delete => out.push(Mutation::Delete {
            kind: record.kind,
            key: record.natural_key(parent_key),
        }),
        ChangeDirective::Upsert => {
            out.push(Mutation::Upsert {
                kind: record.kind,
                row: record.row(parent_key),
            });
            let key = record.natural_key(parent_key);
            for collection in &record.children {
                for child in &collection.records {
                    plan_record(child, &key, Some(ChangeDirective::Upsert), out)?;
                }
            }
        }
    }
    Ok(())
}

/// Applies parsed collections to a [`BatchExecutor`].
pub struct SyncEngine<E> {
    executor: E,
    config: EngineConfig,
}

impl<E: BatchExecutor> SyncEngine<E> {
    pub fn new(executor: E, config: EngineConfig) -> Self {
        Self { executor, config }
    }

    /// Effective batch size (never zero).
    pub fn batch_size(&self) -> usize {
        self.config.batch_size.max(1)
    }

    /// Applies one collection in file order.
    ///
    /// On error, mutations queued since the last executed batch are dropped;
    /// executed batches are not rolled back.
    pub fn apply_collection(&self, collection: &EntityCollection) -> SyncResult<ApplyStats> {
        let batch_size = self.batch_size();
        let mut pending = Vec::with_capacity(batch_size);
        let mut stats = ApplyStats::default();

        for record in &collection.records {
            let queued = pending.len();
            plan_record(record, &[], None, &mut pending)?;
            let tree = pending.len() - queued;
            if tree > batch_size {
                warn!(
                    collection = collection.kind.element,
                    key = %record.describe_key(),
                    mutations = tree,
                    batch_size,
                    "record tree exceeds batch size, committing it as one group"
                );
            }
            stats.records += 1;
            if pending.len() >= batch_size {
                self.flush(collection, &mut pending, &mut stats)?;
            }
        }
        self.flush(collection, &mut pending, &mut stats)?;

        debug!(
            collection = collection.kind.element,
            records = stats.records,
            batches = stats.batches,
            "collection applied"
        );
        Ok(stats)
    }

    /// Applies every collection of a change set, stopping at the first failure.
    pub fn apply_change_set(&self, change_set: &ChangeSet) -> SyncResult<ApplyStats> {
        let mut total = ApplyStats::default();
        for collection in &change_set.collections {
            match self.apply_collection(collection) {
                Ok(stats) => total.absorb(stats),
                Err(e) => {
                    warn!(
                        collection = collection.kind.element,
                        error = %e,
                        "collection aborted, earlier batches remain committed"
                    );
                    return Err(e);
                }
            }
        }
        info!(
            collections = change_set.collections.len(),
            records = total.records,
            upserts = total.upserts,
            deletes = total.deletes,
            "change set applied"
        );
        Ok(total)
    }

    fn flush(
        &self,
        collection: &EntityCollection,
        pending: &mut Vec<Mutation>,
        stats: &mut ApplyStats,
    ) -> SyncResult<()> {
        if pending.is_empty() {
            return Ok(());
        }
        let outcome = self.executor.execute(pending.as_slice())?;
        stats.upserts += outcome.upserts;
        stats.deletes += outcome.deletes;
        stats.batches += 1;
        debug!(
            collection = collection.kind.element,
            mutations = pending.len(),
            "batch committed"
        );
        pending.clear();
        Ok(())
    }
}
