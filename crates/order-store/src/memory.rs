use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    OrderRecord, PageRequest, Result, StoreError,
    store::OrderStore,
};

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<OrderRecord>,
    fail_on_save: bool,
    fail_on_find: bool,
    fail_on_count: bool,
}

/// In-memory order store.
///
/// Keeps records in insertion order and provides the same interface as the
/// PostgreSQL implementation. Used as the test double for the use-case and
/// API tests, and as the default backend when no database is configured.
/// The `set_fail_on_*` switches make the next matching operation fail with
/// [`StoreError::Unavailable`], for exercising error paths.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `save` fail until switched back off.
    pub async fn set_fail_on_save(&self, fail: bool) {
        self.state.write().await.fail_on_save = fail;
    }

    /// Makes `find_all` fail until switched back off.
    pub async fn set_fail_on_find(&self, fail: bool) {
        self.state.write().await.fail_on_find = fail;
    }

    /// Makes `get_total` fail until switched back off.
    pub async fn set_fail_on_count(&self, fail: bool) {
        self.state.write().await.fail_on_count = fail;
    }

    /// Returns the number of stored orders.
    pub async fn record_count(&self) -> usize {
        self.state.read().await.records.len()
    }
}

fn sort_records(records: &mut [OrderRecord], field: &str) {
    match field {
        "price" => records.sort_by(|a, b| a.price.total_cmp(&b.price)),
        "tax" => records.sort_by(|a, b| a.tax.total_cmp(&b.tax)),
        "final_price" => records.sort_by(|a, b| a.final_price.total_cmp(&b.final_price)),
        // Unknown fields behave as "id", matching the Postgres backend's
        // column whitelist fallback.
        _ => records.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str())),
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, record: &OrderRecord) -> Result<()> {
        let mut state = self.state.write().await;

        if state.fail_on_save {
            return Err(StoreError::Unavailable("save failure injected".to_string()));
        }
        if state.records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::DuplicateId(record.id.to_string()));
        }

        state.records.push(record.clone());
        Ok(())
    }

    async fn find_all(&self, page: &PageRequest) -> Result<Vec<OrderRecord>> {
        let state = self.state.read().await;

        if state.fail_on_find {
            return Err(StoreError::Unavailable("find failure injected".to_string()));
        }

        let mut records = state.records.clone();
        sort_records(&mut records, page.sort());

        Ok(records
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn get_total(&self) -> Result<u64> {
        let state = self.state.read().await;

        if state.fail_on_count {
            return Err(StoreError::Unavailable(
                "count failure injected".to_string(),
            ));
        }

        Ok(state.records.len() as u64)
    }
}
