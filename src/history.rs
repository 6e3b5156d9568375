//! Bounded result history backed by a key-value store
//!
//! Keeps the most recent results under a single storage key, newest
//! first. Every append rewrites the full list, so the bound holds
//! after any write.

use crate::error::{AppError, Result};
use crate::models::MeasurementResult;
use crate::storage::KeyValueStore;

/// Storage key under which the full history list is persisted
pub const HISTORY_KEY: &str = "history";

/// Persistent, bounded log of past test results
pub struct HistoryStore {
    store: Box<dyn KeyValueStore>,
    limit: usize,
}

impl HistoryStore {
    /// Create a history store over a key-value collaborator
    pub fn new(store: Box<dyn KeyValueStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Maximum number of entries retained
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Prepend a result, evicting the oldest entry past the limit
    pub async fn append(&self, result: MeasurementResult) -> Result<()> {
        let mut entries = self.list().await?;
        entries.insert(0, result);
        entries.truncate(self.limit);

        let value = serde_json::to_value(&entries)
            .map_err(|e| AppError::storage(format!("Failed to serialize history: {}", e)))?;
        self.store.set(HISTORY_KEY, value).await
    }

    /// Return all stored results, newest first
    pub async fn list(&self) -> Result<Vec<MeasurementResult>> {
        match self.store.get(HISTORY_KEY).await? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| AppError::storage(format!("Failed to parse history: {}", e))),
            None => Ok(Vec::new()),
        }
    }

    /// Delete all stored results
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(HISTORY_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn make_result(label: &str, download: f64) -> MeasurementResult {
        MeasurementResult::with_timestamp(label.to_string(), download, 90.0, 42)
    }

    fn memory_history(limit: usize) -> HistoryStore {
        HistoryStore::new(Box::new(MemoryStore::new()), limit)
    }

    #[tokio::test]
    async fn test_empty_history_lists_nothing() {
        let history = memory_history(5);
        assert!(history.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_inserts_newest_first() {
        let history = memory_history(5);
        history.append(make_result("first", 80.0)).await.unwrap();
        history.append(make_result("second", 85.0)).await.unwrap();

        let entries = history.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "second");
        assert_eq!(entries[1].timestamp, "first");
    }

    #[tokio::test]
    async fn test_sixth_append_evicts_oldest() {
        let history = memory_history(5);
        for i in 0..6 {
            history
                .append(make_result(&format!("run-{}", i), 80.0 + i as f64))
                .await
                .unwrap();
        }

        let entries = history.list().await.unwrap();
        assert_eq!(entries.len(), 5);
        // Newest first; run-0 was evicted
        assert_eq!(entries[0].timestamp, "run-5");
        assert_eq!(entries[4].timestamp, "run-1");
        assert!(!entries.iter().any(|e| e.timestamp == "run-0"));
    }

    #[tokio::test]
    async fn test_bound_holds_after_every_write() {
        let history = memory_history(5);
        for i in 0..20 {
            history
                .append(make_result(&format!("run-{}", i), 90.0))
                .await
                .unwrap();
            assert!(history.list().await.unwrap().len() <= 5);
        }
    }

    #[tokio::test]
    async fn test_clear_removes_all_entries() {
        let history = memory_history(5);
        history.append(make_result("only", 88.0)).await.unwrap();
        assert_eq!(history.list().await.unwrap().len(), 1);

        history.clear().await.unwrap();
        assert!(history.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_custom_limit_is_respected() {
        let history = memory_history(2);
        for i in 0..4 {
            history
                .append(make_result(&format!("run-{}", i), 90.0))
                .await
                .unwrap();
        }

        let entries = history.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "run-3");
        assert_eq!(entries[1].timestamp, "run-2");
    }

    #[tokio::test]
    async fn test_malformed_stored_value_is_a_storage_error() {
        let store = MemoryStore::new();
        store
            .set(HISTORY_KEY, serde_json::json!({"not": "a list"}))
            .await
            .unwrap();

        let history = HistoryStore::new(Box::new(store), 5);
        assert!(matches!(history.list().await, Err(AppError::Storage(_))));
    }
}
