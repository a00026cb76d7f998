//! In-memory store implementation
//!
//! An ordered collection behind a `tokio::sync::RwLock`. Records are cloned
//! on the way in and out, so internal references never escape the store.
//!
//! Mutations take the write guard first and only then enter the retry
//! policy: the exclusive lock spans the whole retry sequence, so a second
//! mutation can never interleave with the backoff sleeps of the first, and
//! reads are excluded until the mutation settles.

use crate::error::{StoreError, StoreResult};
use crate::repository::RecordRepository;
use async_trait::async_trait;
use registry_core::{filter, FilterCriteria, Record, RetryPolicy};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory record repository
pub struct InMemoryRepository {
    records: RwLock<Vec<Record>>,
    retry: RetryPolicy,
}

impl InMemoryRepository {
    /// Create an empty store with the default retry policy
    pub fn new() -> Self {
        Self::with_retry_policy(RetryPolicy::default())
    }

    /// Create an empty store with an explicit retry policy
    pub fn with_retry_policy(retry: RetryPolicy) -> Self {
        Self::with_records(Vec::new(), retry)
    }

    /// Create a store with initial contents and an explicit retry policy
    pub fn with_records(records: Vec<Record>, retry: RetryPolicy) -> Self {
        Self {
            records: RwLock::new(records),
            retry,
        }
    }

    /// Create a store seeded with the development fixtures
    pub fn with_sample_data() -> Self {
        Self::with_records(crate::seed::sample_records(), RetryPolicy::default())
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRepository {
    async fn query(&self, criteria: &FilterCriteria) -> StoreResult<Vec<Record>> {
        let records = self.records.read().await;
        Ok(filter::filter_records(criteria, &records))
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Record>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, record: Record) -> StoreResult<Record> {
        let mut records = self.records.write().await;
        self.retry
            .execute(|| {
                if record.id.is_empty() {
                    return Err(StoreError::EmptyId);
                }
                if records.iter().any(|r| r.id == record.id) {
                    return Err(StoreError::DuplicateId {
                        id: record.id.clone(),
                    });
                }
                records.push(record.clone());
                Ok(())
            })
            .await?;
        Ok(record)
    }

    async fn update(&self, record: Record) -> StoreResult<()> {
        let mut records = self.records.write().await;
        self.retry
            .execute(|| {
                match records.iter_mut().find(|r| r.id == record.id) {
                    Some(existing) => *existing = record.clone(),
                    // Missing id is a silent no-op, by contract
                    None => debug!(id = %record.id, "update target not found, ignoring"),
                }
                Ok::<(), StoreError>(())
            })
            .await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        self.retry
            .execute(|| {
                match records.iter().position(|r| r.id == id) {
                    Some(pos) => {
                        records.remove(pos);
                    }
                    // Missing id is a silent no-op, by contract
                    None => debug!(id, "delete target not found, ignoring"),
                }
                Ok::<(), StoreError>(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_core::model::Name;

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            names: vec![Name {
                first_name: Some(format!("First{}", id)),
                middle_name: None,
                surname: Some("Tester".to_string()),
            }],
            addresses: vec![],
            dates: vec![],
            gender: None,
            deceased: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_by_id() {
        let store = InMemoryRepository::new();

        let created = store.create(record("a")).await.unwrap();
        assert_eq!(created.id, "a");

        let found = store.get_by_id("a").await.unwrap();
        assert_eq!(found, Some(created));

        let missing = store.get_by_id("b").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_query_preserves_insertion_order() {
        let store = InMemoryRepository::new();
        for id in ["c", "a", "b"] {
            store.create(record(id)).await.unwrap();
        }

        let all = store.query(&FilterCriteria::default()).await.unwrap();
        let ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_query_on_empty_store_returns_empty() {
        let store = InMemoryRepository::new();
        let all = store.query(&FilterCriteria::default()).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_rejects_duplicate_id_after_retries() {
        let store = InMemoryRepository::new();
        store.create(record("a")).await.unwrap();

        let result = store.create(record("a")).await;
        assert_eq!(
            result,
            Err(StoreError::DuplicateId {
                id: "a".to_string()
            })
        );
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_rejects_empty_id() {
        let store = InMemoryRepository::new();
        let result = store.create(record("")).await;
        assert_eq!(result, Err(StoreError::EmptyId));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let store = InMemoryRepository::new();
        store.create(record("a")).await.unwrap();
        store.create(record("b")).await.unwrap();

        let mut replacement = record("a");
        replacement.gender = Some("Female".to_string());
        replacement.deceased = true;
        store.update(replacement.clone()).await.unwrap();

        let found = store.get_by_id("a").await.unwrap().unwrap();
        assert_eq!(found, replacement);

        // Position in the collection is unchanged
        let all = store.query(&FilterCriteria::default()).await.unwrap();
        assert_eq!(all[0].id, "a");
        assert_eq!(all[1].id, "b");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_a_silent_noop() {
        let store = InMemoryRepository::new();
        store.create(record("a")).await.unwrap();

        store.update(record("missing")).await.unwrap();
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = InMemoryRepository::new();
        store.create(record("a")).await.unwrap();
        store.create(record("b")).await.unwrap();

        store.delete("a").await.unwrap();
        assert_eq!(store.count().await, 1);
        assert!(store.get_by_id("a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_a_silent_noop() {
        let store = InMemoryRepository::new();
        store.create(record("a")).await.unwrap();

        store.delete("3").await.unwrap();

        let all = store.query(&FilterCriteria::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], store.get_by_id("a").await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_sample_data_scenarios() {
        let store = InMemoryRepository::with_sample_data();
        assert_eq!(store.count().await, 2);

        let criteria = FilterCriteria {
            search: Some("alice".to_string()),
            ..Default::default()
        };
        let hits = store.query(&criteria).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        let criteria = FilterCriteria {
            gender: Some("Male".to_string()),
            ..Default::default()
        };
        let hits = store.query(&criteria).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let criteria = FilterCriteria {
            start_date: chrono::NaiveDate::from_ymd_opt(1988, 1, 1),
            end_date: chrono::NaiveDate::from_ymd_opt(2000, 1, 1),
            ..Default::default()
        };
        let hits = store.query(&criteria).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[tokio::test]
    async fn test_created_record_is_detached_from_store() {
        let store = InMemoryRepository::new();
        let mut created = store.create(record("a")).await.unwrap();

        // Mutating the returned record must not affect stored state
        created.gender = Some("Other".to_string());

        let stored = store.get_by_id("a").await.unwrap().unwrap();
        assert!(stored.gender.is_none());
    }
}
