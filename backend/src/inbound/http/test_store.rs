//! In-memory [`DocumentStore`] double for handler tests.
//!
//! Mimics the remote service closely enough for the handlers: records get
//! sequential identifiers, list applies equality conditions, update merges
//! patches, and every call is counted so tests can assert that validation
//! failures short-circuit before any store traffic.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tokio::sync::Mutex;

use crate::domain::{DocumentStore, Page, PageRequest, QueryFilter, StoreError};

pub struct TestStore {
    records: Mutex<Vec<(String, Value)>>,
    next_id: AtomicUsize,
    pub calls: AtomicUsize,
}

impl TestStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            calls: AtomicUsize::new(0),
        })
    }

    pub async fn insert(&self, collection: &str, mut record: Value) -> String {
        let id = format!("{collection}-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        if let Some(fields) = record.as_object_mut() {
            fields.insert("_id".to_owned(), Value::from(id.clone()));
        }
        self.records
            .lock()
            .await
            .push((collection.to_owned(), record));
        id
    }

    pub async fn records_in(&self, collection: &str) -> Vec<Value> {
        self.records
            .lock()
            .await
            .iter()
            .filter(|(owner, _)| owner == collection)
            .map(|(_, record)| record.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn matches(record: &Value, filter: Option<&QueryFilter>) -> bool {
        let Some(filter) = filter else { return true };
        filter
            .conditions()
            .iter()
            .all(|(field, value)| record.get(field) == Some(value))
    }
}

#[async_trait]
impl DocumentStore for TestStore {
    async fn create(&self, collection: &str, record: Value) -> Result<Value, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let id = self.insert(collection, record).await;
        Ok(json!({ "id": id }))
    }

    async fn list(
        &self,
        collection: &str,
        filter: Option<&QueryFilter>,
        page: PageRequest,
    ) -> Result<Page<Value>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let records: Vec<Value> = self
            .records
            .lock()
            .await
            .iter()
            .filter(|(owner, record)| owner == collection && Self::matches(record, filter))
            .map(|(_, record)| record.clone())
            .collect();
        let total = records.len() as u64;
        Ok(Page {
            records: records
                .into_iter()
                .take(page.size() as usize)
                .collect(),
            total: Some(total),
        })
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .await
            .iter()
            .find(|(owner, record)| {
                owner == collection && record.get("_id") == Some(&Value::from(id))
            })
            .map(|(_, record)| record.clone())
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().await;
        let target = records
            .iter_mut()
            .find(|(owner, record)| {
                owner == collection && record.get("_id") == Some(&Value::from(id))
            })
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        if let Some(fields) = target.1.as_object_mut() {
            for (key, value) in patch {
                fields.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records.lock().await.retain(|(owner, record)| {
            owner != collection || record.get("_id") != Some(&Value::from(id))
        });
        Ok(())
    }
}
