//! Administrative helpers shared across catalogue resources.

use std::sync::Arc;

use tracing::warn;

use super::error::DomainError;
use super::page::PageRequest;
use super::patch::Patch;
use super::ports::DocumentStore;
use super::query::QueryFilter;

/// Update `status` on each identifier in turn.
///
/// There is no batch verb in the remote protocol, so this loops and stops
/// at the first failure, reporting which identifier failed. Records updated
/// before the failure stay updated; the remote service offers no
/// transaction to roll them back.
pub async fn batch_update_status(
    store: &Arc<dyn DocumentStore>,
    collection: &str,
    ids: &[String],
    status: i64,
) -> Result<(), DomainError> {
    for id in ids {
        let patch = Patch::new().set("status", status).into_map();
        if let Err(err) = store.update(collection, id, patch).await {
            warn!(collection, id, %err, "batch status update aborted");
            return Err(DomainError::from(err)
                .with_details(serde_json::json!({ "failed_id": id })));
        }
    }
    Ok(())
}

/// Count enabled records in `collection` belonging to a region.
///
/// Uses a single-record list purely for its `total` count.
pub async fn count_by_region(
    store: &Arc<dyn DocumentStore>,
    collection: &str,
    region_id: &str,
) -> Result<u64, DomainError> {
    let filter = QueryFilter::new().eq("region_id", region_id).eq("status", 1);
    let page = store
        .list(collection, Some(&filter), PageRequest::single())
        .await?;
    page.total
        .ok_or_else(|| DomainError::internal("remote service omitted the record count"))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::{Map, Value};
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::page::Page;
    use crate::domain::ports::StoreError;

    /// Store double that fails updates for one poisoned identifier and
    /// records the ids it was asked to touch.
    struct FlakyStore {
        poisoned_id: &'static str,
        updated: Mutex<Vec<String>>,
        region_total: Option<u64>,
    }

    #[async_trait]
    impl DocumentStore for FlakyStore {
        async fn create(&self, _collection: &str, _record: Value) -> Result<Value, StoreError> {
            Ok(Value::Null)
        }

        async fn list(
            &self,
            _collection: &str,
            _filter: Option<&QueryFilter>,
            _page: PageRequest,
        ) -> Result<Page<Value>, StoreError> {
            Ok(Page {
                records: Vec::new(),
                total: self.region_total,
            })
        }

        async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
            Err(StoreError::not_found(collection, id))
        }

        async fn update(
            &self,
            _collection: &str,
            id: &str,
            patch: Map<String, Value>,
        ) -> Result<(), StoreError> {
            assert!(patch.contains_key("updated_at"), "every patch is stamped");
            if id == self.poisoned_id {
                return Err(StoreError::RemoteApi {
                    status: 500,
                    body: "write rejected".to_owned(),
                });
            }
            self.updated.lock().await.push(id.to_owned());
            Ok(())
        }

        async fn delete(&self, _collection: &str, _id: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn store(poisoned_id: &'static str, region_total: Option<u64>) -> Arc<dyn DocumentStore> {
        Arc::new(FlakyStore {
            poisoned_id,
            updated: Mutex::new(Vec::new()),
            region_total,
        })
    }

    #[tokio::test]
    async fn batch_update_stops_at_first_failure_and_names_the_id() {
        let store = store("bad", None);
        let ids = vec!["a".to_owned(), "bad".to_owned(), "c".to_owned()];

        let err = batch_update_status(&store, "pois", &ids, 0)
            .await
            .expect_err("poisoned id must abort the batch");

        assert_eq!(err.code(), ErrorCode::RemoteApi);
        let details = err.details().expect("failing id reported");
        assert_eq!(details["failed_id"], "bad");
    }

    #[tokio::test]
    async fn batch_update_walks_every_id_on_success() {
        let store = store("unused", None);
        let ids = vec!["a".to_owned(), "b".to_owned()];

        batch_update_status(&store, "theme", &ids, 1)
            .await
            .expect("batch succeeds");
    }

    #[tokio::test]
    async fn count_reads_the_total_from_a_single_record_page() {
        let store = store("unused", Some(42));
        let count = count_by_region(&store, "pois", "r1")
            .await
            .expect("count succeeds");
        assert_eq!(count, 42);
    }

    #[tokio::test]
    async fn missing_total_is_an_internal_error() {
        let store = store("unused", None);
        let err = count_by_region(&store, "pois", "r1")
            .await
            .expect_err("count requires a total");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
