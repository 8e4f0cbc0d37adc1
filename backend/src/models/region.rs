//! Region catalogue: typed request shapes and collection policy.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Patch, QueryFilter, now_rfc3339};

/// Remote collection holding regions.
pub const COLLECTION: &str = "regions";

/// Default page size for region listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Create payload. Unknown fields are ignored; the identifier and creator
/// identity are system-assigned and cannot be supplied here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionCreate {
    /// Display name.
    pub name: String,
    /// Sort weight (higher sorts first); defaults to 100.
    #[serde(default)]
    pub sort: Option<i64>,
}

impl RegionCreate {
    /// Build the outbound record: new regions are always enabled and both
    /// audit timestamps are stamped server-side.
    pub fn into_record(self) -> Value {
        let now = now_rfc3339();
        json!({
            "name": self.name,
            "sort": self.sort.unwrap_or(100),
            "status": 1,
            "created_at": now,
            "updated_at": now,
        })
    }
}

/// Partial-update payload: only supplied fields are patched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RegionUpdate {
    /// Display name.
    pub name: Option<String>,
    /// Sort weight.
    pub sort: Option<i64>,
    /// 1 enabled, 0 disabled.
    pub status: Option<i64>,
}

impl RegionUpdate {
    /// Fold supplied fields into a patch.
    pub fn into_patch(self) -> Patch {
        Patch::new()
            .set_if_present("name", self.name)
            .set_if_present("sort", self.sort)
            .set_if_present("status", self.status)
    }
}

/// List query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct RegionListQuery {
    /// Status filter; defaults to enabled (1).
    pub status: Option<i64>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Records per page.
    pub size: Option<u32>,
}

impl RegionListQuery {
    /// Translate the query parameters into a remote filter.
    pub fn filter(&self) -> QueryFilter {
        QueryFilter::new().eq("status", self.status.unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_forces_status_and_defaults_sort() {
        let record = RegionCreate {
            name: "Old Town".to_owned(),
            sort: None,
        }
        .into_record();

        assert_eq!(record["status"], 1);
        assert_eq!(record["sort"], 100);
        assert!(record["created_at"].is_string());
        assert!(record.get("_id").is_none(), "identifier is never client-set");
    }

    #[test]
    fn update_patch_only_carries_supplied_fields() {
        let map = RegionUpdate {
            name: Some("Harbour".to_owned()),
            sort: None,
            status: Some(0),
        }
        .into_patch()
        .into_map();

        assert_eq!(map["name"], "Harbour");
        assert_eq!(map["status"], 0);
        assert!(!map.contains_key("sort"));
        assert!(map.contains_key("updated_at"));
    }

    #[test]
    fn list_defaults_to_enabled_records() {
        let doc = RegionListQuery::default().filter().to_document();
        assert_eq!(doc["where"]["status"]["$eq"], 1);
    }
}
