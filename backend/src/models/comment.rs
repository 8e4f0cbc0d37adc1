//! POI comments: typed request shapes and collection policy.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Patch, QueryFilter, now_rfc3339};

/// Remote collection holding comments. Singular in the backing database.
pub const COLLECTION: &str = "comment";

/// Default page size for comment listings.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Create payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentCreate {
    /// POI the comment belongs to.
    pub poi_id: String,
    /// Parent comment identifier; empty string for a top-level comment.
    #[serde(default)]
    pub parent_id: String,
    /// Comment body.
    pub content: String,
}

impl CommentCreate {
    /// Build the outbound record: comments start pending review with a
    /// zeroed like counter.
    pub fn into_record(self) -> Value {
        let now = now_rfc3339();
        json!({
            "poi_id": self.poi_id,
            "parent_id": self.parent_id,
            "content": self.content,
            "status": 0,
            "like_count": 0,
            "created_at": now,
            "updated_at": now,
        })
    }
}

/// Partial-update payload used for review decisions and like counts.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CommentUpdate {
    /// Review status: 0 pending, 1 approved, 2 rejected.
    pub status: Option<i64>,
    /// Like counter.
    pub like_count: Option<i64>,
}

impl CommentUpdate {
    /// Fold supplied fields into a patch.
    pub fn into_patch(self) -> Patch {
        Patch::new()
            .set_if_present("status", self.status)
            .set_if_present("like_count", self.like_count)
    }
}

/// List query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CommentListQuery {
    /// Narrow to one POI's comments.
    pub poi_id: Option<String>,
    /// Review status filter; defaults to approved (1).
    pub status: Option<i64>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Records per page.
    pub size: Option<u32>,
}

impl CommentListQuery {
    /// Translate the query parameters into a remote filter.
    pub fn filter(&self) -> QueryFilter {
        let mut filter = QueryFilter::new().eq("status", self.status.unwrap_or(1));
        if let Some(poi_id) = &self.poi_id {
            filter = filter.eq("poi_id", poi_id.as_str());
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_start_pending_with_empty_parent_by_default() {
        let record = CommentCreate {
            poi_id: "p1".to_owned(),
            parent_id: String::new(),
            content: "Lovely place".to_owned(),
        }
        .into_record();

        assert_eq!(record["status"], 0);
        assert_eq!(record["parent_id"], "");
        assert_eq!(record["like_count"], 0);
    }

    #[test]
    fn filter_combines_status_and_poi() {
        let query = CommentListQuery {
            poi_id: Some("p1".to_owned()),
            status: Some(0),
            ..CommentListQuery::default()
        };
        let doc = query.filter().to_document();

        assert_eq!(doc["where"]["status"]["$eq"], 0);
        assert_eq!(doc["where"]["poi_id"]["$eq"], "p1");
    }
}
