//! Themed photo galleries: typed request shapes and collection policy.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Patch, QueryFilter, now_rfc3339};

/// Remote collection holding themes. Singular by historical accident of the
/// backing database; do not "fix" it.
pub const COLLECTION: &str = "theme";

/// Default page size for theme listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Create payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThemeCreate {
    /// Theme name, e.g. "Hanfu photo walk".
    pub name: String,
    /// Cover image URL.
    #[serde(default)]
    pub cover: String,
    /// Short description.
    #[serde(default)]
    pub desc: String,
    /// Owning region identifier.
    #[serde(default)]
    pub region_id: String,
    /// Sort weight; non-positive values fall back to 9999 (sorts last).
    #[serde(default)]
    pub sort: Option<i64>,
}

impl ThemeCreate {
    /// Build the outbound record: themes start enabled with stamped
    /// audit timestamps.
    pub fn into_record(self) -> Value {
        let now = now_rfc3339();
        let sort = match self.sort {
            Some(sort) if sort > 0 => sort,
            _ => 9999,
        };
        json!({
            "name": self.name,
            "cover": self.cover,
            "desc": self.desc,
            "region_id": self.region_id,
            "sort": sort,
            "status": 1,
            "created_at": now,
            "updated_at": now,
        })
    }
}

/// Partial-update payload: only supplied fields are patched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ThemeUpdate {
    /// Theme name.
    pub name: Option<String>,
    /// Cover image URL.
    pub cover: Option<String>,
    /// Short description.
    pub desc: Option<String>,
    /// Owning region identifier.
    pub region_id: Option<String>,
    /// Sort weight.
    pub sort: Option<i64>,
    /// 1 enabled, 0 disabled.
    pub status: Option<i64>,
}

impl ThemeUpdate {
    /// Fold supplied fields into a patch.
    pub fn into_patch(self) -> Patch {
        Patch::new()
            .set_if_present("name", self.name)
            .set_if_present("cover", self.cover)
            .set_if_present("desc", self.desc)
            .set_if_present("region_id", self.region_id)
            .set_if_present("sort", self.sort)
            .set_if_present("status", self.status)
    }
}

/// List query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ThemeListQuery {
    /// Narrow to one region (region-first recommendation).
    pub region_id: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Records per page.
    pub size: Option<u32>,
}

impl ThemeListQuery {
    /// Translate the query parameters into a remote filter. Listings only
    /// ever return enabled themes.
    pub fn filter(&self) -> QueryFilter {
        let mut filter = QueryFilter::new().eq("status", 1);
        if let Some(region_id) = &self.region_id {
            filter = filter.eq("region_id", region_id.as_str());
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_sort_falls_back_to_last() {
        let record = ThemeCreate {
            name: "Night market".to_owned(),
            cover: String::new(),
            desc: String::new(),
            region_id: "r1".to_owned(),
            sort: Some(0),
        }
        .into_record();

        assert_eq!(record["sort"], 9999);
        assert_eq!(record["status"], 1);
    }

    #[test]
    fn positive_sort_is_kept() {
        let record = ThemeCreate {
            name: "Lanterns".to_owned(),
            cover: String::new(),
            desc: String::new(),
            region_id: String::new(),
            sort: Some(5),
        }
        .into_record();

        assert_eq!(record["sort"], 5);
    }

    #[test]
    fn update_patch_supports_explicit_zero_status() {
        let map = ThemeUpdate {
            status: Some(0),
            ..ThemeUpdate::default()
        }
        .into_patch()
        .into_map();

        assert_eq!(map["status"], 0);
    }
}
