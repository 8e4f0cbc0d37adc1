//! Points of interest: typed request shapes and collection policy.
//!
//! POI types mirror the product catalogue: `scenic`, `food`, `hotel`,
//! `booth`. The gateway passes the type through without revalidating it;
//! listing already filters on enabled status.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Patch, QueryFilter, now_rfc3339};

/// Remote collection holding POIs.
pub const COLLECTION: &str = "pois";

/// Default page size for POI listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Create payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PoiCreate {
    /// Display name.
    pub name: String,
    /// POI type (`scenic`, `food`, `hotel`, `booth`).
    #[serde(rename = "type")]
    pub poi_type: String,
    /// Owning region identifier.
    pub region_id: String,
    /// Stored latitude; zero means "no known location".
    #[serde(default)]
    pub latitude: f64,
    /// Stored longitude; zero means "no known location".
    #[serde(default)]
    pub longitude: f64,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Short description.
    #[serde(default)]
    pub desc: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Opening hours, free-form.
    #[serde(default)]
    pub open_time: String,
}

impl PoiCreate {
    /// Build the outbound record. New POIs are always enabled; `images`
    /// is materialised as an empty array rather than null.
    pub fn into_record(self) -> Value {
        let now = now_rfc3339();
        json!({
            "name": self.name,
            "type": self.poi_type,
            "region_id": self.region_id,
            "latitude": self.latitude,
            "longitude": self.longitude,
            "images": self.images,
            "desc": self.desc,
            "address": self.address,
            "phone": self.phone,
            "open_time": self.open_time,
            "status": 1,
            "created_at": now,
            "updated_at": now,
        })
    }
}

/// Partial-update payload: only supplied fields are patched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PoiUpdate {
    /// Display name.
    pub name: Option<String>,
    /// POI type.
    #[serde(rename = "type")]
    pub poi_type: Option<String>,
    /// Owning region identifier.
    pub region_id: Option<String>,
    /// Stored latitude.
    pub latitude: Option<f64>,
    /// Stored longitude.
    pub longitude: Option<f64>,
    /// Image URLs.
    pub images: Option<Vec<String>>,
    /// Short description.
    pub desc: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Opening hours.
    pub open_time: Option<String>,
    /// 1 enabled, 0 disabled.
    pub status: Option<i64>,
}

impl PoiUpdate {
    /// Fold supplied fields into a patch.
    pub fn into_patch(self) -> Patch {
        Patch::new()
            .set_if_present("name", self.name)
            .set_if_present("type", self.poi_type)
            .set_if_present("region_id", self.region_id)
            .set_if_present("latitude", self.latitude)
            .set_if_present("longitude", self.longitude)
            .set_if_present("images", self.images.map(Value::from))
            .set_if_present("desc", self.desc)
            .set_if_present("address", self.address)
            .set_if_present("phone", self.phone)
            .set_if_present("open_time", self.open_time)
            .set_if_present("status", self.status)
    }
}

/// List query parameters. Supplying both `lat` and `lng` (non-zero)
/// enriches each located record with a `_distance` annotation.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PoiListQuery {
    /// Narrow to one region.
    pub region_id: Option<String>,
    /// Narrow to one POI type.
    #[serde(rename = "type")]
    pub poi_type: Option<String>,
    /// Caller latitude for distance annotation.
    pub lat: Option<f64>,
    /// Caller longitude for distance annotation.
    pub lng: Option<f64>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Records per page.
    pub size: Option<u32>,
}

impl PoiListQuery {
    /// Translate the query parameters into a remote filter. Listings only
    /// ever return enabled POIs.
    pub fn filter(&self) -> QueryFilter {
        let mut filter = QueryFilter::new().eq("status", 1);
        if let Some(region_id) = &self.region_id {
            filter = filter.eq("region_id", region_id.as_str());
        }
        if let Some(poi_type) = &self.poi_type {
            filter = filter.eq("type", poi_type.as_str());
        }
        filter
    }

    /// Caller position when both coordinates are supplied and non-zero.
    pub fn caller_position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat != 0.0 || lng != 0.0 => Some((lat, lng)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_forces_enabled_status_and_empty_images() {
        let record = PoiCreate {
            name: "Drum Tower".to_owned(),
            poi_type: "scenic".to_owned(),
            region_id: "r1".to_owned(),
            latitude: 0.0,
            longitude: 0.0,
            images: Vec::new(),
            desc: String::new(),
            address: String::new(),
            phone: String::new(),
            open_time: String::new(),
        }
        .into_record();

        assert_eq!(record["status"], 1);
        assert_eq!(record["images"], serde_json::json!([]));
    }

    #[test]
    fn filter_always_pins_enabled_status() {
        let query = PoiListQuery {
            region_id: Some("r1".to_owned()),
            poi_type: Some("food".to_owned()),
            ..PoiListQuery::default()
        };
        let doc = query.filter().to_document();

        assert_eq!(doc["where"]["status"]["$eq"], 1);
        assert_eq!(doc["where"]["region_id"]["$eq"], "r1");
        assert_eq!(doc["where"]["type"]["$eq"], "food");
    }

    #[test]
    fn caller_position_requires_both_coordinates() {
        let mut query = PoiListQuery {
            lat: Some(39.9),
            ..PoiListQuery::default()
        };
        assert_eq!(query.caller_position(), None);

        query.lng = Some(116.4);
        assert_eq!(query.caller_position(), Some((39.9, 116.4)));
    }

    #[test]
    fn zero_zero_caller_position_is_treated_as_unset() {
        let query = PoiListQuery {
            lat: Some(0.0),
            lng: Some(0.0),
            ..PoiListQuery::default()
        };
        assert_eq!(query.caller_position(), None);
    }

    #[test]
    fn update_patch_can_reset_status_to_zero() {
        let map = PoiUpdate {
            status: Some(0),
            ..PoiUpdate::default()
        }
        .into_patch()
        .into_map();

        assert_eq!(map["status"], 0);
        assert_eq!(map.len(), 2, "status plus the updated_at stamp");
    }
}
