//! Great-circle distance enrichment for location-aware listings.
//!
//! A POI list response can be annotated with the distance from a
//! caller-supplied coordinate to each record's stored coordinate. This is a
//! pure post-processing pass: nothing is persisted.

use serde_json::Value;

/// Mean Earth radius in metres, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Field attached to enriched records.
pub const DISTANCE_FIELD: &str = "_distance";

/// Haversine great-circle distance in metres between two WGS84 points.
///
/// # Examples
/// ```
/// use backend::domain::geo::haversine_meters;
///
/// let one_degree = haversine_meters(0.0, 0.0, 0.0, 1.0);
/// assert_eq!(one_degree.round() as i64, 111_195);
/// ```
pub fn haversine_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Annotate each record holding a non-zero stored coordinate with the
/// rounded distance (in metres) from the caller's position.
///
/// A record whose latitude and longitude are both zero has no known
/// location and is left untouched; zero here means "unset", not a point on
/// the equator at the prime meridian.
pub fn enrich_with_distance(records: &mut [Value], caller_lat: f64, caller_lng: f64) {
    for record in records.iter_mut() {
        let lat = record
            .get("latitude")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        let lng = record
            .get("longitude")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        if lat == 0.0 && lng == 0.0 {
            continue;
        }

        let distance = haversine_meters(caller_lat, caller_lng, lat, lng).round();
        if let Some(fields) = record.as_object_mut() {
            fields.insert(DISTANCE_FIELD.to_owned(), Value::from(distance as i64));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let expected = (EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0).round();
        let computed = haversine_meters(0.0, 0.0, 0.0, 1.0).round();
        assert_eq!(computed, expected);
        assert_eq!(computed as i64, 111_195);
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(haversine_meters(39.9, 116.4, 39.9, 116.4), 0.0);
    }

    #[test]
    fn annotates_located_records_and_skips_unlocated_ones() {
        let mut records = vec![
            json!({ "_id": "a", "latitude": 0.0, "longitude": 1.0 }),
            json!({ "_id": "b", "latitude": 0.0, "longitude": 0.0 }),
            json!({ "_id": "c" }),
        ];

        enrich_with_distance(&mut records, 0.0, 0.0);

        assert_eq!(records[0][DISTANCE_FIELD], 111_195);
        assert!(
            records[1].get(DISTANCE_FIELD).is_none(),
            "zero coordinates mean no known location"
        );
        assert!(records[2].get(DISTANCE_FIELD).is_none());
    }
}
