//! Partial-update patch construction.
//!
//! Each update DTO narrows the client payload to its whitelisted business
//! fields and folds them into a [`Patch`]. System fields (`_id`, `_openid`,
//! `created_at`) never pass through here because the DTOs do not carry
//! them. `updated_at` is stamped on every patch regardless of which
//! business fields changed.
//!
//! Fields are explicit-presence (`Option<T>`): an omitted field leaves the
//! stored value untouched, while a supplied zero is honoured, so numeric
//! fields like `sort` or `status` can be reset.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Current time as an RFC 3339 string, the timestamp format stored in
/// every record's audit fields.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Accumulates whitelisted fields for an outbound update.
#[derive(Debug, Clone)]
pub struct Patch {
    fields: Map<String, Value>,
}

impl Default for Patch {
    fn default() -> Self {
        Self::new()
    }
}

impl Patch {
    /// Start a patch with `updated_at` already stamped.
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("updated_at".to_owned(), Value::from(now_rfc3339()));
        Self { fields }
    }

    /// Include `field` only when the DTO supplied a value for it.
    #[must_use]
    pub fn set_if_present<T: Into<Value>>(mut self, field: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.fields.insert(field.to_owned(), value.into());
        }
        self
    }

    /// Unconditionally include `field`.
    #[must_use]
    pub fn set<T: Into<Value>>(mut self, field: &str, value: T) -> Self {
        self.fields.insert(field.to_owned(), value.into());
        self
    }

    /// Number of fields in the patch, `updated_at` included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when only the `updated_at` stamp is present.
    pub fn is_empty(&self) -> bool {
        self.fields.len() <= 1
    }

    /// Consume the builder into the outbound field map.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_patch_carries_an_updated_at_stamp() {
        let map = Patch::new().into_map();
        assert!(map.contains_key("updated_at"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn absent_fields_never_reach_the_outbound_patch() {
        let map = Patch::new()
            .set_if_present("name", Some("West Lake"))
            .set_if_present::<i64>("sort", None)
            .into_map();

        assert_eq!(map.get("name"), Some(&Value::from("West Lake")));
        assert!(!map.contains_key("sort"));
    }

    #[test]
    fn explicit_zero_is_honoured() {
        // The explicit-presence contract: Some(0) resets the field.
        let map = Patch::new().set_if_present("sort", Some(0)).into_map();
        assert_eq!(map.get("sort"), Some(&Value::from(0)));
    }

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let stamp = now_rfc3339();
        assert!(stamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
