//! Query-document builder for the remote document service.
//!
//! The remote list/update/delete verbs filter through a nested document of
//! the shape `{"where": {field: {"$eq": value}}, "orderBy": [{"field": f,
//! "order": "asc"|"desc"}]}`. Every caller-supplied value is wrapped in an
//! operator object; a bare scalar is never transmitted.

use serde_json::{Map, Value, json};

/// Sort direction for an `orderBy` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Builder for the remote service's `{where, orderBy}` query document.
///
/// # Examples
/// ```
/// use backend::domain::QueryFilter;
///
/// let filter = QueryFilter::new().eq("status", 1).eq("region_id", "r1");
/// let doc = filter.to_document();
/// assert_eq!(doc["where"]["status"]["$eq"], 1);
/// assert_eq!(doc["where"]["region_id"]["$eq"], "r1");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    conditions: Vec<(String, Value)>,
    order_by: Vec<(String, SortOrder)>,
}

impl QueryFilter {
    /// Create an empty filter ("match all").
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching a single record by its system identifier.
    pub fn by_id(id: &str) -> Self {
        Self::new().eq("_id", id)
    }

    /// Add a field-equality condition.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    /// Sort ascending on `field`.
    #[must_use]
    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.order_by.push((field.into(), SortOrder::Asc));
        self
    }

    /// Sort descending on `field`.
    #[must_use]
    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.order_by.push((field.into(), SortOrder::Desc));
        self
    }

    /// Field-equality conditions in insertion order.
    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    /// True when the filter carries no conditions and no ordering. An empty
    /// filter is omitted from the outbound list payload entirely.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.order_by.is_empty()
    }

    /// Render the nested query document the remote service expects.
    pub fn to_document(&self) -> Value {
        let mut where_doc = Map::new();
        for (field, value) in &self.conditions {
            where_doc.insert(field.clone(), json!({ "$eq": value }));
        }

        let mut document = Map::new();
        document.insert("where".to_owned(), Value::Object(where_doc));
        if !self.order_by.is_empty() {
            let order: Vec<Value> = self
                .order_by
                .iter()
                .map(|(field, order)| json!({ "field": field, "order": order.as_str() }))
                .collect();
            document.insert("orderBy".to_owned(), Value::Array(order));
        }
        Value::Object(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_every_value_in_an_operator_object() {
        let doc = QueryFilter::new()
            .eq("status", 1)
            .eq("region_id", "r1")
            .to_document();

        assert_eq!(
            doc,
            serde_json::json!({
                "where": {
                    "status": { "$eq": 1 },
                    "region_id": { "$eq": "r1" },
                }
            })
        );
    }

    #[test]
    fn identifier_filter_targets_the_system_id_field() {
        let doc = QueryFilter::by_id("abc123").to_document();
        assert_eq!(doc["where"]["_id"]["$eq"], "abc123");
    }

    #[test]
    fn ordering_is_rendered_as_field_order_pairs() {
        let doc = QueryFilter::new()
            .eq("resource_type", "poi")
            .order_desc("created_at")
            .to_document();

        assert_eq!(
            doc["orderBy"],
            serde_json::json!([{ "field": "created_at", "order": "desc" }])
        );
    }

    #[test]
    fn empty_filter_reports_empty_and_omits_order_by() {
        let filter = QueryFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.to_document(), serde_json::json!({ "where": {} }));
    }
}
