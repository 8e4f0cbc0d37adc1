//! Pagination normalisation and page-envelope decoding.

use serde_json::Value;

use super::ports::StoreError;

/// Hard upper bound on page size across every resource.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Normalised pagination parameters transmitted to the remote service.
///
/// Construction always clamps: page is at least 1; a missing or zero size
/// falls back to the resource default, an oversize request is capped at
/// [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Normalise raw query parameters against a per-resource default size.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::PageRequest;
    ///
    /// assert_eq!(PageRequest::normalised(None, Some(500), 10).size(), 100);
    /// assert_eq!(PageRequest::normalised(Some(0), Some(0), 10).size(), 10);
    /// ```
    pub fn normalised(page: Option<u32>, size: Option<u32>, default_size: u32) -> Self {
        let page = page.unwrap_or(1).max(1);
        let size = match size {
            None | Some(0) => default_size,
            Some(requested) => requested.min(MAX_PAGE_SIZE),
        };
        Self { page, size }
    }

    /// Page 1 with a single record, used for identifier lookups and
    /// existence probes.
    pub fn single() -> Self {
        Self { page: 1, size: 1 }
    }

    /// 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Records per page.
    pub fn size(&self) -> u32 {
        self.size
    }
}

/// One page of records plus the optional total count.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct Page<T> {
    /// Records in remote order.
    pub records: Vec<T>,
    /// Total matching records, when the remote service counted them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl Page<Value> {
    /// Decode the remote list envelope `{"data": {"records": [...],
    /// "total": n?}}`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MalformedResponse`] when the body does not
    /// carry a `data.records` array.
    pub fn from_envelope(body: &Value) -> Result<Self, StoreError> {
        let data = body
            .get("data")
            .ok_or_else(|| StoreError::malformed("list response is missing the data object"))?;
        let records = data
            .get("records")
            .and_then(Value::as_array)
            .ok_or_else(|| StoreError::malformed("list response is missing the records array"))?
            .clone();
        let total = data.get("total").and_then(Value::as_u64);
        Ok(Self { records, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero_size(Some(1), Some(0), 10, 1, 10)]
    #[case::oversize(Some(2), Some(500), 10, 2, 100)]
    #[case::missing(None, None, 20, 1, 20)]
    #[case::zero_page(Some(0), Some(5), 20, 1, 5)]
    #[case::in_range(Some(3), Some(40), 20, 3, 40)]
    fn clamps_page_and_size(
        #[case] page: Option<u32>,
        #[case] size: Option<u32>,
        #[case] default_size: u32,
        #[case] expected_page: u32,
        #[case] expected_size: u32,
    ) {
        let request = PageRequest::normalised(page, size, default_size);
        assert_eq!(request.page(), expected_page);
        assert_eq!(request.size(), expected_size);
    }

    #[test]
    fn decodes_the_remote_list_envelope() {
        let body = serde_json::json!({
            "data": { "records": [{ "_id": "a" }, { "_id": "b" }], "total": 2 }
        });
        let page = Page::from_envelope(&body).expect("envelope decodes");
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total, Some(2));
    }

    #[test]
    fn missing_records_array_is_malformed() {
        let body = serde_json::json!({ "data": { "rows": [] } });
        let error = Page::from_envelope(&body).expect_err("decode should fail");
        assert!(matches!(error, StoreError::MalformedResponse { .. }));
    }

    #[test]
    fn total_is_optional() {
        let body = serde_json::json!({ "data": { "records": [] } });
        let page = Page::from_envelope(&body).expect("envelope decodes");
        assert!(page.records.is_empty());
        assert_eq!(page.total, None);
    }
}
