//! Reqwest-backed adapter for the remote document service.
//!
//! This adapter owns transport details only: JSON serialisation, bearer
//! authentication, timeout, HTTP error mapping, and envelope decoding. It
//! never retries; every call is a discrete, independently-failing unit of
//! work.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domain::{DocumentStore, Page, PageRequest, QueryFilter, StoreError};

/// Default timeout for a single outbound call. The remote protocol offers
/// no cancellation, so an explicit bound replaces unbounded blocking.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP adapter speaking the remote service's query-document protocol:
/// `/v1/model/prod/{collection}/{verb}` with filters nested under
/// `filter.where.{field}.$eq`.
pub struct HttpDocumentStore {
    client: Client,
    base_url: Url,
    access_token: String,
}

impl HttpDocumentStore {
    /// Build an adapter against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            access_token: access_token.into(),
        })
    }

    /// Build an adapter for a hosted environment, deriving the base URL
    /// from the environment identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] when the derived URL is invalid or
    /// the client cannot be constructed.
    pub fn for_environment(
        env_id: &str,
        access_token: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let base_url = Url::parse(&format!("https://{env_id}.api.tcloudbasegateway.com"))
            .map_err(|err| StoreError::transport(format!("invalid environment URL: {err}")))?;
        Self::new(base_url, access_token, DEFAULT_REQUEST_TIMEOUT)
            .map_err(|err| StoreError::transport(err.to_string()))
    }

    fn verb_path(collection: &str, verb: &str) -> String {
        format!("/v1/model/prod/{collection}/{verb}")
    }

    fn id_filter(id: &str) -> Value {
        QueryFilter::by_id(id).to_document()
    }

    /// Issue one authenticated call and read the full response body.
    ///
    /// A 2xx response with an empty body yields `Ok(None)`; a non-2xx
    /// response maps to [`StoreError::RemoteApi`] with the raw body kept
    /// for diagnostics.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, StoreError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| StoreError::transport(format!("invalid request path: {err}")))?;

        let mut request = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.access_token);
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, path, "document store request");
        let response = request
            .send()
            .await
            .map_err(|err| StoreError::transport(err.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| StoreError::transport(err.to_string()))?;

        if !status.is_success() {
            return Err(StoreError::RemoteApi {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|err| StoreError::malformed(format!("invalid JSON response: {err}")))
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn create(&self, collection: &str, record: Value) -> Result<Value, StoreError> {
        let payload = json!({ "data": record });
        self.request(
            Method::POST,
            &Self::verb_path(collection, "create"),
            Some(&payload),
        )
        .await?
        .ok_or_else(|| StoreError::malformed("create response was empty"))
    }

    async fn list(
        &self,
        collection: &str,
        filter: Option<&QueryFilter>,
        page: PageRequest,
    ) -> Result<Page<Value>, StoreError> {
        let mut payload = Map::new();
        payload.insert("pageNumber".to_owned(), Value::from(page.page()));
        payload.insert("pageSize".to_owned(), Value::from(page.size()));
        payload.insert("getCount".to_owned(), Value::from(true));
        // An absent filter means "match all"; an empty one is not sent.
        if let Some(filter) = filter.filter(|filter| !filter.is_empty()) {
            payload.insert("filter".to_owned(), filter.to_document());
        }

        let body = self
            .request(
                Method::POST,
                &Self::verb_path(collection, "list"),
                Some(&Value::Object(payload)),
            )
            .await?
            .ok_or_else(|| StoreError::malformed("list response was empty"))?;
        Page::from_envelope(&body)
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        // The remote service exposes no single-record verb; a one-record
        // list on _id is the protocol's lookup.
        let filter = QueryFilter::by_id(id);
        let page = self
            .list(collection, Some(&filter), PageRequest::single())
            .await?;
        page.records
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<(), StoreError> {
        let payload = json!({
            "filter": Self::id_filter(id),
            "data": Value::Object(patch),
        });
        self.request(
            Method::PUT,
            &Self::verb_path(collection, "update"),
            Some(&payload),
        )
        .await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let payload = json!({ "filter": Self::id_filter(id) });
        self.request(
            Method::POST,
            &Self::verb_path(collection, "delete"),
            Some(&payload),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_paths_follow_the_remote_layout() {
        assert_eq!(
            HttpDocumentStore::verb_path("pois", "list"),
            "/v1/model/prod/pois/list"
        );
        assert_eq!(
            HttpDocumentStore::verb_path("favorites", "create"),
            "/v1/model/prod/favorites/create"
        );
    }

    #[test]
    fn identifier_filters_wrap_the_id_in_an_operator() {
        let filter = HttpDocumentStore::id_filter("abc");
        assert_eq!(filter["where"]["_id"]["$eq"], "abc");
    }

    #[test]
    fn environment_base_url_is_derived_from_the_env_id() {
        let store =
            HttpDocumentStore::for_environment("env-123", "token").expect("store builds");
        assert_eq!(
            store.base_url.as_str(),
            "https://env-123.api.tcloudbasegateway.com/"
        );
    }
}
