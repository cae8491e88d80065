//! The todo page loader.

use serde::de::DeserializeOwned;
use todo_core::{PageData, TodoPage};
use url::Url;

use crate::config::TodoClientConfig;
use crate::decode::decode_list;
use crate::error::LoadResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default page loader using the reqwest HTTP backend.
pub type DefaultTodoLoader = TodoLoader<ReqwestBackend>;

// ============================================================================
// Loader
// ============================================================================

/// Loads the todo list page from a fixed endpoint.
///
/// The loader holds no state between calls: each [`load`](Self::load)
/// issues a fresh `GET` with no query string, headers beyond the user
/// agent, or body.
pub struct TodoLoader<B: HttpBackend> {
    backend: B,
    url: Url,
}

impl DefaultTodoLoader {
    /// Create a loader with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &TodoClientConfig) -> LoadResult<Self> {
        let url = Url::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, url })
    }
}

impl<B: HttpBackend> TodoLoader<B> {
    /// Create a loader with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(url: Url, backend: B) -> Self {
        Self { backend, url }
    }

    /// The endpoint this loader requests.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the list endpoint and return its items as page data.
    ///
    /// Items are validated against the `Todo` shape; a mismatch is a
    /// [`LoadError::Decode`](crate::LoadError::Decode), never an empty page.
    pub async fn load(&self) -> LoadResult<TodoPage> {
        self.load_as().await
    }

    /// Like [`load`](Self::load), decoding items into any deserializable type.
    ///
    /// Decoding into `serde_json::Value` keeps every field exactly as sent.
    pub async fn load_as<T: DeserializeOwned>(&self) -> LoadResult<PageData<T>> {
        tracing::debug!(url = %self.url, "loading todo page");

        let result = self
            .backend
            .get_body(&self.url)
            .await
            .and_then(|body| decode_list(&body));

        match result {
            Ok(todos) => {
                tracing::debug!(url = %self.url, count = todos.len(), "todo page loaded");
                Ok(PageData::new(todos))
            }
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "todo page load failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::{Value, json};
    use todo_core::Todo;
    use tokio_test::{assert_err, assert_ok};

    pub fn loader(response: CannedResponse) -> TodoLoader<FakeBackend> {
        TodoLoader::with_backend(
            Url::parse("http://127.0.0.1:8000").unwrap(),
            FakeBackend::new(response),
        )
    }

    #[test]
    fn test_default_loader_creation() {
        let loader = DefaultTodoLoader::new(&TodoClientConfig::new()).unwrap();
        assert_eq!(loader.url().as_str(), "http://0.0.0.0:8000/");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = TodoClientConfig::new().with_base_url("localhost without scheme");
        assert!(matches!(
            DefaultTodoLoader::new(&config),
            Err(LoadError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_list_gives_empty_page() {
        let page = assert_ok!(loader(CannedResponse::ok("[]")).load().await);
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_typed_items_are_returned_in_order() {
        let loader = loader(CannedResponse::ok(
            r#"[{"id":2,"description":"b","done":false},{"id":1,"description":"a","done":true}]"#,
        ));

        let page = assert_ok!(loader.load().await);
        let ids: Vec<i64> = page.todos.iter().map(|t: &Todo| t.id).collect();
        assert_eq!(ids, [2, 1]);
        assert!(page.todos[1].done);
    }

    #[tokio::test]
    async fn test_load_as_value_preserves_literal_structure() {
        let loader = loader(CannedResponse::ok(r#"[{"id":1,"title":"a"}]"#));

        let page: PageData<Value> = assert_ok!(loader.load_as().await);
        assert_eq!(page.todos, vec![json!({"id": 1, "title": "a"})]);
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_not_an_empty_page() {
        let loader = loader(CannedResponse::ok(r#"[{"id":1,"title":"a"}]"#));
        let err = assert_err!(loader.load().await);
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_fails() {
        let loader = loader(CannedResponse::ok("oops"));
        let err = assert_err!(loader.load().await);
        assert!(matches!(err, LoadError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_error_status_fails() {
        let loader = loader(CannedResponse::status(500));
        let err = assert_err!(loader.load().await);
        assert!(matches!(err, LoadError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_every_load_hits_the_backend() {
        let loader = loader(CannedResponse::ok("[]"));

        for _ in 0..3 {
            assert_ok!(loader.load().await);
        }
        assert_eq!(loader.backend.calls(), 3);

        // A changed response is visible immediately
        loader
            .backend
            .set_response(CannedResponse::ok(r#"[{"id":9,"description":"new","done":false}]"#));
        assert_eq!(loader.load().await.unwrap().len(), 1);
        assert_eq!(loader.backend.calls(), 4);
    }
}
