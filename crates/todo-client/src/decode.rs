//! Structural decoding of the list endpoint's body.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::{LoadError, LoadResult};

/// Decode a response body into a list of items.
///
/// Syntax errors and truncated input are reported as
/// [`LoadError::MalformedBody`]; well-formed JSON of the wrong shape as
/// [`LoadError::Decode`].
pub(crate) fn decode_list<T: DeserializeOwned>(body: &[u8]) -> LoadResult<Vec<T>> {
    serde_json::from_slice(body).map_err(|e| match e.classify() {
        Category::Data => LoadError::Decode(e),
        Category::Syntax | Category::Eof | Category::Io => LoadError::MalformedBody(e),
    })
}
