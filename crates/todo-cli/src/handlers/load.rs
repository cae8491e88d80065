//! Load command handler.
//!
//! Runs one page load and prints the resulting page data.

use std::io::Write;
use std::time::Duration;

use todo_client::{DefaultTodoLoader, TodoClientConfig};
use todo_core::TodoFeedPort;

use crate::error::CliError;

/// Build the loader for `todo load`.
///
/// Without `timeout_secs` requests wait for the server indefinitely.
pub fn build_loader(
    base_url: &str,
    timeout_secs: Option<u64>,
) -> Result<DefaultTodoLoader, CliError> {
    let config = TodoClientConfig::new()
        .with_base_url(base_url)
        .with_optional_timeout(timeout_secs.map(Duration::from_secs));

    DefaultTodoLoader::new(&config).map_err(|e| CliError::Config(e.to_string()))
}

/// Execute the load command.
///
/// Writes the page data as pretty-printed JSON followed by a newline.
/// Nothing is written when the load fails.
pub async fn execute(feed: &dyn TodoFeedPort, out: &mut impl Write) -> Result<(), CliError> {
    let page = feed.load_page().await?;

    serde_json::to_writer_pretty(&mut *out, &page)?;
    writeln!(out)?;
    Ok(())
}
