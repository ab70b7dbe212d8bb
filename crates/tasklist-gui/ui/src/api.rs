use gloo::net::http::Request;
use tasklist_core::config::SourceConfig;
use tasklist_core::source::{
  parse_records,
  tasks_from_records
};
use tasklist_core::{
  FetchError,
  Task
};

/// One GET against the configured source. Any failure is final; the
/// caller shows it and does not retry.
pub async fn fetch_initial_tasks(
  source: &SourceConfig
) -> Result<Vec<Task>, FetchError> {
  tracing::info!(url = %source.url, limit = source.limit, "fetching initial tasks");

  let response = Request::get(&source.url)
    .send()
    .await
    .map_err(|e| {
      FetchError::Transport(e.to_string())
    })?;

  if !response.ok() {
    tracing::warn!(
      status = response.status(),
      status_text = %response.status_text(),
      "task source returned an error status"
    );
    return Err(FetchError::Status {
      status:      response.status(),
      status_text: response.status_text()
    });
  }

  let body =
    response.text().await.map_err(|e| {
      FetchError::Transport(e.to_string())
    })?;
  let records = parse_records(&body)?;

  Ok(tasks_from_records(
    records,
    source.limit
  ))
}
