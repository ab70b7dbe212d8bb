use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

use crate::task::{
  Task,
  TaskId
};

pub const DEFAULT_SOURCE_URL: &str =
  "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_SOURCE_LIMIT: usize = 5;

/// One element of the startup payload. Fields beyond `id` and `title`
/// are ignored.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct RemoteRecord {
  pub id:    TaskId,
  #[serde(default)]
  pub title: String
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum FetchError {
  #[error("Failed to fetch data")]
  Status {
    status:      u16,
    status_text: String
  },
  #[error("{0}")]
  Transport(String),
  #[error("failed to decode task records: {0}")]
  Decode(String)
}

pub fn parse_records(
  body: &str
) -> Result<Vec<RemoteRecord>, FetchError>
{
  serde_json::from_str(body).map_err(
    |err| FetchError::Decode(err.to_string())
  )
}

/// Maps the first `limit` records to fresh, unimportant tasks.
#[tracing::instrument(
  skip(records),
  fields(received = records.len())
)]
pub fn tasks_from_records(
  records: Vec<RemoteRecord>,
  limit: usize
) -> Vec<Task> {
  let tasks: Vec<Task> = records
    .into_iter()
    .take(limit)
    .map(|record| {
      Task::new(record.id, &record.title)
    })
    .collect();

  if tasks.iter().any(|task| task.name.is_empty()) {
    warn!("startup data contains untitled records");
  }
  debug!(
    kept = tasks.len(),
    "mapped startup records"
  );
  tasks
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keeps_first_records_only() {
    let body = r#"[
      {"userId":1,"id":1,"title":"sunt aut facere","body":"..."},
      {"userId":1,"id":2,"title":"qui est esse","body":"..."},
      {"userId":1,"id":3,"title":"ea molestias","body":"..."}
    ]"#;
    let records =
      parse_records(body).expect("decode");
    let tasks =
      tasks_from_records(records, 2);

    assert_eq!(
      tasks,
      vec![
        Task::new(1, "sunt aut facere"),
        Task::new(2, "qui est esse"),
      ]
    );
    assert!(
      tasks.iter().all(|t| !t.is_important)
    );
  }

  #[test]
  fn short_payload_is_not_padded() {
    let records = vec![RemoteRecord {
      id:    9,
      title: "only".to_string()
    }];
    assert_eq!(
      tasks_from_records(
        records,
        DEFAULT_SOURCE_LIMIT
      )
      .len(),
      1
    );
  }

  #[test]
  fn malformed_body_is_a_decode_error() {
    assert!(matches!(
      parse_records("{\"id\":1}"),
      Err(FetchError::Decode(_))
    ));
  }
}
