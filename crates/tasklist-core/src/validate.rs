use serde::{
  Deserialize,
  Serialize
};

use crate::task::{
  Task,
  TaskId
};

/// Rejection reasons for a task name submitted through the form.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  thiserror::Error,
)]
pub enum ValidationError {
  #[error("Please enter the task")]
  EmptyName,
  #[error("Task already exists")]
  DuplicateTask,
  /// Evaluated against the collection as it is now, not as it would be
  /// after the submission lands. Only fires when fewer than the floor
  /// already exist.
  #[error(
    "At least two records are required"
  )]
  TooFewRecords,
  #[error("No task ids left")]
  IdsExhausted
}

/// A trimmed, non-empty name that did not collide with the collection it
/// was checked against.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ValidName(String);

impl ValidName {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl AsRef<str> for ValidName {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

/// Name rules shared by add and edit. `except` skips the task being
/// renamed so it may keep its own name.
pub fn check_name(
  name: &str,
  tasks: &[Task],
  except: Option<TaskId>
) -> Result<ValidName, ValidationError> {
  let trimmed = name.trim();
  if trimmed.is_empty() {
    return Err(
      ValidationError::EmptyName
    );
  }

  let taken = tasks.iter().any(|task| {
    Some(task.id) != except
      && task.name == trimmed
  });
  if taken {
    return Err(
      ValidationError::DuplicateTask
    );
  }

  Ok(ValidName(trimmed.to_string()))
}

#[tracing::instrument(
  skip(tasks),
  fields(total = tasks.len())
)]
pub fn validate_submission(
  name: &str,
  tasks: &[Task],
  min_records: usize
) -> Result<ValidName, ValidationError> {
  let valid =
    check_name(name, tasks, None)?;

  if tasks.len() < min_records {
    tracing::debug!(
      min_records,
      "submission rejected: collection \
       below record minimum"
    );
    return Err(
      ValidationError::TooFewRecords
    );
  }

  Ok(valid)
}
