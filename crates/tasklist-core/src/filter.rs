use crate::task::Task;

/// Tasks visible under `query`, in collection order.
///
/// A query that trims to nothing shows everything. Otherwise the raw
/// query (untrimmed) is matched case-insensitively as a substring of the
/// task name.
pub fn filter_tasks<'a>(
  tasks: &'a [Task],
  query: &str
) -> Vec<&'a Task> {
  if query.trim().is_empty() {
    return tasks.iter().collect();
  }

  let needle = query.to_lowercase();
  tasks
    .iter()
    .filter(|task| {
      task.matches_query(&needle)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn names<'a>(
    tasks: &[&'a Task]
  ) -> Vec<&'a str> {
    tasks
      .iter()
      .map(|task| task.name.as_str())
      .collect()
  }

  #[test]
  fn blank_query_returns_everything() {
    let tasks = vec![
      Task::new(1, "Buy milk"),
      Task::new(2, "Call mom"),
    ];
    assert_eq!(
      names(&filter_tasks(&tasks, "")),
      vec!["Buy milk", "Call mom"]
    );
    assert_eq!(
      filter_tasks(&tasks, "   ").len(),
      2
    );
  }

  #[test]
  fn match_ignores_case() {
    let tasks = vec![
      Task::new(1, "Buy milk"),
      Task::new(2, "Call mom"),
      Task::new(3, "Book flights"),
    ];
    assert_eq!(
      names(&filter_tasks(&tasks, "b")),
      vec!["Buy milk", "Book flights"]
    );
    assert_eq!(
      names(&filter_tasks(&tasks, "MOM")),
      vec!["Call mom"]
    );
  }

  #[test]
  fn surrounding_spaces_in_query_are_significant(
  ) {
    let tasks = vec![
      Task::new(1, "Buy milk"),
      Task::new(2, "Call mom"),
    ];
    assert_eq!(
      names(&filter_tasks(&tasks, " m")),
      vec!["Buy milk", "Call mom"]
    );
    assert!(
      filter_tasks(&tasks, "milk ")
        .is_empty()
    );
  }
}
