use tracing::{
  debug,
  info,
  warn
};

use crate::task::{
  Task,
  TaskId
};
use crate::validate::{
  ValidationError,
  check_name
};

/// Deletes are refused once the collection is this small.
pub const MIN_TASKS: usize = 2;

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum DeleteOutcome {
  Removed(Task),
  /// The collection is already at the floor.
  Blocked,
  Missing
}

/// Owns the task collection. Every mutation goes through here so the name
/// rules and the deletion floor hold no matter who calls.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskStore {
  tasks:   Vec<Task>,
  /// `None` once the counter has handed out `TaskId::MAX`.
  next_id: Option<TaskId>
}

impl Default for TaskStore {
  fn default() -> Self {
    Self::new()
  }
}

impl TaskStore {
  pub fn new() -> Self {
    Self {
      tasks:   Vec::new(),
      next_id: Some(1)
    }
  }

  /// Seeds the collection with loaded tasks. Loaded data is taken as-is;
  /// the id counter starts past the largest id seen, or at the first free
  /// id when the largest is `TaskId::MAX`.
  #[tracing::instrument(
    skip(tasks),
    fields(count = tasks.len())
  )]
  pub fn from_tasks(
    tasks: Vec<Task>
  ) -> Self {
    let next_id = match tasks
      .iter()
      .map(|task| task.id)
      .max()
    {
      | None => Some(1),
      | Some(max) => {
        max
          .checked_add(1)
          .or_else(|| first_free_id(&tasks))
      }
    };

    for (idx, task) in
      tasks.iter().enumerate()
    {
      if tasks[..idx]
        .iter()
        .any(|prev| prev.name == task.name)
      {
        warn!(
          id = task.id,
          name = %task.name,
          "loaded task repeats an \
           earlier name"
        );
      }
    }

    info!(
      next_id = ?next_id,
      "seeded task store"
    );
    Self { tasks, next_id }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn at_floor(&self) -> bool {
    self.tasks.len() <= MIN_TASKS
  }

  /// Hands out the next unused id. Ids already present (possible after a
  /// fallback to the first free id) are skipped.
  fn claim_id(
    &mut self
  ) -> Result<TaskId, ValidationError> {
    let mut id = self
      .next_id
      .or_else(|| first_free_id(&self.tasks))
      .ok_or(ValidationError::IdsExhausted)?;
    while self.get(id).is_some() {
      id = id
        .checked_add(1)
        .or_else(|| first_free_id(&self.tasks))
        .ok_or(ValidationError::IdsExhausted)?;
    }
    self.next_id = id.checked_add(1);
    Ok(id)
  }

  #[tracing::instrument(skip(self))]
  pub fn add(
    &mut self,
    name: &str
  ) -> Result<Task, ValidationError> {
    let name =
      check_name(name, &self.tasks, None)?;

    let id = self.claim_id()?;
    let task =
      Task::new(id, name.as_str());
    self.tasks.push(task.clone());

    debug!(
      id = task.id,
      total = self.tasks.len(),
      "added task"
    );
    Ok(task)
  }

  /// Returns `Ok(false)` when no task has `id`.
  #[tracing::instrument(skip(self))]
  pub fn edit(
    &mut self,
    id: TaskId,
    new_name: &str
  ) -> Result<bool, ValidationError> {
    if self.get(id).is_none() {
      debug!(id, "edit target missing");
      return Ok(false);
    }

    let name = check_name(
      new_name,
      &self.tasks,
      Some(id)
    )?;

    if let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    {
      task.name = name.into_inner();
    }
    debug!(id, "renamed task");
    Ok(true)
  }

  /// Flips the flag and returns the new value.
  #[tracing::instrument(skip(self))]
  pub fn toggle_important(
    &mut self,
    id: TaskId
  ) -> Option<bool> {
    let task = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)?;
    task.is_important =
      !task.is_important;
    debug!(
      id,
      important = task.is_important,
      "toggled importance"
    );
    Some(task.is_important)
  }

  #[tracing::instrument(skip(self))]
  pub fn delete(
    &mut self,
    id: TaskId
  ) -> DeleteOutcome {
    let Some(pos) = self
      .tasks
      .iter()
      .position(|task| task.id == id)
    else {
      return DeleteOutcome::Missing;
    };

    if self.at_floor() {
      info!(
        id,
        total = self.tasks.len(),
        "delete blocked at task floor"
      );
      return DeleteOutcome::Blocked;
    }

    let removed = self.tasks.remove(pos);
    debug!(
      id,
      total = self.tasks.len(),
      "deleted task"
    );
    DeleteOutcome::Removed(removed)
  }
}

fn first_free_id(
  tasks: &[Task]
) -> Option<TaskId> {
  (1..=TaskId::MAX).find(|id| {
    !tasks.iter().any(|task| task.id == *id)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn store_of(
    names: &[&str]
  ) -> TaskStore {
    let tasks = names
      .iter()
      .enumerate()
      .map(|(idx, name)| {
        Task::new(idx as TaskId + 1, name)
      })
      .collect();
    TaskStore::from_tasks(tasks)
  }

  #[test]
  fn add_appends_trimmed_task() {
    let mut store =
      store_of(&["A", "B"]);
    let task = store
      .add("  Water plants ")
      .expect("valid name");

    assert_eq!(task.id, 3);
    assert_eq!(task.name, "Water plants");
    assert!(!task.is_important);
    assert_eq!(
      store.tasks().last(),
      Some(&task)
    );
  }

  #[test]
  fn add_rejects_empty_and_duplicate() {
    let mut store =
      store_of(&["A", "B"]);
    assert_eq!(
      store.add("  "),
      Err(ValidationError::EmptyName)
    );
    assert_eq!(
      store.add(" B"),
      Err(ValidationError::DuplicateTask)
    );
    assert_eq!(store.len(), 2);
  }

  #[test]
  fn ids_stay_unique_after_deletes() {
    let mut store =
      store_of(&["A", "B", "C"]);
    assert!(matches!(
      store.delete(2),
      DeleteOutcome::Removed(_)
    ));

    let added =
      store.add("D").expect("valid name");
    assert_eq!(added.id, 4);

    let mut ids: Vec<_> = store
      .tasks()
      .iter()
      .map(|task| task.id)
      .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), store.len());
  }

  #[test]
  fn seeded_counter_skips_past_largest_id(
  ) {
    let mut store = TaskStore::from_tasks(
      vec![
        Task::new(10, "x"),
        Task::new(4, "y"),
      ]
    );
    assert_eq!(
      store.add("z").expect("valid").id,
      11
    );
  }

  #[test]
  fn largest_possible_id_falls_back_to_free_ids(
  ) {
    let mut store = TaskStore::from_tasks(
      vec![
        Task::new(TaskId::MAX, "x"),
        Task::new(1, "y"),
        Task::new(3, "w"),
      ]
    );

    let ids: Vec<_> = ["a", "b", "c"]
      .iter()
      .map(|name| {
        store.add(name).expect("valid").id
      })
      .collect();
    assert_eq!(ids, vec![2, 4, 5]);
  }

  #[test]
  fn counter_reaching_max_wraps_to_free_ids(
  ) {
    let mut store = TaskStore::from_tasks(
      vec![
        Task::new(TaskId::MAX - 1, "x"),
        Task::new(2, "y"),
      ]
    );
    assert_eq!(
      store.add("a").expect("valid").id,
      TaskId::MAX
    );
    assert_eq!(
      store.add("b").expect("valid").id,
      1
    );
    assert_eq!(
      store.add("c").expect("valid").id,
      3
    );
  }

  #[test]
  fn delete_respects_floor() {
    let mut store =
      store_of(&["A", "B", "C"]);
    assert!(matches!(
      store.delete(1),
      DeleteOutcome::Removed(task) if task.name == "A"
    ));
    assert_eq!(
      store.delete(2),
      DeleteOutcome::Blocked
    );
    assert_eq!(store.len(), 2);
  }

  #[test]
  fn delete_unknown_id_is_noop() {
    let mut store =
      store_of(&["A", "B", "C"]);
    assert_eq!(
      store.delete(99),
      DeleteOutcome::Missing
    );
    assert_eq!(store.len(), 3);
  }

  #[test]
  fn toggle_flips_and_reports() {
    let mut store =
      store_of(&["A", "B"]);
    assert_eq!(
      store.toggle_important(2),
      Some(true)
    );
    assert_eq!(
      store.toggle_important(2),
      Some(false)
    );
    assert_eq!(
      store.toggle_important(42),
      None
    );
  }

  #[test]
  fn edit_renames_and_checks_names() {
    let mut store =
      store_of(&["A", "B"]);

    assert_eq!(
      store.edit(1, "  A2 "),
      Ok(true)
    );
    assert_eq!(
      store.get(1).map(|t| t.name.as_str()),
      Some("A2")
    );

    assert_eq!(
      store.edit(1, "B"),
      Err(ValidationError::DuplicateTask)
    );
    assert_eq!(
      store.edit(1, ""),
      Err(ValidationError::EmptyName)
    );
    assert_eq!(store.edit(1, "A2"), Ok(true));
    assert_eq!(store.edit(9, "Z"), Ok(false));
  }
}
