use serde::{
  Deserialize,
  Serialize
};

pub type TaskId = u64;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:           TaskId,
  pub name:         String,
  #[serde(default)]
  pub is_important: bool
}

impl Task {
  pub fn new(
    id: TaskId,
    name: &str
  ) -> Self {
    Self {
      id,
      name: name.trim().to_string(),
      is_important: false
    }
  }

  pub fn matches_query(
    &self,
    needle_lower: &str
  ) -> bool {
    self
      .name
      .to_lowercase()
      .contains(needle_lower)
  }
}
