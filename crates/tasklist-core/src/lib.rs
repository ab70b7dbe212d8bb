pub mod config;
pub mod filter;
pub mod session;
pub mod source;
pub mod store;
pub mod task;
pub mod validate;
pub mod view;

pub use config::Config;
pub use session::{
  Action,
  LoadState,
  Session
};
pub use source::{
  FetchError,
  RemoteRecord
};
pub use store::{
  DeleteOutcome,
  TaskStore
};
pub use task::{
  Task,
  TaskId
};
pub use validate::{
  ValidName,
  ValidationError,
  validate_submission
};
pub use view::{
  DeleteRequest,
  DeleteState,
  SubmitOutcome,
  TaskListView
};
