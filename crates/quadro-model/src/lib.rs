//! `quadro-model` defines the in-memory DataFrame and the task-graph node
//! used to chain processing steps over frames.
//!
//! The crate is intentionally small and self-contained so it can be reused
//! by:
//! - loaders that populate columns from external sources
//! - schedulers that walk task graphs
//! - display/export layers consuming the rendered rows
//!
//! All of those collaborators live outside this crate; only the frame/task
//! contracts are defined here.

mod frame;
mod row;
mod task;

pub use frame::{DataFrame, FrameError};
pub use task::{OutputSpec, TaskNode};
