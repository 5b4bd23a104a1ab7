//! # Memory: per-thread checkpoints
//!
//! A [`Checkpointer`] maps a thread id to the latest [`Checkpoint`] of a run. The
//! compiled graph writes one after every node when it was compiled with
//! `compile_with_checkpointer` and invoked with a [`RunnableConfig`] carrying a
//! `thread_id`. It is a pure last-value store: no history, and runs never read it
//! back to resume, so repeated calls with the same thread id start fresh.
//!
//! ## Config
//!
//! [`RunnableConfig`] is passed to `CompiledStateGraph::invoke`:
//! - `thread_id`: optional; partitions checkpoint storage.
//! - `step_budget`: maximum node + router calls before the run fails.
//!
//! ## Checkpointer Implementations
//!
//! | Type            | Persistence | Use case                       |
//! |-----------------|-------------|--------------------------------|
//! | [`MemorySaver`] | In-memory   | Server process, dev, tests     |

mod checkpoint;
mod checkpointer;
mod config;
mod memory_saver;

pub use checkpoint::{Checkpoint, CheckpointMetadata};
pub use checkpointer::{CheckpointError, Checkpointer};
pub use config::{RunnableConfig, DEFAULT_STEP_BUDGET};
pub use memory_saver::MemorySaver;
