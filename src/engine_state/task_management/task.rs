//! # Task System Core Traits
//!
//! This module defines the building blocks of the task system, which runs
//! work on background threads and applies the results on the thread that owns
//! the world.
//!
//! ## Core Components
//! - `Task`: a unit of work that can be executed on a worker thread
//! - `TaskResult`: the result of a completed task
//!
//! ## Task Lifecycle
//! 1. A `Task` is created and scheduled via `TaskManager::publish_task()`
//! 2. The task's `process()` method is called on a worker thread
//! 3. The task returns a boxed `TaskResult`
//! 4. The result's `handle_result()` is called on the owning thread with the
//!    world borrowed mutably
//! 5. The result can spawn follow-up tasks
//!
//! ## Thread Safety
//! - `Task` must be `Send` to be transferred to a worker
//! - `TaskResult` must be `Send` to be transferred back
//! - Tasks own everything they read; the world itself never crosses threads

use crate::engine_state::voxels::world::World;

/// A unit of work that can be executed on a worker thread.
///
/// Tasks should be self-contained and own all the data they need, typically
/// behind an `Arc` for data shared between many tasks.
pub trait Task: Send {
    /// Performs the work and returns the result to apply.
    ///
    /// Runs on a background thread. Failures are reported through the
    /// returned result rather than by panicking, since a panic takes the
    /// worker down with it.
    fn process(&self) -> Box<dyn TaskResult + Send>;
}

/// The result of processing a [`Task`].
///
/// Results are applied on the thread that owns the [`World`], which keeps
/// every mutation of the chunk store on a single thread.
pub trait TaskResult: Send {
    /// Applies the result, returning any follow-up tasks to schedule.
    ///
    /// Keep this cheap: it runs inside the frame.
    fn handle_result(self: Box<Self>, world: &mut World) -> Vec<Box<dyn Task + Send>>;
}
