//! # Task Management System
//!
//! A small worker pool for running chunk generation off the ticking thread.
//!
//! ## Architecture Overview
//! - `TaskManager`: central coordinator for task distribution and workers
//! - `Task`: a unit of work executed on a worker
//! - `TaskResult`: the result of a completed task, applied to the world
//! - `TaskChannel`: the channel pair between the owning thread and one worker
//!
//! Each worker is a `std::thread` with a dedicated task channel and result
//! channel. Tasks are handed out round-robin with at most
//! [`MAX_TASKS_IN_FLIGHT`] per worker; anything beyond that waits in a FIFO
//! queue until a worker frees up.
//!
//! ## Task Lifecycle
//! 1. Tasks are published via `TaskManager::publish_task()`
//! 2. The manager sends them to available workers using round-robin
//! 3. Workers process tasks and send back results
//! 4. Results are applied on the owning thread in `process_completed_tasks()`
//! 5. Results can spawn new tasks
//!
//! ## Example Usage
//! ```ignore
//! let mut task_manager = TaskManager::new(num_workers);
//! task_manager.publish_task(Box::new(ChunkGenerationTask::new(generator, coordinate, options)));
//!
//! // In the main loop:
//! task_manager.process_completed_tasks(&mut world);
//! task_manager.process_queued_tasks();
//! ```

pub mod task;

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};
use task::{Task, TaskResult};

use super::voxels::world::World;

/// A communication channel between the owning thread and one worker thread.
#[derive(Debug)]
pub struct TaskChannel {
    task_sender: Sender<Box<dyn Task + Send>>,
    result_receiver: Receiver<Box<dyn TaskResult + Send>>,
    num_tasks_in_flight: usize,
    _worker: JoinHandle<()>,
}

/// Manages a pool of worker threads and coordinates task execution.
///
/// Dropping the manager closes every task channel, which ends each worker's
/// receive loop.
pub struct TaskManager {
    channels: Vec<TaskChannel>,
    queued_tasks: VecDeque<Box<dyn Task + Send>>,
    current_channel: usize,
}

/// Maximum number of tasks that can be in flight per worker channel.
pub const MAX_TASKS_IN_FLIGHT: usize = 1;

impl TaskManager {
    /// Creates a manager with `num_workers` worker threads.
    ///
    /// A worker that fails to spawn is logged and left out of the pool.
    pub fn new(num_workers: usize) -> Self {
        info!(
            "Starting {} workers, available parallelism: {:?}",
            num_workers,
            thread::available_parallelism()
        );

        let mut channels = Vec::with_capacity(num_workers);
        for index in 0..num_workers {
            let (task_tx, task_rx) = channel::<Box<dyn Task + Send>>();
            let (result_tx, result_rx) = channel::<Box<dyn TaskResult + Send>>();

            let task_closure = move || {
                while let Ok(task) = task_rx.recv() {
                    let result = task.process();
                    if result_tx.send(result).is_err() {
                        break;
                    }
                }
            };

            match thread::Builder::new()
                .name(format!("chunk-worker-{index}"))
                .spawn(task_closure)
            {
                Ok(worker) => channels.push(TaskChannel {
                    task_sender: task_tx,
                    result_receiver: result_rx,
                    num_tasks_in_flight: 0,
                    _worker: worker,
                }),
                Err(error) => warn!("Failed to spawn worker {}: {}", index, error),
            }
        }

        TaskManager {
            channels,
            queued_tasks: VecDeque::new(),
            current_channel: 0,
        }
    }

    /// Number of live workers.
    pub fn worker_count(&self) -> usize {
        self.channels.len()
    }

    /// Tasks sent to workers whose results have not been applied yet.
    pub fn tasks_in_flight(&self) -> usize {
        self.channels
            .iter()
            .map(|channel| channel.num_tasks_in_flight)
            .sum()
    }

    /// Tasks waiting for a free worker.
    pub fn queued_task_count(&self) -> usize {
        self.queued_tasks.len()
    }

    /// Whether nothing is queued or in flight.
    pub fn is_idle(&self) -> bool {
        self.queued_tasks.is_empty() && self.tasks_in_flight() == 0
    }

    /// Tries to send a task to a specific worker, handing it back if the
    /// worker has gone away.
    fn try_send_task(
        &mut self,
        task: Box<dyn Task + Send>,
        channel_idx: usize,
    ) -> Result<(), Box<dyn Task + Send>> {
        match self.channels[channel_idx].task_sender.send(task) {
            Ok(()) => {
                self.channels[channel_idx].num_tasks_in_flight += 1;
                Ok(())
            }
            Err(error) => Err(error.0),
        }
    }

    /// Finds the next worker with spare capacity, round-robin from the last
    /// one used.
    fn find_available_channel(&self) -> Option<usize> {
        if self.channels.is_empty() {
            return None;
        }

        let start_channel = self.current_channel % self.channels.len();
        let mut current = start_channel;
        loop {
            if self.channels[current].num_tasks_in_flight < MAX_TASKS_IN_FLIGHT {
                return Some(current);
            }
            current = (current + 1) % self.channels.len();
            if current == start_channel {
                return None;
            }
        }
    }

    /// Publishes a task, returning `true` if a worker took it immediately
    /// and `false` if it was queued.
    pub fn publish_task(&mut self, task: Box<dyn Task + Send>) -> bool {
        match self.find_available_channel() {
            Some(channel_idx) => match self.try_send_task(task, channel_idx) {
                Ok(()) => {
                    self.current_channel = (channel_idx + 1) % self.channels.len();
                    true
                }
                Err(task) => {
                    self.queued_tasks.push_back(task);
                    false
                }
            },
            None => {
                self.queued_tasks.push_back(task);
                false
            }
        }
    }

    /// Hands queued tasks to workers, oldest first, until the queue is empty
    /// or every worker is busy.
    pub fn process_queued_tasks(&mut self) {
        while let Some(channel_idx) = self.find_available_channel() {
            let Some(task) = self.queued_tasks.pop_front() else {
                break;
            };
            match self.try_send_task(task, channel_idx) {
                Ok(()) => self.current_channel = (channel_idx + 1) % self.channels.len(),
                Err(task) => {
                    // Worker disconnected; keep the task for later.
                    self.queued_tasks.push_front(task);
                    break;
                }
            }
        }
    }

    /// Applies every result that has arrived to `world`, returning how many
    /// were applied. Follow-up tasks are published afterwards.
    pub fn process_completed_tasks(&mut self, world: &mut World) -> usize {
        let mut tasks_to_queue = Vec::new();
        let mut applied = 0;
        for channel in &mut self.channels {
            while let Ok(result) = channel.result_receiver.try_recv() {
                channel.num_tasks_in_flight -= 1;
                applied += 1;
                tasks_to_queue.extend(result.handle_result(world));
            }
        }

        if !tasks_to_queue.is_empty() {
            debug!("Publishing {} follow-up tasks", tasks_to_queue.len());
        }
        for task in tasks_to_queue {
            self.publish_task(task);
        }
        applied
    }
}
