// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use super::worker::{Worker, WorkerId};
use crate::configuration::worker_pool::Builder;
use crate::error::Error;
use crate::job::{Action, JobRegistry};
use crate::signalling::{self, Command, CommandSender};
use crate::status::{SharedStatus, Status, StatusListener};
use crossbeam_channel::Receiver;
use log::{debug, info, warn};
use std::sync::Arc;

/// A worker together with the sending end of its mailbox
struct WorkerHandle {
    worker: Worker,
    commands: CommandSender,
}

/// A pool of worker threads consuming a shared queue of actions.
///
/// The pool is the only owner of its workers. Every control operation is broadcast to all of
/// them and recorded in the pool-wide [Status]. Dropping a pool that has not been quit quits it.
pub struct WorkerPool {
    workers: Vec<WorkerHandle>,
    worker_count: usize,
    status: SharedStatus,
}

impl WorkerPool {
    /// Create a worker pool with the requested number of workers.
    ///
    /// The number of workers is subject to the sizing policy of [Builder::worker_count].
    pub fn new<D>(
        queue: &Receiver<Action<D>>,
        jobs: JobRegistry<D>,
        workers: usize,
    ) -> Result<WorkerPool, Error>
    where
        D: Send + 'static,
    {
        Builder::new().workers(workers).build(queue, jobs)
    }

    /// Spawn `worker_count` workers, all of them consuming right away
    pub(crate) fn spawn<D>(
        queue: &Receiver<Action<D>>,
        jobs: JobRegistry<D>,
        worker_count: usize,
        stack_size: Option<usize>,
    ) -> Result<WorkerPool, Error>
    where
        D: Send + 'static,
    {
        info!("Running {worker_count} workers");

        let jobs = Arc::new(jobs);
        let mut pool = WorkerPool {
            workers: Vec::with_capacity(worker_count),
            worker_count,
            status: SharedStatus::new(Status::Running),
        };

        for id in (1..=worker_count).map(WorkerId::from) {
            let (commands, receiver) = signalling::channel();
            match Worker::new(id, stack_size, queue.clone(), jobs.clone(), receiver) {
                Ok(worker) => pool.workers.push(WorkerHandle { worker, commands }),
                Err(e) => {
                    // Do not leave the workers spawned so far behind
                    pool.quit();
                    return Err(Error::Io((e, "failed to spawn worker thread")));
                }
            }
        }

        Ok(pool)
    }

    /// Pause all workers. Queued actions stay in the queue until [WorkerPool::play] is called.
    pub fn pause(&mut self) -> Status {
        self.command(Command::Pause, Status::Paused)
    }

    /// Let all workers consume the queue again
    pub fn play(&mut self) -> Status {
        self.command(Command::Play, Status::Running)
    }

    /// Terminate all workers and wait until every worker thread has exited.
    ///
    /// Jobs that are running are finished first. Actions left in the queue are not touched.
    pub fn quit(&mut self) -> Status {
        if self.status.load() == Status::Stopped {
            return Status::Stopped;
        }

        self.broadcast(Command::Quit);
        for WorkerHandle { worker, commands } in self.workers.drain(..) {
            let id = worker.id();
            worker.join();
            drop(commands);
            debug!("Worker {id} joined");
        }
        self.status.store(Status::Stopped);
        info!("All {} workers stopped", self.worker_count);

        Status::Stopped
    }

    /// Get the status resulting from the last command
    pub fn status(&self) -> Status {
        self.status.load()
    }

    /// Create a listener that reports the status of this pool from any thread
    pub fn listener(&self) -> StatusListener {
        self.status.listener()
    }

    /// Number of workers started by this pool
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn command(&mut self, command: Command, status: Status) -> Status {
        if self.status.load() == Status::Stopped {
            debug!("Ignoring {command} on a stopped pool");
            return Status::Stopped;
        }

        self.broadcast(command);
        self.status.store(status);
        status
    }

    fn broadcast(&self, command: Command) {
        for WorkerHandle { worker, commands } in &self.workers {
            if let Err(e) = commands.send(command) {
                warn!("Failed to deliver {command} to worker {}: {e}", worker.id());
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.quit();
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("worker_count", &self.worker_count)
            .field("status", &self.status.load())
            .finish()
    }
}
