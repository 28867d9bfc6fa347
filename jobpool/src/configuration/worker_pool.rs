// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Worker pool builder

use crate::error::Error;
use crate::job::{Action, JobRegistry};
use crate::worker_pool::WorkerPool;
use crossbeam_channel::Receiver;
use std::num::NonZeroUsize;
use std::thread;

/// Configuration of a worker pool
#[derive(Debug, Default, Clone)]
pub struct Builder {
    /// Requested number of workers, 0 selects the available parallelism
    workers: usize,
    /// Workers' stack size
    stack_size: Option<usize>,
}

/// Worker pool builder
impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a number of workers, see [Builder::worker_count]
    pub fn workers(&mut self, workers: usize) -> &mut Self {
        self.workers = workers;
        self
    }

    /// Set worker threads' stack size
    pub fn stack_size(&mut self, stack_size: usize) -> &mut Self {
        self.stack_size = Some(stack_size);
        self
    }

    /// Number of workers a pool built from this configuration will start.
    ///
    /// The requested number is used if it lies within 1 and twice the available parallelism of
    /// the host. Otherwise the available parallelism is used.
    pub fn worker_count(&self) -> usize {
        effective_worker_count(self.workers, available_parallelism())
    }

    /// Build a worker pool consuming the given queue.
    ///
    /// Every worker gets its own handle to the queue. The caller keeps `queue`, so actions that
    /// remain after the pool has been quit can still be inspected or drained.
    pub fn build<D>(
        &self,
        queue: &Receiver<Action<D>>,
        jobs: JobRegistry<D>,
    ) -> Result<WorkerPool, Error>
    where
        D: Send + 'static,
    {
        WorkerPool::spawn(queue, jobs, self.worker_count(), self.stack_size)
    }
}

/// Parallelism hint of the host, at least 1
pub fn available_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Clamp a requested worker count against the given parallelism
pub fn effective_worker_count(requested: usize, parallelism: usize) -> usize {
    if requested == 0 || requested > 2 * parallelism {
        parallelism
    } else {
        requested
    }
}

#[cfg(test)]
mod test {
    use super::{available_parallelism, effective_worker_count, Builder};

    #[test]
    fn sizing_policy() {
        assert_eq!(effective_worker_count(0, 4), 4);
        assert_eq!(effective_worker_count(1, 4), 1);
        assert_eq!(effective_worker_count(4, 4), 4);
        assert_eq!(effective_worker_count(8, 4), 8);
        assert_eq!(effective_worker_count(9, 4), 4);
        assert_eq!(effective_worker_count(usize::MAX / 2, 4), 4);
        assert_eq!(effective_worker_count(2, 1), 2);
        assert_eq!(effective_worker_count(3, 1), 1);
    }

    #[test]
    fn builder_worker_count() {
        let parallelism = available_parallelism();
        assert!(parallelism >= 1);

        assert_eq!(Builder::new().worker_count(), parallelism);
        assert_eq!(Builder::new().workers(1).worker_count(), 1);
        assert_eq!(
            Builder::new().workers(2 * parallelism).worker_count(),
            2 * parallelism
        );
        assert_eq!(
            Builder::new().workers(2 * parallelism + 1).worker_count(),
            parallelism
        );
    }
}
