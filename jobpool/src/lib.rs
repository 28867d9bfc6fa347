// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! jobpool is a fixed-size pool of worker threads that can be paused, resumed and shut down.
//!
//! # Actions and Jobs
//!
//! An [Action](crate::job::Action) is a named unit of work with an opaque payload. Producers push
//! actions into a shared queue. Each worker receives the next action and runs the
//! [job](crate::job::JobFunc) registered under the action's name in the
//! [JobRegistry](crate::job::JobRegistry). Actions without a registered job are dropped.
//!
//! # Control
//!
//! The [WorkerPool](crate::worker_pool::WorkerPool) is the only owner of the workers. It broadcasts
//! pause, play and quit commands to every worker and keeps the pool-wide
//! [Status](crate::status::Status). A paused worker does not look at the queue at all, so queued
//! actions stay visible to the producer until the pool is resumed.

pub mod configuration;
pub mod error;
pub mod job;
pub(crate) mod signalling;
pub mod status;
pub mod worker_pool;

/// Re-export the public API
pub mod prelude {
    pub use crate::configuration::worker_pool::Builder;
    pub use crate::error::Error;
    pub use crate::job::{Action, JobFunc, JobRegistry};
    pub use crate::status::{Status, StatusListener};
    pub use crate::worker_pool::{WorkerId, WorkerPool};
}
