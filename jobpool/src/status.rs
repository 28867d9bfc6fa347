// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Pool-wide status

use crate::error::Error;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Status of a worker pool, reflecting the last command issued by the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Status {
    /// All workers consume actions
    Running = 0,
    /// All workers are paused
    Paused = 1,
    /// All workers are terminated
    Stopped = 2,
}

impl Status {
    /// All possible status values
    pub const ALL: [Status; 3] = [Status::Running, Status::Paused, Status::Stopped];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Paused => "paused",
            Status::Stopped => "stopped",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

impl From<Status> for u32 {
    fn from(value: Status) -> Self {
        value as u32
    }
}

impl TryFrom<u32> for Status {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Status::Running),
            1 => Ok(Status::Paused),
            2 => Ok(Status::Stopped),
            _ => Err(Error::InvalidStatus(value.to_string())),
        }
    }
}

/// Atomic status cell written by the pool only
#[derive(Debug)]
pub(crate) struct SharedStatus {
    status: Arc<AtomicU32>,
}

impl SharedStatus {
    pub(crate) fn new(status: Status) -> Self {
        Self {
            status: Arc::new(AtomicU32::new(status.into())),
        }
    }

    pub(crate) fn load(&self) -> Status {
        decode(&self.status)
    }

    pub(crate) fn store(&self, status: Status) {
        self.status.store(status.into(), Ordering::Release);
    }

    pub(crate) fn listener(&self) -> StatusListener {
        StatusListener {
            status: self.status.clone(),
        }
    }
}

/// Read-only view on the status of a worker pool.
///
/// Listeners can be cloned and moved to other threads. They keep reporting the last status
/// after the pool itself has been dropped.
#[derive(Debug, Clone)]
pub struct StatusListener {
    status: Arc<AtomicU32>,
}

impl StatusListener {
    /// Get the current status without blocking
    pub fn status(&self) -> Status {
        decode(&self.status)
    }
}

fn decode(status: &AtomicU32) -> Status {
    // Only SharedStatus::store writes the cell and it always writes a valid encoding
    Status::try_from(status.load(Ordering::Acquire)).expect("invalid status encoding")
}

#[cfg(test)]
mod test {
    use super::{SharedStatus, Status};
    use std::thread;

    #[test]
    fn display() {
        assert_eq!(Status::Running.to_string(), "running");
        assert_eq!(Status::Paused.to_string(), "paused");
        assert_eq!(Status::Stopped.to_string(), "stopped");
    }

    #[test]
    fn parse() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        assert_eq!("PAUSED".parse::<Status>().unwrap(), Status::Paused);
        assert!("undefined".parse::<Status>().is_err());
    }

    #[test]
    fn encoding() {
        for status in Status::ALL {
            assert_eq!(Status::try_from(u32::from(status)).unwrap(), status);
        }
        assert!(Status::try_from(3).is_err());
    }

    #[test]
    fn listener_follows_store() {
        let shared = SharedStatus::new(Status::Running);
        let listener = shared.listener();
        assert_eq!(listener.status(), Status::Running);

        shared.store(Status::Paused);
        let remote = listener.clone();
        let seen = thread::spawn(move || remote.status()).join().unwrap();
        assert_eq!(seen, Status::Paused);

        shared.store(Status::Stopped);
        drop(shared);
        assert_eq!(listener.status(), Status::Stopped);
    }
}
