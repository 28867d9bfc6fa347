// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

/// Commands sent from the worker pool to a single worker
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // Resume consuming actions from the queue
    Play,

    // Stop looking at the queue until the next Play or Quit
    Pause,

    // Terminate the worker thread
    Quit,
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Play => write!(f, "Play"),
            Command::Pause => write!(f, "Pause"),
            Command::Quit => write!(f, "Quit"),
        }
    }
}
