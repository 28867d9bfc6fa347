// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use super::Command;
use crate::error::Error;
use crate::error::Error::Channel;
use crossbeam_channel::{self as cbc, TryRecvError};

/// Create the private mailbox of a worker.
///
/// The mailbox is unbounded, so the pool never blocks on a worker that is busy running a job.
/// Commands are received in the order they were sent.
pub fn channel() -> (CommandSender, CommandReceiver) {
    let (sender, receiver) = cbc::unbounded();
    (CommandSender { sender }, CommandReceiver { receiver })
}

pub struct CommandSender {
    sender: cbc::Sender<Command>,
}

impl CommandSender {
    pub fn send(&self, command: Command) -> Result<()> {
        self.sender
            .send(command)
            .map_err(|_| Channel("failed to send command"))
    }
}

pub struct CommandReceiver {
    receiver: cbc::Receiver<Command>,
}

impl CommandReceiver {
    /// Block until the next command arrives
    pub fn recv(&self) -> Result<Command> {
        self.receiver
            .recv()
            .map_err(|_| Channel("failed to receive command"))
    }

    /// Take a pending command, if any
    pub fn try_recv(&self) -> Result<Option<Command>> {
        match self.receiver.try_recv() {
            Ok(command) => Ok(Some(command)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Channel("command sender disconnected")),
        }
    }

    /// The underlying receiver, for use in `select!`
    pub fn receiver(&self) -> &cbc::Receiver<Command> {
        &self.receiver
    }
}

type Result<T, E = Error> = std::result::Result<T, E>;
