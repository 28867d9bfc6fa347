// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

mod command;
mod mailbox;

pub use command::Command;
pub use mailbox::{channel, CommandReceiver, CommandSender};
