// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use log::Level;
use std::time::SystemTime;

/// Everything a console line is made of
#[derive(Debug)]
pub struct Record<'a> {
    pub timestamp: SystemTime,
    pub level: Level,
    pub target: &'a str,
    pub file: Option<&'a str>,
    pub line: Option<u32>,
    /// Name of the logging thread, `jobpool-w<n>` for pool workers
    pub thread: &'a str,
    pub args: &'a str,
}
