// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Console logger for jobpool applications.
//!
//! Every record becomes one line on `stdout`. Lines written from pool workers carry the worker's
//! thread name in its own colour, so the output of concurrent jobs can be told apart.

use log::{LevelFilter, Log, Metadata};
use std::io::{self, Write};
use std::str::FromStr;
use std::thread;
use std::time::SystemTime;

pub mod fmt;
pub mod record;

const ENV_RUST_LOG: &str = "RUST_LOG";

/// Install the logger as global `log` backend.
///
/// `RUST_LOG` takes precedence over `level` if it holds a valid level filter.
/// Output to `stdout` is only written if `console` is set.
pub fn init(level: LevelFilter, console: bool) {
    log::set_max_level(level_from_env().unwrap_or(level));
    log::set_boxed_logger(Box::new(Logger::new(console))).expect("failed to set logger")
}

/// The jobpool logger.
#[derive(Debug)]
pub struct Logger {
    console: bool,
}

impl Logger {
    pub fn new(console: bool) -> Self {
        Self { console }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let current = thread::current();
        let args = record.args().to_string();
        let line = record::Record {
            timestamp: SystemTime::now(),
            level: record.level(),
            target: record.target(),
            file: record.file(),
            line: record.line(),
            thread: current.name().unwrap_or("unnamed"),
            args: &args,
        };

        // Nowhere to report a failing stdout
        let _ = fmt::format(&line, io::stdout().lock());
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

fn level_from_env() -> Option<LevelFilter> {
    let value = std::env::var(ENV_RUST_LOG).ok()?;
    LevelFilter::from_str(&value)
        .inspect_err(|_| eprintln!("Ignoring invalid `{ENV_RUST_LOG}={value}`"))
        .ok()
}
