// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::record::Record;
use console::{style, Color};
use log::Level;
use std::io;
use time::format_description::FormatItem;
use time::macros::format_description;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// Thread name prefix of pool workers, followed by the worker number
const WORKER_THREAD_PREFIX: &str = "jobpool-w";

/// Worker colours, picked by worker number
const WORKER_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Color256(208),
];

/// Width of the thread column, wide enough for `jobpool-w<nn>`
const THREAD_WIDTH: usize = 12;

/// Write `record` as a single line to `writer`.
///
/// Layout: `time level [thread] target: message`. Trace records also carry `file:line`.
pub fn format<W: io::Write>(record: &Record, mut writer: W) -> io::Result<()> {
    let timestamp = time::OffsetDateTime::from(record.timestamp)
        .format(TIMESTAMP_FORMAT)
        .map_err(io::Error::other)?;

    let level = style(format!("{:<5}", record.level))
        .bold()
        .fg(level_color(record.level));

    let thread = {
        let padded = format!("{:<w$}", record.thread, w = THREAD_WIDTH);
        match worker_number(record.thread) {
            Some(n) => style(padded).fg(WORKER_COLORS[n % WORKER_COLORS.len()]),
            None => style(padded).dim(),
        }
    };

    let target = style(record.target).dim();
    let message = record.args;

    match (record.level, record.file) {
        (Level::Trace, Some(file)) => writeln!(
            writer,
            "{timestamp} {level} [{thread}] {target}: {file}:{}: {message}",
            record.line.unwrap_or(0)
        ),
        _ => writeln!(writer, "{timestamp} {level} [{thread}] {target}: {message}"),
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Color256(243),
        Level::Trace => Color::White,
    }
}

/// Worker number of a pool worker thread name
fn worker_number(thread: &str) -> Option<usize> {
    thread.strip_prefix(WORKER_THREAD_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod test {
    use super::{format, worker_number};
    use crate::record::Record;
    use log::Level;
    use std::time::SystemTime;

    fn record<'a>(level: Level, thread: &'a str, args: &'a str) -> Record<'a> {
        Record {
            timestamp: SystemTime::now(),
            level,
            target: "jobpool::worker_pool::worker",
            file: Some("worker.rs"),
            line: Some(42),
            thread,
            args,
        }
    }

    fn render(record: &Record) -> String {
        let mut buf = Vec::new();
        format(record, &mut buf).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

    #[test]
    fn worker_numbers() {
        assert_eq!(worker_number("jobpool-w1"), Some(1));
        assert_eq!(worker_number("jobpool-w12"), Some(12));
        assert_eq!(worker_number("jobpool-w"), None);
        assert_eq!(worker_number("main"), None);
    }

    #[test]
    fn worker_line() {
        let line = render(&record(Level::Info, "jobpool-w3", "Running job dumb in worker W3"));
        assert!(line.contains("INFO  [jobpool-w3  ] jobpool::worker_pool::worker: "));
        assert!(line.ends_with(": Running job dumb in worker W3\n"));
        assert!(!line.contains("worker.rs"));
    }

    #[test]
    fn other_thread_line() {
        let line = render(&record(Level::Warn, "main", "Running 4 workers"));
        assert!(line.contains("WARN  [main        ] "));
    }

    #[test]
    fn trace_line_has_location() {
        let line = render(&record(Level::Trace, "jobpool-w1", "Worker W1 playing"));
        assert!(line.contains("worker.rs:42: Worker W1 playing"));
    }
}
