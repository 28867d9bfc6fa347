// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Drive a worker pool through play, pause and quit while a producer fills the queue

use anyhow::{anyhow, bail, ensure, Error};
use argh::FromArgs;
use crossbeam_channel::Receiver;
use jobpool::prelude::*;
use log::{info, LevelFilter};
use std::thread;
use std::time::{Duration, Instant};

/// Simulated work per action
const WORK: Duration = Duration::from_millis(5);
/// Upper bound for a running pool to drain the queue
const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(FromArgs)]
#[argh(help_triggers("-h", "--help", "help"))]
/// Run a worker pool against a bounded queue. A producer fills the queue, then the pool is
/// paused, resumed and quit in turn. After each phase the pool status and the queue length are
/// logged, and the tool fails if a paused or stopped pool consumed an action.
struct Args {
    #[argh(description = "requested number of workers, 0 for the available parallelism")]
    #[argh(option, short = 'w', default = "0")]
    workers: usize,

    #[argh(description = "number of actions the producer enqueues")]
    #[argh(option, short = 'a', default = "100")]
    actions: usize,

    #[argh(description = "queue capacity, also the number of actions enqueued while paused")]
    #[argh(option, short = 'q', default = "1")]
    queue: usize,

    #[argh(description = "settling delay in milliseconds after each command")]
    #[argh(option, short = 's', default = "500")]
    settle_ms: u64,

    #[argh(description = "log level")]
    #[argh(option, short = 'l')]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<(), Error> {
    let args: Args = argh::from_env();
    jobpool_logger::init(args.log_level.unwrap_or(LevelFilter::Info), true);
    run(args)
}

/// Run all phases, failing if the pool consumed while it should not
fn run(args: Args) -> Result<(), Error> {
    let Args {
        workers,
        actions,
        queue,
        settle_ms,
        ..
    } = args;

    ensure!(queue > 0, "queue capacity must be at least 1");
    let settle = Duration::from_millis(settle_ms);

    let mut jobs = JobRegistry::new();
    jobs.register("sleep", |wid, n: usize| {
        thread::sleep(WORK);
        log::trace!("Action {n} done in worker {wid}");
    });
    jobs.register("dumb", |_, _| {});

    let (sender, receiver) = crossbeam_channel::bounded(queue);
    let mut pool = WorkerPool::new(&receiver, jobs, workers)?;
    let listener = pool.listener();
    info!("Pool is {} with {} workers", listener.status(), pool.worker_count());

    let producer = {
        let sender = sender.clone();
        thread::spawn(move || -> Result<(), Error> {
            for n in 0..actions {
                let name = if n % 2 == 0 { "sleep" } else { "dumb" };
                sender
                    .send_timeout(Action::new(name, n), DRAIN_TIMEOUT)
                    .map_err(|_| anyhow!("failed to enqueue action {n}"))?;
            }
            Ok(())
        })
    };
    producer
        .join()
        .map_err(|_| anyhow!("producer thread panicked"))??;
    drain(&receiver)?;
    report(&receiver, &listener);

    pool.pause();
    thread::sleep(settle);
    for n in 0..queue {
        sender
            .try_send(Action::new("sleep", n))
            .map_err(|e| anyhow!("failed to enqueue action {n} while paused: {e}"))?;
    }
    thread::sleep(settle);
    report(&receiver, &listener);
    ensure!(receiver.is_full(), "paused pool consumed actions");

    pool.play();
    drain(&receiver)?;
    report(&receiver, &listener);

    pool.quit();
    sender
        .try_send(Action::new("dumb", 0))
        .map_err(|e| anyhow!("failed to enqueue action after quit: {e}"))?;
    thread::sleep(settle);
    report(&receiver, &listener);
    ensure!(!receiver.is_empty(), "stopped pool consumed actions");

    Ok(())
}

/// Wait until the running pool has taken every action from the queue
fn drain(queue: &Receiver<Action<usize>>) -> Result<(), Error> {
    let deadline = Instant::now() + DRAIN_TIMEOUT;
    while !queue.is_empty() {
        if Instant::now() >= deadline {
            bail!(
                "queue not drained after {DRAIN_TIMEOUT:?}, {} actions left",
                queue.len()
            );
        }
        thread::sleep(Duration::from_millis(10));
    }
    Ok(())
}

fn report(queue: &Receiver<Action<usize>>, listener: &StatusListener) {
    info!("Pool {}, {} actions queued", listener.status(), queue.len());
}
