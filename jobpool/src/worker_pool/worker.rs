// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::job::{Action, JobRegistry};
use crate::signalling::{Command, CommandReceiver};
use crossbeam_channel::{select, Receiver};
use log::{debug, error};
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::{io, thread};
use tracing::{span, Level};

/// Worker id type. This id is unique to each worker thread of a pool.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkerId(usize);

impl From<usize> for WorkerId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<&WorkerId> for usize {
    fn from(value: &WorkerId) -> Self {
        value.0
    }
}

impl From<WorkerId> for usize {
    fn from(value: WorkerId) -> Self {
        value.0
    }
}

impl Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// A worker thread that runs jobs for actions taken from the shared queue.
pub(crate) struct Worker {
    id: WorkerId,
    thread: thread::JoinHandle<()>,
}

impl Worker {
    pub(crate) fn id(&self) -> WorkerId {
        self.id
    }

    /// Create a new worker thread that starts consuming the queue right away.
    ///
    /// This function spawns a new thread.
    pub(crate) fn new<D>(
        id: WorkerId,
        stack_size: Option<usize>,
        queue: Receiver<Action<D>>,
        jobs: Arc<JobRegistry<D>>,
        commands: CommandReceiver,
    ) -> io::Result<Worker>
    where
        D: Send + 'static,
    {
        let thread_name = format!("jobpool-{id}").to_lowercase();
        let mut builder = thread::Builder::new().name(thread_name);
        if let Some(stack_size) = stack_size {
            builder = builder.stack_size(stack_size);
        }
        let thread = builder.spawn(move || run(id, queue, jobs, commands))?;

        Ok(Worker { id, thread })
    }

    /// Wait for the worker thread to terminate
    pub(crate) fn join(self) {
        if self.thread.join().is_err() {
            error!("Worker {} terminated abnormally", self.id);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Consuming,
    Paused,
}

enum Event<D> {
    Action(Action<D>),
    QueueClosed,
    Command(Result<Command, Error>),
}

/// Worker thread main function
fn run<D>(
    wid: WorkerId,
    queue: Receiver<Action<D>>,
    jobs: Arc<JobRegistry<D>>,
    commands: CommandReceiver,
) where
    D: Send + 'static,
{
    let mut mode = Mode::Consuming;
    let mut queue_open = true;

    loop {
        let event = if mode == Mode::Consuming && queue_open {
            next_event(&queue, &commands)
        } else {
            Event::Command(commands.recv())
        };

        match event {
            Event::Action(action) => execute(wid, &jobs, action),
            Event::QueueClosed => {
                debug!("Queue closed, worker {wid} waits for commands only");
                queue_open = false;
            }
            Event::Command(Ok(Command::Quit)) => {
                debug!("Worker {wid} quitting");
                break;
            }
            Event::Command(Ok(Command::Pause)) => {
                if mode == Mode::Consuming {
                    debug!("Worker {wid} pausing");
                }
                mode = Mode::Paused;
            }
            Event::Command(Ok(Command::Play)) => {
                if mode == Mode::Paused {
                    debug!("Worker {wid} playing");
                }
                mode = Mode::Consuming;
            }
            Event::Command(Err(e)) => {
                debug!("Worker {wid} lost its pool ({e}), quitting");
                break;
            }
        }
    }
}

/// Wait for the next action or command while consuming.
///
/// A command that is already pending wins over queued actions.
fn next_event<D>(queue: &Receiver<Action<D>>, commands: &CommandReceiver) -> Event<D> {
    match commands.try_recv() {
        Ok(Some(command)) => return Event::Command(Ok(command)),
        Ok(None) => {}
        Err(e) => return Event::Command(Err(e)),
    }

    select! {
        recv(queue) -> action => match action {
            Ok(action) => Event::Action(action),
            Err(_) => Event::QueueClosed,
        },
        recv(commands.receiver()) -> command => {
            Event::Command(command.map_err(|_| Error::Channel("failed to receive command")))
        }
    }
}

/// Run the job registered for the action. Panics of the job are contained here.
fn execute<D>(wid: WorkerId, jobs: &JobRegistry<D>, action: Action<D>) {
    let Action { name, data } = action;
    let Some(job) = jobs.get(&name) else {
        debug!("Dropping action {name:?} in worker {wid}, no job registered");
        return;
    };

    debug!("Running job {name} in worker {wid}");
    let _span = span!(Level::INFO, "Job", action = %name, worker_id = %wid).entered();
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| job(wid, data))) {
        error!(
            "Job {name} panicked in worker {wid}: {}",
            panic_message(payload.as_ref())
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}
