/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! TaskDispatcher: a fixed pool of worker threads fed by a crossbeam queue.
//!
//! Every accepted task reports exactly one outcome, either to the completion
//! handler given to `submit` or through the `TaskHandle` returned by `spawn`.
//! Tasks cannot be cancelled and may complete in any order.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    thread,
    time::Duration
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use tracing::{debug, warn};

use crate::config::DispatcherConfig;
use crate::errors::{DispatchError, TaskError};

type Job = Box<dyn FnOnce() + Send + 'static>;

///Runs tasks off the caller's thread on a fixed pool of workers.
pub struct TaskDispatcher {
    sender: Option<Sender<Job>>,
    workers: Vec<thread::JoinHandle<()>>

} impl TaskDispatcher {
    ///Start `config.workers` worker threads.
    pub fn new(config: &DispatcherConfig) -> Result<Self, DispatchError> {
        let (sender, receiver) = crossbeam_channel::unbounded::<Job>();

        let mut workers = Vec::with_capacity(config.workers);
        for id in 0..config.workers {
            let receiver = receiver.clone();
            //already started workers exit once `sender` is dropped on error.
            let handle = thread::Builder::new()
                .name(format!("{}-{}", config.thread_name, id))
                .spawn(move || worker_loop(id, receiver))
                .map_err(DispatchError::ThreadSpawnFailed)?;
            workers.push(handle);
        }

        return Ok(Self {
            sender: Some(sender),
            workers
        })
    }

    pub fn workers(&self) -> usize {
        return self.workers.len()
    }

    ///Queue `task`; `on_complete` is later called on a worker with its outcome.
    ///
    ///A panicking task is reported as `TaskError::Fatal`. If the dispatcher is shut down
    ///the task is not accepted, `on_complete` is never called and `DispatchError::ShutDown` is returned.
    pub fn submit<T, F, C>(&self, task: F, on_complete: C) -> Result<(), DispatchError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
        C: FnOnce(Result<T, TaskError>) + Send + 'static,
    {
        let sender = self.sender.as_ref().ok_or(DispatchError::ShutDown)?;

        let job: Job = Box::new(move || {
            let outcome = match panic::catch_unwind(AssertUnwindSafe(task)) {
                Ok(outcome) => outcome,
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    warn!(%message, "task panicked");
                    Err(TaskError::Fatal(message))
                }
            };

            //a panicking handler must not take the worker down with it.
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(move || on_complete(outcome))) {
                warn!(message = %panic_message(payload.as_ref()), "completion handler panicked");
            }
        });

        return sender.send(job).or(Err(DispatchError::ShutDown))
    }

    ///Queue `task` and return a handle that receives its outcome.
    pub fn spawn<T, F>(&self, task: F) -> Result<TaskHandle<T>, DispatchError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
    {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        self.submit(task, move |outcome| {
            //the handle may have been dropped; the outcome is then discarded.
            let _ = sender.send(outcome);
        })?;

        return Ok(TaskHandle{receiver})
    }

    ///Stop accepting tasks, run everything already queued, and join the workers.
    pub fn shutdown(&mut self) {
        if self.sender.take().is_none() {
            return
        }

        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                warn!("worker thread exited abnormally");
            }
        }
        debug!("task dispatcher shut down");
    }

} impl Drop for TaskDispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(id: usize, receiver: Receiver<Job>) {
    debug!(worker = id, "worker started");
    //ends once every sender is gone and the queue is drained.
    for job in receiver.iter() {
        job();
    }
    debug!(worker = id, "worker stopped");
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_owned()
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone()
    }
    return "task panicked".to_owned()
}

///Receives the single outcome of a spawned task.
pub struct TaskHandle<T> {
    receiver: Receiver<Result<T, TaskError>>

} impl<T> TaskHandle<T> {
    ///Block until the task completes.
    pub fn wait(self) -> Result<T, TaskError> {
        return self.receiver.recv()
            .unwrap_or_else(|_| Err(lost_outcome()))
    }

    ///Block for at most `timeout`. Returns `None` if the task is still running.
    ///
    ///The outcome is delivered once: after this returns `Some`, the handle is spent.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Result<T, TaskError>> {
        return match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(lost_outcome()))
        }
    }

    ///Return the outcome if the task has completed, without blocking.
    pub fn try_result(&self) -> Option<Result<T, TaskError>> {
        return match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(lost_outcome()))
        }
    }
}

fn lost_outcome() -> TaskError {
    return TaskError::Fatal("task outcome was already taken or never reported".to_owned())
}
