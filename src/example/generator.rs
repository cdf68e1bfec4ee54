//! Background example generator with a bounded wait
//!
//! Requests go to a worker thread over a channel; the caller blocks on the
//! response channel until the configured timeout elapses.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::source::{ExampleRequest, ExampleSource};
use crate::task::{codec, Result, TaskError};

struct Job {
    id: u64,
    request: ExampleRequest,
}

struct JobResult {
    id: u64,
    outcome: std::result::Result<String, String>,
}

pub struct ExampleGenerator {
    request_tx: mpsc::Sender<Job>,
    result_rx: mpsc::Receiver<JobResult>,
    _handle: thread::JoinHandle<()>,
    next_id: u64,
    timeout: Duration,
}

impl ExampleGenerator {
    pub fn new<S: ExampleSource>(source: S, timeout: Duration) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<Job>();
        let (result_tx, result_rx) = mpsc::channel::<JobResult>();

        let handle = thread::spawn(move || {
            while let Ok(job) = request_rx.recv() {
                let outcome = source.generate(&job.request);
                if result_tx.send(JobResult { id: job.id, outcome }).is_err() {
                    break;
                }
            }
        });

        Self {
            request_tx,
            result_rx,
            _handle: handle,
            next_id: 0,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send a request and wait up to the timeout for its block of records.
    ///
    /// Responses to earlier requests that timed out are discarded. Lines that
    /// do not decode are logged but left in the returned text.
    pub fn request(&mut self, request: ExampleRequest) -> Result<String> {
        self.next_id += 1;
        let id = self.next_id;

        self.request_tx
            .send(Job { id, request })
            .map_err(|_| TaskError::ExampleFailed("generator worker has stopped".to_string()))?;
        debug!(id, count = request.count, "Requested examples");

        let deadline = Instant::now() + self.timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.result_rx.recv_timeout(remaining) {
                Ok(result) if result.id == id => {
                    let block = result.outcome.map_err(TaskError::ExampleFailed)?;
                    check_block(&block);
                    return Ok(block);
                }
                Ok(stale) => {
                    debug!(id = stale.id, "Dropping late example response");
                }
                Err(RecvTimeoutError::Timeout) => {
                    warn!(id, "Example generator timed out");
                    return Err(TaskError::ExampleTimeout(self.timeout));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(TaskError::ExampleFailed(
                        "generator worker has stopped".to_string(),
                    ));
                }
            }
        }
    }
}

fn check_block(block: &str) {
    for (index, line) in block.lines().enumerate() {
        if let Err(e) = codec::decode(line, index + 1) {
            warn!("Example output is not a valid record: {}", e);
        }
    }
}
