//! Background gateway calls polled from the GUI thread
//!
//! Every job runs on its own thread with a single-threaded tokio runtime and reports back
//! over a channel. The GUI polls once per frame; nothing ever blocks the render loop.

use anyhow::{anyhow, Result};
use std::future::Future;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tokio::runtime::Builder;

/// Helper struct for async jobs - polls a background task
pub struct AsyncJob<T> {
    label: &'static str,
    receiver: Option<Receiver<Result<T>>>,
}

impl<T: Send + 'static> AsyncJob<T> {
    /// Run `builder()` to completion on a dedicated thread
    pub fn spawn<FutBuilder, Fut>(label: &'static str, builder: FutBuilder) -> Self
    where
        FutBuilder: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(builder()),
                Err(e) => Err(anyhow!("Failed to create async runtime: {}", e)),
            };
            let _ = tx.send(result);
        });
        Self::new(label, rx)
    }
}

impl<T> AsyncJob<T> {
    /// Create a new async job with the given receiver
    pub fn new(label: &'static str, receiver: Receiver<Result<T>>) -> Self {
        Self {
            label,
            receiver: Some(receiver),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Poll the job for completion
    /// Returns Some(result) if the job has completed, None if still running
    pub fn poll(&mut self) -> Option<Result<T>> {
        let rx = self.receiver.as_ref()?;
        match rx.try_recv() {
            Ok(res) => {
                self.receiver = None;
                Some(res)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                Some(Err(anyhow!("Worker task for {} disconnected", self.label)))
            }
        }
    }
}
