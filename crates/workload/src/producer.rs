//! Producer: paced insert loop running on its own thread
//!
//! Each iteration sleeps a random delay in `[0, max_pacing)`, builds a
//! record with the configured name and inserts it. The loop runs until
//! the handle is stopped or dropped.
//!
//! The delay is a condvar wait on the stop flag, so `stop()` wakes a
//! sleeping producer immediately instead of waiting out the delay.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use rand::Rng;
use tracing::{debug, error, info};

use roster_registry::{Record, Registry};

use crate::config::WorkloadConfig;
use crate::error::WorkloadResult;

static PRODUCER_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Stop flag that sleeping producers can wait on
#[derive(Debug, Default)]
struct StopSignal {
    stopped: Mutex<bool>,
    cv: Condvar,
}

impl StopSignal {
    fn signal(&self) {
        *self.stopped.lock() = true;
        self.cv.notify_all();
    }

    /// Sleep for `timeout` or until signalled. Returns true if stopped.
    fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut stopped = self.stopped.lock();
        while !*stopped {
            if self.cv.wait_until(&mut stopped, deadline).timed_out() {
                break;
            }
        }
        *stopped
    }
}

/// A paced record generator bound to one registry
#[derive(Debug)]
pub struct Producer {
    registry: Arc<Registry>,
    record_name: String,
    max_pacing: Duration,
}

impl Producer {
    /// Create a producer from workload settings
    pub fn new(registry: Arc<Registry>, config: &WorkloadConfig) -> Self {
        Self {
            registry,
            record_name: config.record_name.clone(),
            max_pacing: config.max_pacing(),
        }
    }

    /// Start the insert loop on a dedicated thread
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(self) -> WorkloadResult<ProducerHandle> {
        let seq = PRODUCER_SEQ.fetch_add(1, Ordering::Relaxed);
        let name = format!("roster-producer-{}", seq);
        let generated = Arc::new(AtomicU64::new(0));
        let stop = Arc::new(StopSignal::default());

        let thread = {
            let generated = Arc::clone(&generated);
            let stop = Arc::clone(&stop);
            thread::Builder::new()
                .name(name.clone())
                .spawn(move || self.run(&generated, &stop))?
        };

        Ok(ProducerHandle {
            name,
            generated,
            stop,
            thread: Some(thread),
        })
    }

    fn run(self, generated: &AtomicU64, stop: &StopSignal) {
        info!(
            registry_count = self.registry.count(),
            max_pacing_ms = self.max_pacing.as_millis() as u64,
            "Producer started"
        );

        let mut rng = rand::thread_rng();
        while !stop.wait(self.next_delay(&mut rng)) {
            match self.registry.insert(Record::new(self.record_name.as_str())) {
                Ok(record) => {
                    generated.fetch_add(1, Ordering::Relaxed);
                    debug!(id = ?record.id(), "Producer inserted record");
                }
                Err(e) => {
                    error!(error = %e, "Producer insert rejected");
                }
            }
        }

        info!(
            generated = generated.load(Ordering::Relaxed),
            "Producer stopped"
        );
    }

    fn next_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let max_ms = self.max_pacing.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rng.gen_range(0..max_ms))
    }
}

/// Owner of a running producer thread
///
/// Dropping the handle stops the producer and joins its thread.
#[derive(Debug)]
pub struct ProducerHandle {
    name: String,
    generated: Arc<AtomicU64>,
    stop: Arc<StopSignal>,
    thread: Option<JoinHandle<()>>,
}

impl ProducerHandle {
    /// Thread name of this producer
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records this producer has inserted so far
    pub fn generated(&self) -> u64 {
        self.generated.load(Ordering::Relaxed)
    }

    /// Whether the producer thread is still running
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the producer, wait for it to exit, and return its total
    pub fn stop(mut self) -> u64 {
        self.shutdown();
        self.generated()
    }

    fn shutdown(&mut self) {
        self.stop.signal();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!(producer = %self.name, "Producer thread panicked");
            }
        }
    }
}

impl Drop for ProducerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn `config.producers` producers against one registry
///
/// If any spawn fails, the producers already started are stopped when
/// their handles drop.
pub fn spawn_many(
    registry: &Arc<Registry>,
    config: &WorkloadConfig,
) -> WorkloadResult<Vec<ProducerHandle>> {
    (0..config.producers)
        .map(|_| Producer::new(Arc::clone(registry), config).spawn())
        .collect()
}
