//! Simulated product search with an optional deadline

use anyhow::Result;
use rulebook_core::{CatalogRecord, InterruptibleSleeper};
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use super::emit;

/// Run the search; a watchdog interrupts it once `deadline` passes.
pub fn search(name: &str, latency: Duration, deadline: Option<Duration>, json: bool) -> Result<()> {
    let record = CatalogRecord::new(name, Decimal::ZERO, false);
    let sleeper = InterruptibleSleeper::new();

    // Dropping `done` tells the watchdog the search is over
    let (done, finished) = mpsc::channel::<()>();
    let watchdog = deadline.map(|deadline| {
        let handle = sleeper.handle();
        thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = finished.recv_timeout(deadline) {
                tracing::warn!(?deadline, "search deadline elapsed");
                handle.interrupt();
            }
        })
    });

    let started = Instant::now();
    let outcome = record.fetch_search_results_within(&sleeper, latency);
    drop(done);
    if let Some(watchdog) = watchdog {
        let _ = watchdog.join();
    }
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(()) => {
            emit(
                json,
                json!({ "name": record.name(), "completed": true, "elapsed_ms": elapsed_ms }),
                &format!("🔎 Search for '{}' completed in {} ms", record.name(), elapsed_ms),
            );
            Ok(())
        }
        Err(err) => {
            emit(
                json,
                json!({ "name": record.name(), "completed": false, "elapsed_ms": elapsed_ms, "error": err.to_string() }),
                &format!("⏱️  Search for '{}' stopped after {} ms: {}", record.name(), elapsed_ms, err),
            );
            Err(err.into())
        }
    }
}
