//! Session statistics for the prediction loop.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// Counters for one interactive session.
pub struct SessionMetrics {
    /// Total predictions rendered
    pub predictions: AtomicU64,
    /// Predictions by decoded label
    by_label: RwLock<HashMap<String, u64>>,
    /// Pipeline times (in microseconds)
    processing_times: RwLock<Vec<u64>>,
    /// Start time for session duration
    start_time: Instant,
}

impl SessionMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            predictions: AtomicU64::new(0),
            by_label: RwLock::new(HashMap::new()),
            processing_times: RwLock::new(Vec::new()),
            start_time: Instant::now(),
        }
    }

    /// Record a rendered prediction.
    pub fn record_prediction(&self, processing_time: Duration, label: &str) {
        self.predictions.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut by_label) = self.by_label.write() {
            *by_label.entry(label.to_string()).or_insert(0) += 1;
        }

        if let Ok(mut times) = self.processing_times.write() {
            times.push(processing_time.as_micros() as u64);
        }
    }

    /// Get pipeline time statistics.
    pub fn get_processing_stats(&self) -> ProcessingStats {
        let times = self.processing_times.read().unwrap();
        if times.is_empty() {
            return ProcessingStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        ProcessingStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: sorted[(count as f64 * 0.95) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Get predictions by decoded label.
    pub fn get_by_label(&self) -> HashMap<String, u64> {
        self.by_label.read().unwrap().clone()
    }

    /// Print the session summary.
    pub fn print_summary(&self) {
        let count = self.predictions.load(Ordering::Relaxed);
        let by_label = self.get_by_label();
        let processing = self.get_processing_stats();
        let elapsed = self.start_time.elapsed().as_secs();

        info!(predictions = count, session_secs = elapsed, "Session summary");
        for (label, label_count) in &by_label {
            let pct = if count > 0 {
                (*label_count as f64 / count as f64) * 100.0
            } else {
                0.0
            };
            info!("  {}: {} ({:.1}%)", label, label_count, pct);
        }
        if processing.count > 0 {
            info!(
                "  Pipeline time (μs): mean={} p50={} p95={} max={}",
                processing.mean_us, processing.p50_us, processing.p95_us, processing.max_us
            );
        }
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipeline time statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub max_us: u64,
}
