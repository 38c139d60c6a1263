// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub elements_processed: usize,
    pub summarized: usize,
    pub passed_through: usize,
    pub duration_secs: f64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.elements_processed as f64 / self.duration_secs
    }

    pub fn summarized_ratio(&self) -> f64 {
        if self.elements_processed == 0 {
            return 0.0;
        }
        (self.summarized as f64 / self.elements_processed as f64) * 100.0
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stats: PipelineStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_elements: usize) -> Self {
        let bar = ProgressBar::new(total_elements as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        Self::with_bar(bar)
    }

    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            stats: PipelineStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn record(&mut self, summarized: bool) {
        self.stats.elements_processed += 1;
        if summarized {
            self.stats.summarized += 1;
        } else {
            self.stats.passed_through += 1;
        }
        self.bar.inc(1);
        self.bar.set_message(format!(
            "Summarized: {} | Passed through: {}",
            self.stats.summarized, self.stats.passed_through
        ));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            duration_secs: self.start_time.elapsed().as_secs_f64(),
            ..self.stats.clone()
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}
