//! Progress reporting for palette loading and compositing
//!
//! The pipeline only ever talks to a [`ProgressSink`]; rendering is up to the
//! implementation and may be skipped entirely with [`NoProgress`].

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Receives "units completed" signals against a known total
pub trait ProgressSink {
    /// Begin a new counted task
    fn start(&mut self, label: &str, total: u64);

    /// One more unit completed
    fn advance(&mut self);

    /// The current task is over, successfully or not
    fn finish(&mut self);
}

/// Discards all progress signals
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&mut self, _label: &str, _total: u64) {}

    fn advance(&mut self) {}

    fn finish(&mut self) {}
}

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} |{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}| {{percent:>3}}%"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress bar showing the completed percentage
#[derive(Default)]
pub struct TerminalProgress {
    bar: Option<ProgressBar>,
}

impl TerminalProgress {
    /// Create a reporter with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }
}

impl ProgressSink for TerminalProgress {
    fn start(&mut self, label: &str, total: u64) {
        self.finish();
        let bar = ProgressBar::new(total);
        bar.set_style(BAR_STYLE.clone());
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    fn advance(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

/// Counted task that is finished when the scope ends
///
/// Dropping the scope calls [`ProgressSink::finish`], so early returns through
/// `?` close the task the same way a completed loop does.
pub struct ProgressScope<'a> {
    sink: &'a mut dyn ProgressSink,
    completed: u64,
    total: u64,
}

impl<'a> ProgressScope<'a> {
    /// Start a task of `total` units on `sink`
    pub fn start(sink: &'a mut dyn ProgressSink, label: &str, total: usize) -> Self {
        let total = total as u64;
        sink.start(label, total);
        Self {
            sink,
            completed: 0,
            total,
        }
    }

    /// Record one completed unit
    ///
    /// Signals past the announced total are dropped so the count never exceeds it.
    pub fn advance(&mut self) {
        if self.completed < self.total {
            self.completed += 1;
            self.sink.advance();
        }
    }

    /// Units completed so far
    pub const fn completed(&self) -> u64 {
        self.completed
    }
}

impl Drop for ProgressScope<'_> {
    fn drop(&mut self) {
        self.sink.finish();
    }
}
