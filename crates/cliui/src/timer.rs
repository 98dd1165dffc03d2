//! Elapsed time reporting

use std::time::{Duration, Instant};

use crate::ui::Ui;

/// Reports how long a list of statements took
pub struct Timer {
    description: String,
    started: Instant,
}

impl Timer {
    /// A timer, started now
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            started: Instant::now(),
        }
    }

    /// Restart the timer
    pub fn start(&mut self) {
        self.started = Instant::now();
    }

    /// Time since the last start
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Print `<description> took ...` and return the elapsed time
    pub fn stop(&self, ui: &mut Ui) -> Duration {
        let elapsed = self.elapsed();
        ui.info(&[format!("{} took {}", self.description, format_elapsed(elapsed)).into()]);
        elapsed
    }

    /// Run `f` and report how long it took
    pub fn time<T>(ui: &mut Ui, description: &str, f: impl FnOnce(&mut Ui) -> T) -> T {
        let timer = Self::new(description);
        let result = f(ui);
        timer.stop(ui);
        result
    }
}

/// `1h 2m 3s 4ms`
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (hours, rest) = (secs / 3600, secs % 3600);
    let (minutes, seconds) = (rest / 60, rest % 60);
    format!("{hours}h {minutes}m {seconds}s {}ms", elapsed.subsec_millis())
}
