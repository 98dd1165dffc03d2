//! Two threads printing through one `Ui`
//!
//! `Ui` has no locking of its own: each thread holds the mutex for a whole
//! line, so "down 3" and "up 1" never get mixed up.

use cliui::{MessageOptions, Ui, tokens};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

/// Pause between two counts
pub const STEP: Duration = Duration::from_millis(200);

pub fn run(ui: Ui, count: u32, step: Duration) {
    let ui = Mutex::new(ui);
    thread::scope(|s| {
        s.spawn(|| {
            for x in (0..=count).rev() {
                print_count(&ui, "down", x, step);
            }
        });
        s.spawn(|| {
            for x in 0..=count {
                print_count(&ui, "up", x, step);
            }
        });
    });
}

fn print_count(ui: &Mutex<Ui>, label: &str, x: u32, step: Duration) {
    {
        let mut ui = lock(ui);
        ui.info_with(&tokens![label], &MessageOptions::default().end(" "));
        thread::sleep(step);
        ui.info(&tokens![x]);
    }
    // Long computation, outside the lock
    thread::sleep(step * 3);
}

fn lock(ui: &Mutex<Ui>) -> MutexGuard<'_, Ui> {
    ui.lock().unwrap_or_else(PoisonError::into_inner)
}
