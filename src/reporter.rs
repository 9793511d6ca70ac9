//! User-facing progress output
//!
//! Diagnostics go through `log`; the messages a user is meant to read while a
//! project is generated go through a `Reporter` so that silent runs simply get
//! a reporter that drops them.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;

const PROGRESS_TEMPLATE: &str = "{prefix:.cyan.bold} [{bar:30.green/white}] {pos}/{len} {msg}";

/// Sink for user-facing progress messages.
pub trait Reporter {
    /// A headline step, e.g. the project being created.
    fn status(&self, message: &str);
    /// Per-file detail, shown only in verbose mode.
    fn detail(&self, message: &str);
    /// Progress through a sequence of `total` steps, `current` being 1-based.
    fn progress(&self, current: usize, total: usize, message: &str);
    /// Ends the sequence started by `progress`, whether it completed or not.
    fn finish_progress(&self) {}
}

/// Writes colored status lines to stderr and drives an install progress bar.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
    hidden: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose, ..Default::default() }
    }

    /// A reporter that tracks progress but draws and prints nothing.
    pub fn hidden(verbose: bool) -> Self {
        Self { verbose, hidden: true, ..Default::default() }
    }

    fn new_bar(&self, total: usize) -> ProgressBar {
        let target =
            if self.hidden { ProgressDrawTarget::hidden() } else { ProgressDrawTarget::stderr() };
        let bar = ProgressBar::with_draw_target(Some(total as u64), target);
        if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_prefix("Installing");
        bar
    }

    /// Prints `line` to stderr, above the progress bar when one is active.
    fn emit(&self, line: &str) {
        if self.hidden {
            return;
        }
        match self.bar.lock().ok().and_then(|slot| slot.clone()) {
            Some(bar) => bar.suspend(|| eprintln!("{line}")),
            None => eprintln!("{line}"),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn status(&self, message: &str) {
        self.emit(&format!("{} {}", "✔".green().bold(), message.bold()));
    }

    fn detail(&self, message: &str) {
        if self.verbose {
            self.emit(&format!("  {}", message.dimmed()));
        }
    }

    fn progress(&self, current: usize, total: usize, message: &str) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        let bar = slot.get_or_insert_with(|| self.new_bar(total));
        bar.set_length(total as u64);
        bar.set_position(current.saturating_sub(1) as u64);
        bar.set_message(message.to_string());
    }

    fn finish_progress(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn status(&self, _message: &str) {}
    fn detail(&self, _message: &str) {}
    fn progress(&self, _current: usize, _total: usize, _message: &str) {}
}

pub fn reporter_for(verbose: u8, silent: bool) -> Box<dyn Reporter> {
    if silent {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(verbose > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_bar(reporter: &ConsoleReporter) -> Option<ProgressBar> {
        reporter.bar.lock().unwrap().clone()
    }

    #[test]
    fn progress_drives_one_bar_across_steps() {
        let reporter = ConsoleReporter::hidden(false);
        reporter.progress(1, 3, "Installing @11ty/eleventy@latest");
        let bar = active_bar(&reporter).unwrap();
        assert_eq!(bar.length(), Some(3));
        assert_eq!(bar.position(), 0);
        assert_eq!(bar.message(), "Installing @11ty/eleventy@latest");

        reporter.progress(3, 3, "Installing markdown-it");
        let same = active_bar(&reporter).unwrap();
        assert_eq!(same.position(), 2);
        assert_eq!(bar.position(), 2);
    }

    #[test]
    fn finish_clears_the_bar() {
        let reporter = ConsoleReporter::hidden(true);
        reporter.progress(1, 1, "Installing @11ty/eleventy@latest");
        let bar = active_bar(&reporter).unwrap();
        reporter.finish_progress();
        assert!(bar.is_finished());
        assert!(active_bar(&reporter).is_none());

        reporter.finish_progress();
        reporter.status("Created project");
        reporter.detail("Writing to 'x'");
    }

    #[test]
    fn silent_flag_selects_silent_reporter() {
        let reporter = reporter_for(2, true);
        reporter.progress(1, 2, "Installing a");
        reporter.finish_progress();
        reporter.status("nothing");
    }
}
