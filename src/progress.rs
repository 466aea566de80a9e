use std::io::{stderr, IsTerminal};
use std::time::Duration;

use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};

/// Stderr spinner for the scan phase. Hidden when stderr is not a terminal
/// so piped runs don't pick up control sequences.
pub struct Spinner {
    bar: ProgressBar,
    visible: bool,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        let visible = stderr().is_terminal();
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.dim} {msg}")
                    .unwrap(),
            );
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(message.into());
        Self { bar, visible }
    }

    /// Replace the spinner with a `✔ message` line.
    pub fn finish(self, message: impl Into<String>) {
        self.bar.finish_and_clear();
        if self.visible {
            eprintln!("{} {}", "✔".green(), message.into());
        }
    }

    /// Clear the spinner without a summary line.
    pub fn abandon(self) {
        self.bar.finish_and_clear();
    }
}
