//! Terminal output helpers.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `indicatif` for spinners

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub fn header(text: &str) {
    println!("{}", style(text).bold().cyan());
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green(), style(text).bright());
}

pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red(), style(text).bright());
}

pub fn warning(text: &str) {
    println!("{} {}", style("!").yellow(), style(text).bright());
}

pub fn dim(text: &str) {
    println!("{}", style(text).dim());
}

/// Create a spinner for async operations.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
