use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Spinner shown while a gateway call is in flight.
/// Without a terminal it logs instead of drawing.
pub struct FetchSpinner {
    spinner: Option<ProgressBar>,
}

impl FetchSpinner {
    pub fn start(message: impl Into<String>, quiet: bool) -> Self {
        let message = message.into();

        if quiet || !is_interactive() {
            tracing::info!(operation = "fetch", message = %message, "Fetching from catalog");
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.red} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(message);

        Self { spinner: Some(spinner) }
    }

    pub fn finish(self) {
        if let Some(spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}
