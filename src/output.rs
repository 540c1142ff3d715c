use crate::discovery::Summary;
use colored::{Color, Colorize};

/// Colours used for console output.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub info: Color,
    pub status_ok: Color,
    pub status_bad: Color,
    pub confirmed: Color,
    pub negative: Color,
    pub error: Color,
}

pub static PALETTE: Palette = Palette {
    info: Color::Yellow,
    status_ok: Color::Green,
    status_bad: Color::Red,
    confirmed: Color::Green,
    negative: Color::Red,
    error: Color::Red,
};

pub fn format_checking(url: &str) -> String {
    format!("Checking: {}", url)
}

pub fn format_status(url: &str, status: u16) -> String {
    format!("Status Code: {} ({})", status, url)
}

pub fn format_failed(url: &str, error: &str) -> String {
    format!("Error at {}: {}", url, error)
}

pub fn format_confirmed(url: &str) -> String {
    format!("{} seems to be a GraphQL endpoint.", url)
}

pub fn format_negative(url: &str) -> String {
    format!("{} does not seem to be a GraphQL endpoint.", url)
}

pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Probed {} path(s): {} confirmed, {} not GraphQL, {} failed",
        summary.total(),
        summary.confirmed,
        summary.not_graphql,
        summary.failed
    )
}

/// Console side of a run. Confirmed endpoints are always announced; the
/// rest only shows up with `verbose`.
///
/// Each `*_line` method returns the plain text that would be printed, or
/// `None` when the current verbosity suppresses it.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
    palette: &'static Palette,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            palette: &PALETTE,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn checking_line(&self, url: &str) -> Option<String> {
        self.verbose.then(|| format_checking(url))
    }

    pub fn status_line(&self, url: &str, status: u16) -> Option<String> {
        self.verbose.then(|| format_status(url, status))
    }

    pub fn failed_line(&self, url: &str, error: &str) -> Option<String> {
        self.verbose.then(|| format_failed(url, error))
    }

    pub fn confirmed_line(&self, url: &str) -> Option<String> {
        Some(format_confirmed(url))
    }

    pub fn negative_line(&self, url: &str) -> Option<String> {
        self.verbose.then(|| format_negative(url))
    }

    pub fn summary_line(&self, summary: &Summary) -> Option<String> {
        self.verbose.then(|| format_summary(summary))
    }

    pub fn checking(&self, url: &str) {
        if let Some(line) = self.checking_line(url) {
            println!("\n{}", line.color(self.palette.info));
        }
    }

    pub fn status(&self, url: &str, status: u16) {
        if let Some(line) = self.status_line(url, status) {
            let color = if status == 200 {
                self.palette.status_ok
            } else {
                self.palette.status_bad
            };
            println!("{}", line.color(color));
        }
    }

    pub fn failed(&self, url: &str, error: &str) {
        if let Some(line) = self.failed_line(url, error) {
            println!("{}", line.color(self.palette.error));
        }
    }

    pub fn confirmed(&self, url: &str) {
        if let Some(line) = self.confirmed_line(url) {
            println!("{}", line.color(self.palette.confirmed).bold());
        }
    }

    pub fn negative(&self, url: &str) {
        if let Some(line) = self.negative_line(url) {
            println!("{}", line.color(self.palette.negative));
        }
    }

    pub fn summary(&self, summary: &Summary) {
        if let Some(line) = self.summary_line(summary) {
            println!("\n{} {}", "[*]".cyan(), line);
        }
    }
}
