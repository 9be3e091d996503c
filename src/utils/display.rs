// Display utilities for severity-aware terminal output

use crate::rating::Severity;
use colored::*;

/// Display configuration
#[derive(Debug, Clone, Default)]
pub struct DisplayConfig {
    pub colorblind_mode: bool,
}

impl DisplayConfig {
    pub fn new(colorblind: bool) -> Self {
        Self {
            colorblind_mode: colorblind,
        }
    }

    /// Colour a piece of text by severity
    pub fn severity_color<T: Colorize>(&self, severity: Severity, text: T) -> ColoredString {
        match (severity, self.colorblind_mode) {
            (Severity::Critical, false) => text.red().bold(),
            (Severity::Critical, true) => text.magenta().bold(),
            (Severity::High, false) => text.red(),
            (Severity::High, true) => text.magenta(),
            (Severity::Medium, false) => text.yellow(),
            (Severity::Medium, true) => text.cyan(),
            (Severity::Low, _) => text.blue(),
            (Severity::None, _) => text.dimmed(),
        }
    }

    /// Severity badge, e.g. `9.8 Critical`, or just the label without a score
    pub fn severity_label(&self, severity: Severity, score: Option<f64>) -> ColoredString {
        let label = match score {
            Some(score) => format!("{:.1} {}", score, severity),
            None => severity.to_string(),
        };
        self.severity_color(severity, label.as_str())
    }

    /// Get success color (green or blue for colorblind)
    pub fn success_color<T: Colorize>(&self, text: T) -> ColoredString {
        if self.colorblind_mode {
            text.blue()
        } else {
            text.green()
        }
    }

    /// Get warning color (yellow or cyan for colorblind)
    pub fn warning_color<T: Colorize>(&self, text: T) -> ColoredString {
        if self.colorblind_mode {
            text.cyan()
        } else {
            text.yellow()
        }
    }

    pub fn heading<T: Colorize>(&self, text: T) -> ColoredString {
        text.bold().underline()
    }
}
