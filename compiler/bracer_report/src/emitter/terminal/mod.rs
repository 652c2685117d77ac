//! Terminal Emitter
//!
//! Human-readable report output with optional ANSI color support. When the
//! source text is attached, labels are drawn under the offending lines.

use std::io::Write;

use bracer_scan::LineIndex;

use crate::{Label, Report, Severity};

use super::ReportEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The source a report points into, with its line table.
struct Snippet<'s> {
    text: &'s str,
    index: LineIndex,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<Snippet<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels render as annotated snippets.
    #[must_use]
    pub fn with_source(mut self, text: &'s str) -> Self {
        self.source = Some(Snippet {
            text,
            index: LineIndex::build(text),
        });
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Labels without source: one `path:line:col: message` line each.
    fn write_plain_labels(&mut self, report: &Report, path: &str) {
        let color = Self::severity_color(report.severity);
        for label in &report.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            let loc = label.location;
            let _ = write!(self.writer, "  ");
            self.write_colored(marker, colors::SECONDARY);
            let _ = write!(self.writer, " {path}:{}:{}: ", loc.line, loc.column);
            if label.is_primary {
                self.write_colored(&label.message, color);
            } else {
                self.write_colored(&label.message, colors::SECONDARY);
            }
            let _ = writeln!(self.writer);
        }
    }

    /// Labels drawn under their source lines, gutter `width` wide.
    fn write_snippet(&mut self, report: &Report, path: &str, width: usize) {
        let Some(snippet) = self.source.take() else {
            return;
        };
        let color = Self::severity_color(report.severity);
        let pad = " ".repeat(width);

        if let Some(primary) = report.primary_label() {
            let loc = primary.location;
            let _ = write!(self.writer, "{pad}");
            self.write_colored("-->", colors::SECONDARY);
            let _ = writeln!(self.writer, " {path}:{}:{}", loc.line, loc.column);
        }
        self.write_colored(&format!("{pad} |"), colors::SECONDARY);
        let _ = writeln!(self.writer);

        let mut labels: Vec<&Label> = report.labels.iter().collect();
        labels.sort_by_key(|l| (l.location.line, l.location.column));
        let mut current_line = None;
        for label in labels {
            let loc = label.location;
            if current_line != Some(loc.line) {
                current_line = Some(loc.line);
                let text = snippet
                    .index
                    .line_text(snippet.text, loc.line)
                    .unwrap_or_default()
                    .replace('\t', " ");
                self.write_colored(&format!("{:>width$} |", loc.line), colors::SECONDARY);
                let _ = writeln!(self.writer, " {text}");
            }
            self.write_colored(&format!("{pad} |"), colors::SECONDARY);
            let indent = " ".repeat(loc.column.saturating_sub(1) as usize);
            let _ = write!(self.writer, " {indent}");
            if label.is_primary {
                self.write_colored(&format!("^ {}", label.message), color);
            } else {
                self.write_colored(&format!("- {}", label.message), colors::SECONDARY);
            }
            let _ = writeln!(self.writer);
        }

        self.write_colored(&format!("{pad} |"), colors::SECONDARY);
        let _ = writeln!(self.writer);
        self.source = Some(snippet);
    }
}

impl<W: Write> ReportEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, report: &Report) {
        // Header: severity[CODE]: message
        let severity = report.severity.to_string();
        self.write_colored(&severity, Self::severity_color(report.severity));
        self.write_code(report.code.as_str());
        let _ = writeln!(self.writer, ": {}", report.message);

        let path = report.path.as_deref().unwrap_or("<input>");
        let width = report
            .labels
            .iter()
            .map(|l| l.location.line.to_string().len())
            .max()
            .unwrap_or(1);
        let footer = if self.source.is_some() && !report.labels.is_empty() {
            self.write_snippet(report, path, width);
            " ".repeat(width + 1)
        } else {
            self.write_plain_labels(report, path);
            "  ".to_string()
        };

        for note in &report.notes {
            let _ = write!(self.writer, "{footer}= ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &report.suggestions {
            let _ = write!(self.writer, "{footer}= ");
            if self.colors {
                let _ = write!(self.writer, "{}help{}", colors::HELP, colors::RESET);
            } else {
                let _ = write!(self.writer, "help");
            }
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(
                self.writer,
                ": {error_count} delimiter error{} found",
                plural_s(error_count)
            );
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    "; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
