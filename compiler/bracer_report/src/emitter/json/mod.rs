//! JSON Emitter
//!
//! Machine-readable report output as a JSON array of objects.

use std::io::Write;

use crate::Report;

use super::{escape_json, trailing_comma, ReportEmitter};

/// JSON emitter for machine-readable output.
///
/// Call [`begin`](Self::begin) before the first report and
/// [`end`](Self::end) after the last one.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if !self.first {
            let _ = writeln!(self.writer);
        }
        let _ = writeln!(self.writer, "]");
    }

    fn write_string_list(&mut self, key: &str, items: &[String], last: bool) {
        let _ = writeln!(self.writer, "    \"{key}\": [");
        for (i, item) in items.iter().enumerate() {
            let comma = trailing_comma(i, items.len());
            let _ = writeln!(self.writer, "      \"{}\"{comma}", escape_json(item));
        }
        let comma = if last { "" } else { "," };
        let _ = writeln!(self.writer, "    ]{comma}");
    }
}

impl<W: Write> ReportEmitter for JsonEmitter<W> {
    fn emit(&mut self, report: &Report) {
        if !self.first {
            let _ = write!(self.writer, ",");
        }
        let _ = writeln!(self.writer);
        self.first = false;

        // Built by hand; the shape is small and fixed.
        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(self.writer, "    \"code\": \"{}\",", report.code.as_str());
        let _ = writeln!(self.writer, "    \"severity\": \"{}\",", report.severity);
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&report.message)
        );
        match report.path {
            Some(ref path) => {
                let _ = writeln!(self.writer, "    \"file\": \"{}\",", escape_json(path));
            }
            None => {
                let _ = writeln!(self.writer, "    \"file\": null,");
            }
        }

        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in report.labels.iter().enumerate() {
            let comma = trailing_comma(i, report.labels.len());
            let loc = label.location;
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(self.writer, "        \"offset\": {},", loc.offset);
            let _ = writeln!(self.writer, "        \"line\": {},", loc.line);
            let _ = writeln!(self.writer, "        \"column\": {},", loc.column);
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&label.message)
            );
            let _ = writeln!(self.writer, "        \"primary\": {}", label.is_primary);
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        self.write_string_list("notes", &report.notes, false);
        self.write_string_list("suggestions", &report.suggestions, true);

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // The array itself is the summary.
    }
}
