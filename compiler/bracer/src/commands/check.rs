//! The `check` command: scan files for delimiter balance and report.

use std::io::Write;
use std::path::{Path, PathBuf};

use bracer_report::{reports_for, JsonEmitter, Report, ReportEmitter, TerminalEmitter};
use bracer_scan::{scan, LineIndex, ScanOptions, ScanOutcome};
use rayon::prelude::*;

use crate::discovery::expand_paths;
use crate::input::{read_source, InputError, SourceFile};
use crate::options::{CheckOptions, OutputFormat};

use super::Status;

/// One scanned file.
#[derive(Clone, Debug)]
pub struct Checked {
    pub source: SourceFile,
    pub outcome: ScanOutcome,
}

impl Checked {
    pub fn is_balanced(&self) -> bool {
        self.outcome.diagnostic.is_balanced()
    }

    /// Reports for this file, tagged with its path.
    pub fn reports(&self) -> Vec<Report> {
        let path = self.source.display_path();
        reports_for(&self.outcome, &self.source.text)
            .into_iter()
            .map(|r| r.with_path(path.clone()))
            .collect()
    }
}

/// Read and scan a single file.
pub fn check_source(path: &Path, options: &ScanOptions) -> Result<Checked, InputError> {
    let source = read_source(path)?;
    let outcome = scan(&source.text, options);
    tracing::debug!(
        path = %path.display(),
        bytes = source.text.len(),
        verdict = %outcome.diagnostic,
        "scanned"
    );
    Ok(Checked { source, outcome })
}

/// Scan every file, in parallel unless `parallel` is false.
///
/// Results come back in the order of `files` whichever finishes first.
pub fn check_files(
    files: &[PathBuf],
    options: &ScanOptions,
    parallel: bool,
) -> Vec<Result<Checked, InputError>> {
    let sequential = || {
        files
            .iter()
            .map(|path| check_source(path, options))
            .collect::<Vec<_>>()
    };
    if !parallel || files.len() < 2 {
        return sequential();
    }

    // Scoped pool so worker threads are gone before we return.
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| check_source(path, options))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            sequential()
        })
}

/// Running totals across all files.
struct Tally {
    errors: usize,
    warnings: usize,
    status: Status,
}

impl Tally {
    fn new() -> Self {
        Tally {
            errors: 0,
            warnings: 0,
            status: Status::Balanced,
        }
    }

    fn record(&mut self, checked: &Checked, reports: &[Report]) {
        let status = if checked.is_balanced() {
            Status::Balanced
        } else {
            Status::Violation
        };
        self.status = self.status.worst(status);
        let errors = reports.iter().filter(|r| r.is_error()).count();
        self.errors += errors;
        self.warnings += reports.len() - errors;
    }

    fn record_failure(&mut self) {
        self.status = Status::Failure;
    }
}

/// Run `check`: discover, scan and print the verdict for every file.
///
/// Reports and the summary go to `err`, `OK:` lines to `out`. With
/// `--format=json` the report array goes to `out` instead. `is_tty` says
/// whether `err` is a terminal, for `--color=auto`.
pub fn run_check<O: Write, E: Write>(
    options: &CheckOptions,
    out: &mut O,
    err: &mut E,
    is_tty: bool,
) -> Status {
    let files = expand_paths(&options.paths, &options.extensions);
    tracing::debug!(count = files.len(), "checking files");
    if files.is_empty() {
        let _ = writeln!(err, "error: no source files found");
        return Status::Failure;
    }

    let results = check_files(&files, &options.scan_options(), options.parallel);
    match options.format {
        OutputFormat::Json => render_json(&results, out, err),
        OutputFormat::Text | OutputFormat::Short => {
            render_human(&results, options, out, err, is_tty)
        }
    }
}

fn render_json<O: Write, E: Write>(
    results: &[Result<Checked, InputError>],
    out: &mut O,
    err: &mut E,
) -> Status {
    let mut tally = Tally::new();
    let mut emitter = JsonEmitter::new(out);
    emitter.begin();
    for result in results {
        match result {
            Ok(checked) => {
                let reports = checked.reports();
                tally.record(checked, &reports);
                emitter.emit_all(&reports);
            }
            Err(e) => {
                let _ = writeln!(err, "error: {e}");
                tally.record_failure();
            }
        }
    }
    emitter.end();
    emitter.flush();
    tally.status
}

fn render_human<O: Write, E: Write>(
    results: &[Result<Checked, InputError>],
    options: &CheckOptions,
    out: &mut O,
    err: &mut E,
    is_tty: bool,
) -> Status {
    let mut tally = Tally::new();
    for result in results {
        let checked = match result {
            Ok(checked) => checked,
            Err(e) => {
                let _ = writeln!(err, "error: {e}");
                tally.record_failure();
                continue;
            }
        };
        let reports = checked.reports();
        tally.record(checked, &reports);
        let path = checked.source.display_path();

        if options.format == OutputFormat::Short {
            let line = short_line(&path, checked, &reports);
            let warned = reports.iter().any(|r| !r.is_error());
            if !checked.is_balanced() || warned {
                let _ = writeln!(err, "{line}");
                write_tail(err, checked, options.tail);
            } else if !options.quiet {
                let _ = writeln!(out, "{line}");
                write_tail(out, checked, options.tail);
            }
            continue;
        }

        if !reports.is_empty() {
            let mut emitter = TerminalEmitter::with_color_mode(&mut *err, options.color, is_tty)
                .with_source(&checked.source.text);
            emitter.emit_all(&reports);
            emitter.flush();
        }
        if checked.is_balanced() {
            if !options.quiet {
                let _ = writeln!(out, "OK: {path}");
                write_tail(out, checked, options.tail);
            }
        } else {
            write_tail(err, checked, options.tail);
        }
    }

    if options.format == OutputFormat::Text {
        let mut emitter = TerminalEmitter::with_color_mode(&mut *err, options.color, is_tty);
        emitter.emit_summary(tally.errors, tally.warnings);
        emitter.flush();
    }
    tally.status
}

/// `path: verdict`, followed by `; warning[CODE]: message` per warning.
fn short_line(path: &str, checked: &Checked, reports: &[Report]) -> String {
    let mut line = format!("{path}: {}", checked.outcome.diagnostic);
    for warning in reports.iter().filter(|r| !r.is_error()) {
        line.push_str(&format!("; warning[{}]: {}", warning.code, warning.message));
    }
    line
}

/// Print the last `n` lines of a file, numbered like a snippet gutter.
fn write_tail<W: Write>(writer: &mut W, checked: &Checked, n: Option<u32>) {
    let Some(n) = n.filter(|&n| n > 0) else {
        return;
    };
    let text = &checked.source.text;
    let lines = LineIndex::build(text).tail(text, n);
    let width = lines.last().map_or(1, |(line, _)| line.to_string().len());
    let _ = writeln!(
        writer,
        "==> {} (last {} lines) <==",
        checked.source.display_path(),
        lines.len()
    );
    for (line, content) in lines {
        let _ = writeln!(writer, "{line:>width$} | {content}");
    }
}
