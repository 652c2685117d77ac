//! Command-line options for `check` and `mask`.
//!
//! Parsed by hand from `std::env::args`, one `--name=value` or `--flag` per
//! argument. Anything not starting with `-` is a path.

use std::path::PathBuf;

use bracer_report::ColorMode;
use bracer_scan::{DelimiterSet, EscapePolicy, ScanOptions, UnclosedPolicy};
use thiserror::Error;

/// Extensions picked up when a directory is given to `check`.
pub const DEFAULT_EXTENSIONS: &[&str] = &["tsx", "jsx", "ts", "js", "mjs", "cjs"];

/// Lines printed by a bare `--tail`.
pub const DEFAULT_TAIL: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option} (expected {expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("no input files")]
    NoPaths,

    #[error("expected exactly one file, got {0}")]
    TooManyPaths(usize),
}

/// How `check` prints its results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Annotated reports with source snippets.
    #[default]
    Text,
    /// One line per file: `path: verdict`.
    Short,
    /// A JSON array of reports.
    Json,
}

/// Settings for the `check` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub escape: EscapePolicy,
    pub delimiters: DelimiterSet,
    pub unclosed: UnclosedPolicy,
    /// Print the last N lines of every file after its verdict.
    pub tail: Option<u32>,
    pub parallel: bool,
    /// Extensions (without the dot) used for directory discovery.
    pub extensions: Vec<String>,
    /// Suppress `OK:` lines for balanced files.
    pub quiet: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            paths: Vec::new(),
            format: OutputFormat::default(),
            color: ColorMode::default(),
            escape: EscapePolicy::default(),
            delimiters: DelimiterSet::default(),
            unclosed: UnclosedPolicy::default(),
            tail: None,
            parallel: true,
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            quiet: false,
        }
    }
}

impl CheckOptions {
    /// The core scan settings these options select.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_escape(self.escape)
            .with_delimiters(self.delimiters)
            .with_unclosed(self.unclosed)
    }
}

/// Settings for the `mask` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskOptions {
    pub path: PathBuf,
    pub escape: EscapePolicy,
}

/// Split `--name=value` into `("--name", Some("value"))`.
fn split_arg(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (arg, None),
    }
}

fn require<'a>(option: &'static str, value: Option<&'a str>) -> Result<&'a str, OptionsError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(OptionsError::MissingValue(option)),
    }
}

fn parse_escape(value: Option<&str>) -> Result<EscapePolicy, OptionsError> {
    match require("--escape", value)? {
        "lookbehind" => Ok(EscapePolicy::Lookbehind),
        "forward" => Ok(EscapePolicy::Forward),
        other => Err(OptionsError::InvalidValue {
            option: "--escape",
            value: other.to_string(),
            expected: "lookbehind or forward",
        }),
    }
}

fn parse_format(value: Option<&str>) -> Result<OutputFormat, OptionsError> {
    match require("--format", value)? {
        "text" => Ok(OutputFormat::Text),
        "short" => Ok(OutputFormat::Short),
        "json" => Ok(OutputFormat::Json),
        other => Err(OptionsError::InvalidValue {
            option: "--format",
            value: other.to_string(),
            expected: "text, short or json",
        }),
    }
}

fn parse_color(value: Option<&str>) -> Result<ColorMode, OptionsError> {
    match require("--color", value)? {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => Err(OptionsError::InvalidValue {
            option: "--color",
            value: other.to_string(),
            expected: "auto, always or never",
        }),
    }
}

fn parse_tail(value: Option<&str>) -> Result<u32, OptionsError> {
    let Some(value) = value else {
        return Ok(DEFAULT_TAIL);
    };
    value.parse().map_err(|_| OptionsError::InvalidValue {
        option: "--tail",
        value: value.to_string(),
        expected: "a line count",
    })
}

fn parse_extensions(value: Option<&str>) -> Result<Vec<String>, OptionsError> {
    let extensions: Vec<String> = require("--ext", value)?
        .split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect();
    if extensions.is_empty() {
        return Err(OptionsError::MissingValue("--ext"));
    }
    Ok(extensions)
}

/// Parse the arguments following `check`.
pub fn parse_check_args(args: &[String]) -> Result<CheckOptions, OptionsError> {
    let mut options = CheckOptions::default();

    for arg in args {
        if !arg.starts_with('-') {
            options.paths.push(PathBuf::from(arg));
            continue;
        }
        match split_arg(arg) {
            ("--format", value) => options.format = parse_format(value)?,
            ("--color", value) => options.color = parse_color(value)?,
            ("--escape", value) => options.escape = parse_escape(value)?,
            ("--tail", value) => options.tail = Some(parse_tail(value)?),
            ("--ext", value) => options.extensions = parse_extensions(value)?,
            ("--no-angle", None) => options.delimiters = DelimiterSet::NoAngle,
            ("--innermost", None) => options.unclosed = UnclosedPolicy::Innermost,
            ("--no-parallel", None) => options.parallel = false,
            ("-q" | "--quiet", None) => options.quiet = true,
            _ => return Err(OptionsError::UnknownOption(arg.clone())),
        }
    }

    if options.paths.is_empty() {
        return Err(OptionsError::NoPaths);
    }
    Ok(options)
}

/// Parse the arguments following `mask`.
pub fn parse_mask_args(args: &[String]) -> Result<MaskOptions, OptionsError> {
    let mut paths = Vec::new();
    let mut escape = EscapePolicy::default();

    for arg in args {
        if !arg.starts_with('-') {
            paths.push(PathBuf::from(arg));
            continue;
        }
        match split_arg(arg) {
            ("--escape", value) => escape = parse_escape(value)?,
            _ => return Err(OptionsError::UnknownOption(arg.clone())),
        }
    }

    match paths.len() {
        0 => Err(OptionsError::NoPaths),
        1 => Ok(MaskOptions {
            path: paths.remove(0),
            escape,
        }),
        n => Err(OptionsError::TooManyPaths(n)),
    }
}
