//! `bracer`: find the first unbalanced bracket in JS/TS/JSX source files.
//!
//! The scanning itself lives in `bracer_scan` and the rendering in
//! `bracer_report`. This crate is the glue around them:
//!
//! ```text
//! args ──► options ──► discovery ──► input ──► scan ──► reports ──► emitter
//! ```
//!
//! Commands write to the streams they are given and return a
//! [`commands::Status`], so they can be driven from tests as well as `main`.

pub mod commands;
pub mod discovery;
pub mod input;
pub mod options;
mod tracing_setup;

pub use tracing_setup::init_tracing;
