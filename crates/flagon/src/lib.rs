//! Declarative command-line applications over [`flagon_args`].
//!
//! [`App`] bundles what a command-line program shows the world — name,
//! usage line, description, authors, version — with the flag set it accepts,
//! and runs the declare/validate/parse/check pipeline in one call.
//! `-h/--help` and `-v/--version` are appended automatically and rendered
//! without running the rest of the program.
//!
//! The parsing engine itself lives in [`flagon_args`]; this crate only adds
//! the surfaces around it: help rendering, VERSION-file loading, a JSON
//! manifest for declaring an app, and stderr-and-exit error reporting.

pub mod app;
pub mod help;
pub mod manifest;
pub mod version;

pub use app::{App, Outcome};
pub use manifest::{Manifest, load_manifest};
