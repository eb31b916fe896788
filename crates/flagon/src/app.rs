use std::path::Path;

use anyhow::Result;
use semver::Version;

use flagon_args::Flags;

use crate::help;
use crate::version;

/// What [`App::run`] decided after one pass over the argument vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Flags parsed and required checks passed; leftover tokens included.
    Parsed(Vec<String>),
    /// The help flag was given; the rendered help text.
    Help(String),
    /// The version flag was given; the rendered version line.
    Version(String),
}

/// A command-line application: display metadata plus the flag set it
/// accepts.
///
/// Built with chained setters, then driven once per process invocation via
/// [`App::run`] or [`App::run_or_exit`].
#[derive(Debug, Clone, Default)]
pub struct App {
    name: String,
    usage: String,
    description: String,
    authors: Vec<String>,
    version: Option<Version>,
    flags: Flags,
}

impl App {
    pub fn new(name: &str) -> App {
        App {
            name: name.to_owned(),
            ..App::default()
        }
    }

    pub fn set_usage(mut self, usage: &str) -> App {
        self.usage = usage.to_owned();
        self
    }

    pub fn set_description(mut self, description: &str) -> App {
        self.description = description.to_owned();
        self
    }

    pub fn set_authors(mut self, authors: &[&str]) -> App {
        self.authors = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn set_version(mut self, version: Version) -> App {
        self.version = Some(version);
        self
    }

    /// Load the version from a file holding a single version string (the
    /// conventional `VERSION` file).
    pub fn set_version_from_file(self, path: &Path) -> Result<App> {
        let loaded = version::from_file(path)?;
        Ok(self.set_version(loaded))
    }

    pub fn set_flags(mut self, flags: Flags) -> App {
        self.flags = flags;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    /// Render the help text for this app.
    pub fn help(&self) -> String {
        help::render(self)
    }

    /// The one-line version output: app name plus version when one is set.
    pub fn version_line(&self) -> String {
        match &self.version {
            Some(version) => format!("{} {}", self.name, version),
            None => self.name.clone(),
        }
    }

    /// Run the full pipeline against `args` (the process argument vector
    /// minus the program name).
    ///
    /// Appends the help/version flags, validates the set, parses, then
    /// either short-circuits into [`Outcome::Help`]/[`Outcome::Version`] or
    /// enforces required flags and returns the leftover tokens. Typed flag
    /// values are read afterwards through [`App::flags`].
    pub fn run(&mut self, args: &[String]) -> Result<Outcome> {
        self.flags.append_help_if_not_present();
        self.flags.append_version_if_not_present();
        self.flags.validate()?;

        tracing::debug!(tokens = args.len(), "parsing argument vector");
        let unparsed = self.flags.parse(args)?;

        if self.flags.get_bool("help") {
            tracing::debug!("rendering help");
            return Ok(Outcome::Help(self.help()));
        }
        if self.flags.get_bool("version") {
            return Ok(Outcome::Version(self.version_line()));
        }

        self.flags.required_are_parsed()?;
        Ok(Outcome::Parsed(unparsed))
    }

    /// Run against `args`, reporting the outcome the way a command-line
    /// program does: help/version go to stdout with a zero exit, errors go
    /// to stderr with a non-zero exit. Returns the leftover tokens.
    pub fn run_or_exit(&mut self, args: &[String]) -> Vec<String> {
        match self.run(args) {
            Ok(Outcome::Parsed(unparsed)) => unparsed,
            Ok(Outcome::Help(text)) | Ok(Outcome::Version(text)) => {
                println!("{text}");
                std::process::exit(0);
            }
            Err(err) => {
                eprintln!("{}: {err:#}", self.name);
                std::process::exit(1);
            }
        }
    }
}
