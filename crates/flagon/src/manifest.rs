//! JSON manifest for declaring an app and its flag set.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use flagon_args::{Flag, Flags, Kind};

use crate::app::App;

pub const DEFAULT_MANIFEST_NAME: &str = "flagon.json";

/// Declarative description of an [`App`].
///
/// The manifest declares the flag *set* only — names, kinds, required-ness.
/// It is never a source of flag values; those always come from the argument
/// vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usage: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<FlagDecl>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,

    /// Value kind by name: "string", "int", "bool" or "float". Omitted
    /// means a presence flag.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
}

/// Read and decode a manifest from `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest: {}", path.display()))?;
    let manifest: Manifest = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse manifest JSON: {}", path.display()))?;
    Ok(manifest)
}

impl Manifest {
    /// Build a validated [`App`] from the declaration.
    ///
    /// Flag type names resolve through [`Kind`]'s `FromStr`; an unrecognized
    /// name surfaces as the unknown-type error.
    pub fn into_app(self) -> Result<App> {
        let mut flags = Flags::new();
        for decl in self.flags {
            let kind = match decl.kind.as_deref() {
                Some(name) => name.parse::<Kind>()?,
                None => Kind::default(),
            };
            flags.push(Flag {
                short: decl.short,
                long: decl.long,
                kind,
                required: decl.required,
                help: decl.help,
                ..Flag::default()
            });
        }
        flags.validate()?;

        let mut app = App::new(&self.name)
            .set_usage(&self.usage)
            .set_description(&self.description);
        if !self.authors.is_empty() {
            let authors: Vec<&str> = self.authors.iter().map(String::as_str).collect();
            app = app.set_authors(&authors);
        }
        if let Some(raw) = &self.version {
            let version = raw
                .parse::<semver::Version>()
                .with_context(|| format!("failed to parse manifest version: {raw}"))?;
            app = app.set_version(version);
        }

        Ok(app.set_flags(flags))
    }
}
