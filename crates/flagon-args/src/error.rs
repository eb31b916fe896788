use thiserror::Error;

use crate::argument::Kind;

/// Errors produced while declaring, validating or parsing a flag set.
///
/// Every variant carries the offending token or alias; errors are built at
/// the failure site and returned, never printed or paniced on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Two flags share an alias, or a flag declares no alias at all.
    #[error("duplicate or missing alias: {0}")]
    AliasConflict(String),

    /// A flag type name outside the closed set of kinds.
    #[error("unknown flag type '{0}'")]
    UnknownType(String),

    /// A value-taking flag was matched with nothing left to consume.
    #[error("missing value for flag '{0}'")]
    MissingValue(String),

    /// A value token could not be converted to the declared kind.
    #[error("cannot parse value \"{value}\" as {kind}")]
    Conversion { value: String, kind: Kind },

    /// A flag marked required was never matched during parse.
    #[error("required flag '{0}' not provided")]
    RequiredMissing(String),
}
