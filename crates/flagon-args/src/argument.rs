//! Token classification and typed value conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Declared type of a flag's value.
///
/// `Bool` is the default: a flag that declares no kind is a presence flag
/// and consumes no value token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Kind {
    String,
    Int,
    #[default]
    Bool,
    Float,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Bool => "bool",
            Kind::Float => "float",
        };
        f.write_str(name)
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Kind, Error> {
        match s {
            "string" => Ok(Kind::String),
            "int" => Ok(Kind::Int),
            "bool" => Ok(Kind::Bool),
            "float" => Ok(Kind::Float),
            other => Err(Error::UnknownType(other.to_owned())),
        }
    }
}

/// Whether a token is a short flag: exactly one dash and one non-dash
/// character (`-u`).
pub fn is_short(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 2 && bytes[0] == b'-' && bytes[1] != b'-'
}

/// Whether a token is a long flag: two leading dashes and at least one more
/// character (`--url`, `--length=3.25`).
pub fn is_long(token: &str) -> bool {
    token.len() > 2 && token.starts_with("--")
}

/// Strip the leading dash from a short token. Anything else passes through
/// unchanged.
pub fn short_trim(token: &str) -> &str {
    if is_short(token) { &token[1..] } else { token }
}

/// Strip the leading double dash from a long token, splitting off an inline
/// value on the first `=` if one is present.
///
/// `--ticks=` yields `("ticks", Some(""))`: an explicit empty value is still
/// a value. Non-long tokens pass through unchanged with no inline value.
pub fn long_trim(token: &str) -> (&str, Option<&str>) {
    if !is_long(token) {
        return (token, None);
    }
    match token[2..].split_once('=') {
        Some((name, inline)) => (name, Some(inline)),
        None => (&token[2..], None),
    }
}

/// Typed representation produced by a successful [`Value::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Str(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

/// A raw command-line token paired with the kind it should convert to.
///
/// Conversion is deferred: [`Value::parse`] populates the typed
/// representation and the `as_*` accessors read it back. An accessor of the
/// wrong kind returns that type's zero value rather than failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    raw: String,
    kind: Kind,
    parsed: Option<Parsed>,
}

impl Value {
    pub fn new(raw: &str, kind: Kind) -> Value {
        Value {
            raw: raw.to_owned(),
            kind,
            parsed: None,
        }
    }

    /// Convert the raw token to the declared kind.
    ///
    /// `Bool` ignores the token entirely: presence implies `true`, there is
    /// no explicit false form. `String` takes the token verbatim. `Int` and
    /// `Float` fail on malformed or overflowing input.
    pub fn parse(&mut self) -> Result<(), Error> {
        self.parsed = Some(match self.kind {
            Kind::Bool => Parsed::Bool(true),
            Kind::String => Parsed::Str(self.raw.clone()),
            Kind::Int => {
                let parsed = self.raw.parse::<i64>().map_err(|_| Error::Conversion {
                    value: self.raw.clone(),
                    kind: Kind::Int,
                })?;
                Parsed::Int(parsed)
            }
            Kind::Float => {
                let parsed = self.raw.parse::<f64>().map_err(|_| Error::Conversion {
                    value: self.raw.clone(),
                    kind: Kind::Float,
                })?;
                Parsed::Float(parsed)
            }
        });
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        match &self.parsed {
            Some(Parsed::Str(s)) => s,
            _ => "",
        }
    }

    pub fn as_int(&self) -> i64 {
        match self.parsed {
            Some(Parsed::Int(n)) => n,
            _ => 0,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self.parsed {
            Some(Parsed::Bool(b)) => b,
            _ => false,
        }
    }

    pub fn as_float(&self) -> f64 {
        match self.parsed {
            Some(Parsed::Float(f)) => f,
            _ => 0.0,
        }
    }
}
