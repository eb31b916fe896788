//! Flag declarations and the argument-vector parsing engine.

use crate::argument::{self, Kind, Value};
use crate::error::Error;

/// A single declared command-line option.
///
/// At least one of `short`/`long` must be set for the declaration to pass
/// [`Flags::validate`]. `matched` and `value` are parse state, filled in by
/// [`Flags::parse`]; leave them at their defaults when declaring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flag {
    /// Single-character alias, matched against `-x` tokens.
    pub short: Option<char>,
    /// Word alias, matched against `--name` and `--name=value` tokens.
    pub long: Option<String>,
    pub kind: Kind,
    pub required: bool,
    /// One-line description shown in rendered help text.
    pub help: String,
    pub matched: bool,
    pub value: Option<Value>,
}

impl Flag {
    /// Whether `alias` (no dashes) names this flag by short or long form.
    fn answers_to(&self, alias: &str) -> bool {
        let mut chars = alias.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if self.short == Some(c) {
                return true;
            }
        }
        self.long.as_deref() == Some(alias)
    }

    /// Alias used in diagnostics: the long form when present, else the short.
    pub fn display_alias(&self) -> String {
        match (self.long.as_deref(), self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }
}

/// Ordered set of flag declarations.
///
/// The set exclusively owns its flags: [`Flags::parse`] mutates
/// `matched`/`value` on the declarations in place, so one set supports one
/// parse per program invocation. Call [`Flags::reset`] before feeding the
/// same set a second argument vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags(Vec<Flag>);

impl From<Vec<Flag>> for Flags {
    fn from(flags: Vec<Flag>) -> Flags {
        Flags(flags)
    }
}

impl Flags {
    pub fn new() -> Flags {
        Flags(Vec::new())
    }

    pub fn push(&mut self, flag: Flag) {
        self.0.push(flag);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the declarations for duplicate or missing aliases.
    ///
    /// Pure check with no mutation. Call it once before [`Flags::parse`];
    /// parsing does not validate on its own. An empty set is valid.
    pub fn validate(&self) -> Result<(), Error> {
        for (i, flag) in self.0.iter().enumerate() {
            if flag.short.is_none() && flag.long.is_none() {
                return Err(Error::AliasConflict(
                    "flag declares neither a short nor a long alias".to_owned(),
                ));
            }
            for other in &self.0[i + 1..] {
                if let Some(short) = flag.short {
                    if other.short == Some(short) {
                        return Err(Error::AliasConflict(format!(
                            "short alias '{short}' declared more than once"
                        )));
                    }
                }
                if let Some(long) = flag.long.as_deref() {
                    if other.long.as_deref() == Some(long) {
                        return Err(Error::AliasConflict(format!(
                            "long alias '{long}' declared more than once"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Find the flag answering to `alias` (short or long form, no dashes).
    pub fn lookup(&self, alias: &str) -> Option<&Flag> {
        self.0.iter().find(|flag| flag.answers_to(alias))
    }

    fn position_short(&self, alias: &str) -> Option<usize> {
        let short = alias.chars().next()?;
        self.0.iter().position(|flag| flag.short == Some(short))
    }

    fn position_long(&self, name: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|flag| flag.long.as_deref() == Some(name))
    }

    /// Consume `args` left to right, matching declared flags and collecting
    /// everything else.
    ///
    /// Returns the leftover tokens in encounter order. Flag-shaped tokens
    /// that match no declaration pass through trimmed of their dashes rather
    /// than erroring. A flag matched more than once keeps the last value.
    /// A missing or malformed value aborts the whole parse and the partial
    /// leftover list is discarded.
    pub fn parse(&mut self, args: &[String]) -> Result<Vec<String>, Error> {
        let mut unparsed = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let token = args[i].as_str();

            // A short token only matches short aliases, a long token only
            // long aliases.
            let (alias, inline, found) = if argument::is_short(token) {
                let alias = argument::short_trim(token);
                (alias, None, self.position_short(alias))
            } else if argument::is_long(token) {
                let (name, inline) = argument::long_trim(token);
                (name, inline, self.position_long(name))
            } else {
                unparsed.push(token.to_owned());
                i += 1;
                continue;
            };

            let Some(idx) = found else {
                unparsed.push(alias.to_owned());
                i += 1;
                continue;
            };

            let kind = self.0[idx].kind;
            let raw = if kind == Kind::Bool {
                // Presence flag: nothing to consume.
                String::new()
            } else if let Some(inline) = inline {
                inline.to_owned()
            } else {
                i += 1;
                match args.get(i) {
                    Some(next) => next.clone(),
                    None => return Err(Error::MissingValue(alias.to_owned())),
                }
            };

            let mut value = Value::new(&raw, kind);
            value.parse()?;

            let flag = &mut self.0[idx];
            flag.matched = true;
            flag.value = Some(value);
            i += 1;
        }

        Ok(unparsed)
    }

    /// Verify every flag marked required was matched by the last parse.
    ///
    /// A separate pass the caller invokes after [`Flags::parse`]; parsing
    /// itself never consults `required`.
    pub fn required_are_parsed(&self) -> Result<(), Error> {
        for flag in &self.0 {
            if flag.required && !flag.matched {
                return Err(Error::RequiredMissing(flag.display_alias()));
            }
        }
        Ok(())
    }

    /// Clear parse state on every flag so the set can run another parse.
    pub fn reset(&mut self) {
        for flag in &mut self.0 {
            flag.matched = false;
            flag.value = None;
        }
    }

    /// Append the synthetic `-h/--help` presence flag unless a declared flag
    /// already claims either alias. Idempotent.
    pub fn append_help_if_not_present(&mut self) {
        if self.lookup("h").is_some() || self.lookup("help").is_some() {
            return;
        }
        self.0.push(Flag {
            short: Some('h'),
            long: Some("help".to_owned()),
            help: "print this help message".to_owned(),
            ..Flag::default()
        });
    }

    /// Append the synthetic `-v/--version` presence flag unless a declared
    /// flag already claims either alias. Idempotent.
    pub fn append_version_if_not_present(&mut self) {
        if self.lookup("v").is_some() || self.lookup("version").is_some() {
            return;
        }
        self.0.push(Flag {
            short: Some('v'),
            long: Some("version".to_owned()),
            help: "print the version".to_owned(),
            ..Flag::default()
        });
    }

    /// Parsed value of the flag at `alias` as a string.
    ///
    /// Silent-miss contract, shared by all four accessors: an unknown alias,
    /// an unmatched flag or a kind mismatch yields the type's zero value,
    /// never an error.
    pub fn get_str(&self, alias: &str) -> String {
        self.lookup(alias)
            .and_then(|flag| flag.value.as_ref())
            .map(|value| value.as_str().to_owned())
            .unwrap_or_default()
    }

    /// Parsed value of the flag at `alias` as an integer.
    pub fn get_int(&self, alias: &str) -> i64 {
        self.lookup(alias)
            .and_then(|flag| flag.value.as_ref())
            .map(|value| value.as_int())
            .unwrap_or(0)
    }

    /// Whether the presence flag at `alias` was given.
    pub fn get_bool(&self, alias: &str) -> bool {
        self.lookup(alias)
            .and_then(|flag| flag.value.as_ref())
            .map(|value| value.as_bool())
            .unwrap_or(false)
    }

    /// Parsed value of the flag at `alias` as a float.
    pub fn get_float(&self, alias: &str) -> f64 {
        self.lookup(alias)
            .and_then(|flag| flag.value.as_ref())
            .map(|value| value.as_float())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn sample_flags() -> Flags {
        Flags::from(vec![
            Flag {
                short: Some('u'),
                long: Some("url".to_owned()),
                kind: Kind::String,
                ..Flag::default()
            },
            Flag {
                short: Some('d'),
                long: Some("debug".to_owned()),
                ..Flag::default()
            },
            Flag {
                short: Some('l'),
                long: Some("length".to_owned()),
                kind: Kind::Float,
                ..Flag::default()
            },
        ])
    }

    #[test]
    fn validate_accepts_collision_free_sets() {
        assert_eq!(Flags::new().validate(), Ok(()));
        assert_eq!(sample_flags().validate(), Ok(()));

        let short_only = Flags::from(vec![Flag {
            short: Some('x'),
            ..Flag::default()
        }]);
        assert_eq!(short_only.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_aliases() {
        let flags = Flags::from(vec![Flag::default()]);
        assert!(matches!(flags.validate(), Err(Error::AliasConflict(_))));
    }

    #[test]
    fn validate_rejects_duplicate_short() {
        let flags = Flags::from(vec![
            Flag {
                short: Some('u'),
                long: Some("url".to_owned()),
                ..Flag::default()
            },
            Flag {
                short: Some('u'),
                long: Some("user".to_owned()),
                ..Flag::default()
            },
        ]);
        assert!(matches!(flags.validate(), Err(Error::AliasConflict(_))));
    }

    #[test]
    fn validate_rejects_duplicate_long() {
        let flags = Flags::from(vec![
            Flag {
                short: Some('a'),
                long: Some("url".to_owned()),
                ..Flag::default()
            },
            Flag {
                short: Some('b'),
                long: Some("url".to_owned()),
                ..Flag::default()
            },
        ]);
        assert!(matches!(flags.validate(), Err(Error::AliasConflict(_))));
    }

    #[test]
    fn lookup_by_either_alias() {
        let flags = sample_flags();
        assert!(flags.lookup("").is_none());
        assert!(flags.lookup("nope").is_none());

        let by_short = flags.lookup("u").expect("short alias");
        assert_eq!(by_short.long.as_deref(), Some("url"));
        let by_long = flags.lookup("url").expect("long alias");
        assert_eq!(by_long.short, Some('u'));
    }

    #[test]
    fn parse_round_trip() {
        let mut flags = sample_flags();
        let unparsed = flags
            .parse(&args(&["-u", "http://x", "--debug", "--length=3.25"]))
            .unwrap();

        assert!(unparsed.is_empty());
        assert_eq!(flags.get_str("url"), "http://x");
        assert!(flags.get_bool("debug"));
        assert_eq!(flags.get_float("length"), 3.25);
    }

    #[test]
    fn parse_passes_unknown_tokens_through_trimmed() {
        let mut flags = sample_flags();
        let unparsed = flags.parse(&args(&["noflag", "", "--unknown"])).unwrap();
        assert_eq!(unparsed, vec!["noflag", "", "unknown"]);
    }

    #[test]
    fn parse_empty_vector() {
        let mut flags = sample_flags();
        let unparsed = flags.parse(&[]).unwrap();
        assert!(unparsed.is_empty());
    }

    #[test]
    fn parse_preserves_positional_order() {
        let mut flags = sample_flags();
        let unparsed = flags
            .parse(&args(&["one", "-d", "two", "-z", "three"]))
            .unwrap();
        assert_eq!(unparsed, vec!["one", "two", "z", "three"]);
    }

    #[test]
    fn parse_missing_value() {
        let mut flags = Flags::from(vec![Flag {
            short: Some('t'),
            long: Some("ticks".to_owned()),
            kind: Kind::Int,
            ..Flag::default()
        }]);
        assert_eq!(
            flags.parse(&args(&["--ticks"])),
            Err(Error::MissingValue("ticks".to_owned()))
        );
    }

    #[test]
    fn parse_conversion_failure_is_all_or_nothing() {
        let mut flags = Flags::from(vec![
            Flag {
                short: Some('t'),
                long: Some("ticks".to_owned()),
                kind: Kind::Int,
                ..Flag::default()
            },
            Flag {
                short: Some('d'),
                long: Some("debug".to_owned()),
                ..Flag::default()
            },
        ]);
        let err = flags
            .parse(&args(&["positional", "--ticks=notanumber"]))
            .unwrap_err();
        assert_eq!(
            err,
            Error::Conversion {
                value: "notanumber".to_owned(),
                kind: Kind::Int,
            }
        );
    }

    #[test]
    fn parse_empty_inline_value_is_a_value() {
        // "--ticks=" carries an explicit empty value: conversion fails for
        // an int flag instead of consuming the next token.
        let mut flags = Flags::from(vec![
            Flag {
                short: Some('t'),
                long: Some("ticks".to_owned()),
                kind: Kind::Int,
                ..Flag::default()
            },
            Flag {
                short: Some('n'),
                long: Some("name".to_owned()),
                kind: Kind::String,
                ..Flag::default()
            },
        ]);
        assert!(matches!(
            flags.parse(&args(&["--ticks=", "5"])),
            Err(Error::Conversion { .. })
        ));

        flags.reset();
        let unparsed = flags.parse(&args(&["--name=", "rest"])).unwrap();
        assert_eq!(unparsed, vec!["rest"]);
        assert_eq!(flags.get_str("name"), "");
        assert!(flags.lookup("name").expect("declared").matched);
    }

    #[test]
    fn parse_empty_next_token_is_a_value() {
        let mut flags = sample_flags();
        let unparsed = flags.parse(&args(&["-u", "", "tail"])).unwrap();
        assert_eq!(unparsed, vec!["tail"]);
        assert_eq!(flags.get_str("url"), "");
        assert!(flags.lookup("url").expect("declared").matched);
    }

    #[test]
    fn parse_last_occurrence_wins() {
        let mut flags = sample_flags();
        flags
            .parse(&args(&["--length", "1.5", "-l", "2.5", "--length=3.5"]))
            .unwrap();
        assert_eq!(flags.get_float("length"), 3.5);
    }

    #[test]
    fn parse_matches_aliases_by_token_form() {
        // A short alias 'u' and a distinct long alias "u" can coexist; the
        // token's own form decides which one a match goes to.
        let mut flags = Flags::from(vec![
            Flag {
                short: Some('u'),
                long: Some("user".to_owned()),
                ..Flag::default()
            },
            Flag {
                long: Some("u".to_owned()),
                kind: Kind::String,
                ..Flag::default()
            },
        ]);
        assert_eq!(flags.validate(), Ok(()));

        let unparsed = flags.parse(&args(&["--u", "value"])).unwrap();
        assert!(unparsed.is_empty());
        let long_u = flags
            .iter()
            .find(|flag| flag.long.as_deref() == Some("u"))
            .expect("declared");
        assert!(long_u.matched);
        assert_eq!(
            long_u.value.as_ref().map(|value| value.as_str()),
            Some("value")
        );

        flags.reset();
        let unparsed = flags.parse(&args(&["-u", "tail"])).unwrap();
        assert_eq!(unparsed, vec!["tail"]);
        let short_u = flags
            .iter()
            .find(|flag| flag.short == Some('u'))
            .expect("declared");
        assert!(short_u.matched);
        assert!(!flags
            .iter()
            .any(|flag| flag.long.as_deref() == Some("u") && flag.matched));
    }

    #[test]
    fn parse_bare_dashes_are_positional() {
        let mut flags = sample_flags();
        let unparsed = flags.parse(&args(&["-", "--", "tail"])).unwrap();
        assert_eq!(unparsed, vec!["-", "--", "tail"]);
    }

    #[test]
    fn required_are_parsed() {
        let mut flags = Flags::from(vec![Flag {
            short: Some('u'),
            long: Some("url".to_owned()),
            kind: Kind::String,
            required: true,
            ..Flag::default()
        }]);
        assert_eq!(
            flags.required_are_parsed(),
            Err(Error::RequiredMissing("--url".to_owned()))
        );

        flags.parse(&args(&["-u", "http://x"])).unwrap();
        assert_eq!(flags.required_are_parsed(), Ok(()));

        assert_eq!(Flags::new().required_are_parsed(), Ok(()));
    }

    #[test]
    fn append_help_is_idempotent() {
        let mut flags = sample_flags();
        flags.append_help_if_not_present();
        flags.append_help_if_not_present();

        let count = flags
            .iter()
            .filter(|flag| flag.long.as_deref() == Some("help"))
            .count();
        assert_eq!(count, 1);
        assert_eq!(flags.validate(), Ok(()));
    }

    #[test]
    fn append_help_respects_claimed_aliases() {
        let mut flags = Flags::from(vec![Flag {
            short: Some('h'),
            long: Some("host".to_owned()),
            kind: Kind::String,
            ..Flag::default()
        }]);
        flags.append_help_if_not_present();
        assert!(flags.lookup("help").is_none());
    }

    #[test]
    fn append_version_is_idempotent() {
        let mut flags = sample_flags();
        flags.append_version_if_not_present();
        flags.append_version_if_not_present();

        let count = flags
            .iter()
            .filter(|flag| flag.long.as_deref() == Some("version"))
            .count();
        assert_eq!(count, 1);
        assert_eq!(flags.validate(), Ok(()));
    }

    #[test]
    fn accessors_miss_silently() {
        let empty = Flags::new();
        assert_eq!(empty.get_str(""), "");
        assert_eq!(empty.get_int("t"), 0);
        assert!(!empty.get_bool("d"));
        assert_eq!(empty.get_float("l"), 0.0);

        // Declared but never parsed.
        let flags = sample_flags();
        assert_eq!(flags.get_str("url"), "");
        assert!(!flags.get_bool("debug"));

        // Kind mismatch after a successful parse.
        let mut flags = sample_flags();
        flags.parse(&args(&["--length=3.25"])).unwrap();
        assert_eq!(flags.get_int("length"), 0);
        assert_eq!(flags.get_str("length"), "");
    }

    #[test]
    fn reset_clears_parse_state() {
        let mut flags = sample_flags();
        flags.parse(&args(&["--debug"])).unwrap();
        assert!(flags.get_bool("debug"));

        flags.reset();
        assert!(!flags.get_bool("debug"));
        assert!(flags.iter().all(|flag| !flag.matched));
    }
}
