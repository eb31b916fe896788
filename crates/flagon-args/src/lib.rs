//! Flag declaration, validation and argument-vector parsing.
//!
//! The model is deliberately small. A [`Flag`] declares one option: a short
//! and/or long alias, the [`Kind`] of value it takes, and whether it is
//! required. A [`Flags`] set owns the declarations and drives a single
//! left-to-right pass over the raw argument vector, filling in matched flags
//! and handing every other token back to the caller in order. Flag-shaped
//! tokens that match no declaration pass through as positionals instead of
//! erroring, so unknown flags degrade gracefully.
//!
//! ```
//! use flagon_args::{Flag, Flags, Kind};
//!
//! let mut flags = Flags::from(vec![
//!     Flag {
//!         short: Some('u'),
//!         long: Some("url".into()),
//!         kind: Kind::String,
//!         ..Flag::default()
//!     },
//!     Flag {
//!         short: Some('d'),
//!         long: Some("debug".into()),
//!         ..Flag::default()
//!     },
//! ]);
//! flags.validate()?;
//!
//! let args: Vec<String> = vec!["-u".into(), "http://x".into(), "--debug".into()];
//! let leftover = flags.parse(&args)?;
//!
//! assert!(leftover.is_empty());
//! assert_eq!(flags.get_str("url"), "http://x");
//! assert!(flags.get_bool("d"));
//! # Ok::<(), flagon_args::Error>(())
//! ```
//!
//! Validation, parsing and required-flag checking are separate passes the
//! caller invokes explicitly; none of them chains into another.

pub mod argument;
pub mod error;
pub mod flag;

pub use argument::{Kind, Parsed, Value};
pub use error::Error;
pub use flag::{Flag, Flags};
