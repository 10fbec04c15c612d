//! # TidyJson
//!
//! A streaming JSON validator and re-formatter: one pass over the input
//! characters that checks the JSON grammar and re-emits the document with
//! configurable indentation and line endings.
//!
//! TidyJson never builds a value tree. Every character of the document is
//! copied through verbatim; only the insignificant whitespace changes:
//!
//! - Objects and arrays are expanded one member/element per line, indented
//!   once per nesting depth
//! - Empty objects and arrays are kept on a single line (`{}`, `[]`)
//! - A member colon is followed by exactly one space
//! - Numbers, strings, and literals are emitted exactly as read, with no
//!   re-canonicalization
//!
//! Validation is whole-or-nothing: the first grammar violation fails the
//! entire call, and no partial output is returned. Exactly one top-level
//! value is accepted; trailing content after it is an error.
//!
//! ## Command-Line Tool
//!
//! This crate includes the `tjson` CLI tool for formatting JSON from the
//! terminal:
//!
//! ```sh
//! # Install
//! cargo install tidyjson
//!
//! # Format JSON from stdin
//! echo '{"a":1,"b":2}' | tjson
//!
//! # Format a file
//! tjson input.json -o output.json
//! ```
//!
//! Run `tjson --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use tidyjson::Formatter;
//!
//! let input = r#"{"name":"Alice","scores":[95,87,92],"active":true}"#;
//!
//! let formatter = Formatter::new();
//! let output = formatter.format(input).unwrap();
//!
//! println!("{}", output);
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be formatted directly:
//!
//! ```rust
//! use serde::Serialize;
//! use tidyjson::Formatter;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let formatter = Formatter::new();
//! let output = formatter.serialize(&player).unwrap();
//! ```
//!
//! ## Configuration
//!
//! Customize the output through [`TidyJsonOptions`]:
//!
//! ```rust
//! use tidyjson::{Formatter, NewLineStyle};
//!
//! let mut formatter = Formatter::new();
//! formatter.options.indent_string = "    ".to_string();
//! formatter.options.newline_style = NewLineStyle::Crlf;
//!
//! let output = formatter.format(r#"{"values":[1,2,3]}"#).unwrap();
//! ```
//!
//! ## Diagnostics
//!
//! Formatting failures are silent apart from the returned error. A
//! [`DiagnosticSink`] can be injected to additionally receive one
//! human-readable message per failed call — useful for surfacing parse
//! problems in logs or developer tooling:
//!
//! ```rust
//! use std::sync::Arc;
//! use tidyjson::{CollectorSink, Formatter};
//!
//! let sink = Arc::new(CollectorSink::new());
//! let formatter = Formatter::new().with_sink(sink.clone());
//!
//! assert!(formatter.format("[1, 2").is_err());
//! assert_eq!(sink.messages().len(), 1);
//! ```

mod buffer;
mod cursor;
mod diagnostics;
mod error;
mod formatter;
mod options;

pub use crate::cursor::InputPosition;
pub use crate::diagnostics::{CollectorSink, DiagnosticSink, NullSink, StderrSink};
pub use crate::error::TidyJsonError;
pub use crate::formatter::{format, Formatter};
pub use crate::options::{NewLineStyle, TidyJsonOptions};
