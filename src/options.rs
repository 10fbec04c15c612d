/// Line ending style for the formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLineStyle {
    /// Classic-Mac-style line endings (`\r`).
    Cr,
    /// Unix-style line endings (`\n`).
    Lf,
    /// Windows-style line endings (`\r\n`).
    Crlf,
}

impl NewLineStyle {
    /// The literal byte sequence inserted at every structural line break.
    pub fn as_str(self) -> &'static str {
        match self {
            NewLineStyle::Cr => "\r",
            NewLineStyle::Lf => "\n",
            NewLineStyle::Crlf => "\r\n",
        }
    }
}

/// Configuration options for JSON formatting.
///
/// Use [`Default::default()`] or [`TidyJsonOptions::recommended()`] to get
/// sensible defaults, then modify individual fields as needed.
///
/// # Example
///
/// ```rust
/// use tidyjson::{NewLineStyle, TidyJsonOptions};
///
/// let mut options = TidyJsonOptions::default();
/// options.indent_string = "\t".to_string();
/// options.newline_style = NewLineStyle::Crlf;
/// ```
#[derive(Debug, Clone)]
pub struct TidyJsonOptions {
    /// String emitted once per nesting depth at the start of each
    /// structural line. Any string is allowed. Default: two spaces.
    pub indent_string: String,

    /// Line ending style for the output. Default: [`NewLineStyle::Lf`].
    pub newline_style: NewLineStyle,

    /// Maximum number of nested objects/arrays accepted before the input
    /// is rejected. Bounds stack use on pathologically deep documents.
    /// Default: 200.
    pub max_nesting_depth: usize,
}

impl Default for TidyJsonOptions {
    fn default() -> Self {
        Self {
            indent_string: "  ".to_string(),
            newline_style: NewLineStyle::Lf,
            max_nesting_depth: 200,
        }
    }
}

impl TidyJsonOptions {
    /// Creates a new `TidyJsonOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`], but may include
    /// improved defaults in future versions without breaking compatibility.
    pub fn recommended() -> Self {
        Self::default()
    }
}
