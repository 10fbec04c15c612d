use std::sync::Arc;

use crate::buffer::OutputBuffer;
use crate::cursor::CharCursor;
use crate::diagnostics::{DiagnosticSink, NullSink};
use crate::error::TidyJsonError;
use crate::options::TidyJsonOptions;

/// Formats `input` with default options (two-space indent, LF line endings).
///
/// Shorthand for `Formatter::new().format(input)`.
pub fn format(input: &str) -> Result<String, TidyJsonError> {
    Formatter::new().format(input)
}

/// Streaming JSON validator and re-formatter.
///
/// [`Formatter::format`] walks the input once, character by character,
/// verifying it against the JSON grammar and re-emitting it with the
/// configured indentation and line endings. No value tree is built; the
/// content of the document is copied through verbatim and only the
/// insignificant whitespace changes.
///
/// # Example
///
/// ```rust
/// use tidyjson::Formatter;
///
/// let formatter = Formatter::new();
/// let output = formatter.format(r#"{"a":1,"b":[1,2]}"#).unwrap();
///
/// assert_eq!(output, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}");
/// ```
pub struct Formatter {
    /// Formatting options. Modify directly before calling [`Formatter::format`].
    pub options: TidyJsonOptions,
    sink: Arc<dyn DiagnosticSink + Send + Sync>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            options: TidyJsonOptions::default(),
            sink: Arc::new(NullSink),
        }
    }

    /// Replaces the diagnostic sink.
    ///
    /// On every failed [`Formatter::format`] call, the sink receives one
    /// human-readable description of the first grammar violation. The
    /// default sink discards messages.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use tidyjson::{CollectorSink, Formatter};
    ///
    /// let sink = Arc::new(CollectorSink::new());
    /// let formatter = Formatter::new().with_sink(sink.clone());
    ///
    /// assert!(formatter.format("{\"a\": tru}").is_err());
    /// assert_eq!(sink.messages().len(), 1);
    /// ```
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink + Send + Sync>) -> Self {
        self.sink = sink;
        self
    }

    /// Validates `input` against the JSON grammar and returns it re-indented.
    ///
    /// Exactly one top-level value is accepted; trailing content after it,
    /// even another valid JSON document, is an error. On any grammar
    /// violation the whole call fails: no partial output is returned, and
    /// the diagnostic sink receives a single message describing the first
    /// violation. Callers should fall back to the raw input text when this
    /// returns `Err`.
    pub fn format(&self, input: &str) -> Result<String, TidyJsonError> {
        let pass = FormatPass {
            cursor: CharCursor::new(input),
            out: OutputBuffer::new(&self.options),
            depth: 0,
            options: &self.options,
        };
        match pass.run() {
            Ok(text) => Ok(text),
            Err(err) => {
                self.sink.report(&err.message);
                Err(err)
            }
        }
    }

    /// Serializes `value` to JSON and formats the result.
    ///
    /// Any type implementing [`serde::Serialize`] can be pretty-printed
    /// directly:
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use tidyjson::Formatter;
    ///
    /// #[derive(Serialize)]
    /// struct Player {
    ///     name: String,
    ///     scores: Vec<i32>,
    /// }
    ///
    /// let player = Player { name: "Alice".into(), scores: vec![95, 87] };
    /// let output = Formatter::new().serialize(&player).unwrap();
    /// assert!(output.starts_with("{\n  \"name\": \"Alice\""));
    /// ```
    pub fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String, TidyJsonError> {
        let json = serde_json::to_string(value)
            .map_err(|err| TidyJsonError::simple(format!("Value is not representable as JSON: {}", err)))?;
        self.format(&json)
    }
}

/// State for one `format` call: the cursor over the input, the shared
/// output buffer, and the current indent depth. Dropped when the call
/// returns, on every exit path.
struct FormatPass<'a> {
    cursor: CharCursor,
    out: OutputBuffer,
    depth: usize,
    options: &'a TidyJsonOptions,
}

impl FormatPass<'_> {
    fn run(mut self) -> Result<String, TidyJsonError> {
        self.read_value()?;
        if !self.cursor.at_end() {
            return Err(self.cursor.error("Multiple top-level values are not allowed"));
        }
        Ok(self.out.into_string())
    }

    /// `value := object | array | number | string | "true" | "false" | "null"`
    ///
    /// Whitespace around the value is consumed and discarded; everything
    /// else is copied through.
    fn read_value(&mut self) -> Result<(), TidyJsonError> {
        self.skip_whitespace();
        match self.cursor.peek() {
            Some('{') => self.read_object()?,
            Some('[') => self.read_array()?,
            Some('-' | '0'..='9') => self.read_number()?,
            Some('"') => self.read_string()?,
            Some('t') => self.read_literal("true")?,
            Some('f') => self.read_literal("false")?,
            Some('n') => self.read_literal("null")?,
            _ => return Err(self.cursor.error("Expected a value")),
        }
        self.skip_whitespace();
        Ok(())
    }

    fn read_object(&mut self) -> Result<(), TidyJsonError> {
        self.copy_char(); // {
        self.skip_whitespace();
        if self.cursor.peek() == Some('}') {
            self.copy_char();
            return Ok(());
        }
        self.enter_scope()?;
        self.next_line();

        loop {
            self.read_object_member()?;
            match self.cursor.peek() {
                Some(',') => {
                    self.copy_char();
                    self.next_line();
                }
                Some('}') => {
                    self.leave_scope();
                    self.next_line();
                    self.copy_char();
                    return Ok(());
                }
                None => {
                    return Err(self.cursor.error("Unexpected end of input while processing object"))
                }
                Some(_) => {
                    return Err(self.cursor.error("Expected ',' or '}' between object members"))
                }
            }
        }
    }

    /// `member := string ':' value`. The colon is always followed by
    /// exactly one space, never a newline.
    fn read_object_member(&mut self) -> Result<(), TidyJsonError> {
        self.skip_whitespace();
        if self.cursor.peek() != Some('"') {
            return Err(self.cursor.error("Expected property name string"));
        }
        self.read_string()?;
        self.skip_whitespace();

        if self.cursor.peek() != Some(':') {
            return Err(self.cursor.error("Expected ':' after property name"));
        }
        self.copy_char();
        self.out.push_char(' ');

        self.read_value()
    }

    fn read_array(&mut self) -> Result<(), TidyJsonError> {
        self.copy_char(); // [
        self.skip_whitespace();
        if self.cursor.peek() == Some(']') {
            self.copy_char();
            return Ok(());
        }
        self.enter_scope()?;
        self.next_line();

        loop {
            self.read_value()?;
            match self.cursor.peek() {
                Some(',') => {
                    self.copy_char();
                    self.next_line();
                }
                Some(']') => {
                    self.leave_scope();
                    self.next_line();
                    self.copy_char();
                    return Ok(());
                }
                None => {
                    return Err(self.cursor.error("Unexpected end of input while processing array"))
                }
                Some(_) => {
                    return Err(self.cursor.error("Expected ',' or ']' between array elements"))
                }
            }
        }
    }

    fn read_number(&mut self) -> Result<(), TidyJsonError> {
        self.read_integer()?;
        self.read_fraction()?;
        self.read_exponent()
    }

    fn read_integer(&mut self) -> Result<(), TidyJsonError> {
        if self.cursor.peek() == Some('-') {
            self.copy_char();
        }
        if self.cursor.peek() != Some('0') {
            return self.read_digits();
        }

        self.copy_char();
        if matches!(self.cursor.peek(), Some('0'..='9')) {
            return Err(self.cursor.error("Leading zeros are not allowed in numbers"));
        }
        Ok(())
    }

    fn read_fraction(&mut self) -> Result<(), TidyJsonError> {
        if self.cursor.peek() != Some('.') {
            return Ok(());
        }
        self.copy_char();
        self.read_digits()
    }

    fn read_exponent(&mut self) -> Result<(), TidyJsonError> {
        if !matches!(self.cursor.peek(), Some('e' | 'E')) {
            return Ok(());
        }
        self.copy_char();
        if matches!(self.cursor.peek(), Some('+' | '-')) {
            self.copy_char();
        }
        self.read_digits()
    }

    fn read_digits(&mut self) -> Result<(), TidyJsonError> {
        let mut has_digits = false;
        while matches!(self.cursor.peek(), Some('0'..='9')) {
            self.copy_char();
            has_digits = true;
        }
        if has_digits {
            Ok(())
        } else {
            Err(self.cursor.error("Expected digits while processing number"))
        }
    }

    fn read_string(&mut self) -> Result<(), TidyJsonError> {
        self.copy_char(); // opening quote

        loop {
            match self.cursor.peek() {
                Some('"') => {
                    self.copy_char();
                    return Ok(());
                }
                Some('\\') => self.read_escape_sequence()?,
                None => {
                    return Err(self.cursor.error("Unexpected end of input while processing string"))
                }
                Some(_) => self.copy_char(),
            }
        }
    }

    fn read_escape_sequence(&mut self) -> Result<(), TidyJsonError> {
        self.copy_char(); // backslash
        match self.cursor.peek() {
            Some('"' | '/' | '\\' | 'b' | 'f' | 'n' | 'r' | 't') => {
                self.copy_char();
                Ok(())
            }
            Some('u') => {
                self.copy_char();
                for _ in 0..4 {
                    match self.cursor.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => self.copy_char(),
                        _ => return Err(self.cursor.error("Bad unicode escape in string")),
                    }
                }
                Ok(())
            }
            _ => Err(self.cursor.error("Bad escaped character in string")),
        }
    }

    fn read_literal(&mut self, literal: &str) -> Result<(), TidyJsonError> {
        for expected in literal.chars() {
            if self.cursor.peek() != Some(expected) {
                return Err(self.cursor.error("Unexpected keyword"));
            }
            self.copy_char();
        }
        Ok(())
    }

    /// Consumes one input character and appends it to the output. Callers
    /// only reach this after a successful `peek`.
    fn copy_char(&mut self) {
        if let Some(ch) = self.cursor.read() {
            self.out.push_char(ch);
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.cursor.read();
        }
    }

    fn enter_scope(&mut self) -> Result<(), TidyJsonError> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(self.cursor.error("Maximum nesting depth exceeded"));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave_scope(&mut self) {
        self.depth -= 1;
    }

    fn next_line(&mut self) {
        self.out.new_line(self.depth);
    }
}
