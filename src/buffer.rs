use crate::options::TidyJsonOptions;

/// Append-only accumulator for the formatted output.
///
/// One buffer is shared by the whole recursive walk; every consumed input
/// character lands here verbatim, plus the structural whitespace the
/// formatter inserts. Indent strings are built once per depth and cached.
#[derive(Debug)]
pub struct OutputBuffer {
    text: String,
    eol: String,
    indent_strings: Vec<String>,
}

impl OutputBuffer {
    pub fn new(opts: &TidyJsonOptions) -> Self {
        Self {
            text: String::new(),
            eol: opts.newline_style.as_str().to_string(),
            indent_strings: vec![String::new(), opts.indent_string.clone()],
        }
    }

    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Ends the current line and indents the next one to `depth` levels.
    pub fn new_line(&mut self, depth: usize) {
        self.text.push_str(&self.eol);
        self.ensure_indent(depth);
        self.text.push_str(&self.indent_strings[depth]);
    }

    pub fn into_string(self) -> String {
        self.text
    }

    fn ensure_indent(&mut self, level: usize) {
        if level < self.indent_strings.len() {
            return;
        }
        let base = self.indent_strings[1].clone();
        for i in self.indent_strings.len()..=level {
            let next = format!("{}{}", self.indent_strings[i - 1], base);
            self.indent_strings.push(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::NewLineStyle;

    #[test]
    fn new_line_emits_eol_and_cached_indent() {
        let mut opts = TidyJsonOptions::default();
        opts.newline_style = NewLineStyle::Crlf;
        let mut buffer = OutputBuffer::new(&opts);
        buffer.push_char('[');
        buffer.new_line(2);
        buffer.push_char('1');
        assert_eq!(buffer.into_string(), "[\r\n    1");
    }
}
