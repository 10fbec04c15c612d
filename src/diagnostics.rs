use std::sync::Mutex;

/// Receives one-line descriptions of grammar violations.
///
/// The sink is a fire-and-forget side channel: it never affects the value
/// returned by [`Formatter::format`](crate::Formatter::format), and at most
/// one message is reported per failed call. Production configurations use
/// [`NullSink`]; tests and tools can inject [`CollectorSink`] or
/// [`StderrSink`].
pub trait DiagnosticSink {
    fn report(&self, message: &str);
}

/// Discards every diagnostic. The default sink.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _message: &str) {}
}

/// Writes each diagnostic to standard error.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Collects diagnostics in memory so they can be inspected afterwards.
#[derive(Debug, Default)]
pub struct CollectorSink {
    messages: Mutex<Vec<String>>,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for CollectorSink {
    fn report(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
